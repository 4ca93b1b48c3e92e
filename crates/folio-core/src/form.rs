//! Form state for the contact feature.

use serde::{Deserialize, Serialize};

use crate::validate::FieldState;

/// A contact message as typed by the visitor.
///
/// Serializes to the exact wire body the mailer endpoint expects:
/// `{"name", "email", "phone", "message"}`, all strings. The phone field is
/// sent as-is even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl MessageDraft {
    /// An empty draft. Resetting the form is replacing it with this.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Validity flags for the three required fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldChecks {
    pub name: FieldState,
    pub email: FieldState,
    pub message: FieldState,
}

impl FieldChecks {
    /// The submission gate: every required field is currently valid.
    pub fn ready(&self) -> bool {
        self.name.is_valid() && self.email.is_valid() && self.message.is_valid()
    }
}

/// Lifecycle of one submission attempt.
///
/// `Sending` disables the submit control, which is the entire backpressure
/// mechanism: at most one request can be in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing in flight; the form is editable.
    #[default]
    Idle,
    /// A request is in flight.
    Sending,
    /// The mailer accepted the last submission.
    Succeeded,
    /// The last submission was lost; the visitor can try again.
    Failed,
}

impl SubmissionStatus {
    /// Whether a request is currently in flight.
    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Submit-button text for the current state.
    pub fn label(self, ready: bool) -> &'static str {
        match self {
            Self::Sending => "SENDING...",
            _ if ready => "SEND MESSAGE",
            _ => "NOT READY TO SEND",
        }
    }
}
