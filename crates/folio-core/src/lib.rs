//! Folio Core Library
//!
//! Domain types, validation, and configuration for the Folio portfolio site.
//! Everything here is pure and browser-free: the UI crate layers Leptos
//! components on top, and the test suite runs on the host.

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod validate;

pub use clock::format_clock;
pub use config::{Config, ContactConfig, SiteConfig};
pub use content::{Collection, EntryMeta};
pub use error::{CoreError, Result};
pub use form::{FieldChecks, MessageDraft, SubmissionStatus};
pub use validate::{Field, FieldError, FieldState, validate_email, validate_message, validate_name};
