//! Pure validators for the contact form fields.
//!
//! Each validator is a function of the raw input string only, so it is safe
//! to run on every keystroke and again on blur. Results come back as a
//! [`FieldState`] that the form replaces wholesale; nothing here mutates
//! shared error state.

/// The fields the contact form renders, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Element id / wire name for this field.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number (Optional)",
            Self::Message => "Message",
        }
    }

    /// Whether this field participates in the submission gate.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }

    /// Validate a raw value for this field. Optional fields always pass.
    pub fn validate(self, value: &str) -> FieldState {
        match self {
            Self::Name => validate_name(value),
            Self::Email => validate_email(value),
            Self::Phone => FieldState::Valid,
            Self::Message => validate_message(value),
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Name left empty after trimming.
    EmptyName,
    /// Email does not look like `localpart@domain.tld`.
    MalformedEmail,
    /// Message left empty after trimming.
    EmptyMessage,
}

impl FieldError {
    /// Inline error text shown next to the offending input.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "Please share your name",
            Self::MalformedEmail => "Please use a valid email address",
            Self::EmptyMessage => "Please share your message",
        }
    }
}

/// Validation result for a single field.
///
/// The form holds one of these per field and swaps the whole value on every
/// check. `Unchecked` doubles as the cleared state right before a submission
/// goes out, which is what keeps a second submit from passing the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// No check has run yet, or the flags were dropped for a submission.
    #[default]
    Unchecked,
    /// The last check passed.
    Valid,
    /// The last check failed.
    Invalid(FieldError),
}

impl FieldState {
    /// Whether the last check passed.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Inline error text, when the last check failed.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Invalid(err) => Some(err.message()),
            _ => None,
        }
    }
}

/// Validate the name field: anything non-blank passes.
pub fn validate_name(value: &str) -> FieldState {
    if value.trim().is_empty() {
        FieldState::Invalid(FieldError::EmptyName)
    } else {
        FieldState::Valid
    }
}

/// Validate the email field against a `localpart@domain.tld` shape.
pub fn validate_email(value: &str) -> FieldState {
    if is_well_formed_email(value) {
        FieldState::Valid
    } else {
        FieldState::Invalid(FieldError::MalformedEmail)
    }
}

/// Validate the message field: anything non-blank passes.
pub fn validate_message(value: &str) -> FieldState {
    if value.trim().is_empty() {
        FieldState::Invalid(FieldError::EmptyMessage)
    } else {
        FieldState::Valid
    }
}

/// Shape check only: no whitespace, exactly one `@` with a non-empty local
/// part, and a dot inside the domain with at least one character on each
/// side. Deliverability is the mailer's problem.
fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rejects_blank_input() {
        for raw in ["", " ", "\t", "   \n "] {
            let state = validate_name(raw);
            assert_eq!(state, FieldState::Invalid(FieldError::EmptyName));
            assert!(!state.message().unwrap().is_empty());
        }
    }

    #[test]
    fn test_name_accepts_non_blank_input() {
        assert!(validate_name("Ada").is_valid());
        assert!(validate_name("  Ada  ").is_valid());
    }

    #[test]
    fn test_message_rejects_blank_input() {
        for raw in ["", "   ", "\n\n"] {
            let state = validate_message(raw);
            assert_eq!(state, FieldState::Invalid(FieldError::EmptyMessage));
            assert!(!state.message().unwrap().is_empty());
        }
    }

    #[test]
    fn test_message_accepts_non_blank_input() {
        assert!(validate_message("Hello there").is_valid());
    }

    #[test]
    fn test_email_accepts_plain_addresses() {
        for raw in [
            "a@b.co",
            "someone@example.com",
            "first.last@sub.example.org",
            "user+tag@example.io",
        ] {
            assert!(validate_email(raw).is_valid(), "expected valid: {raw}");
        }
    }

    #[test]
    fn test_email_rejects_missing_at_or_dot() {
        for raw in ["plainaddress", "user@domain", "user@domain.", "@example.com"] {
            assert_eq!(
                validate_email(raw),
                FieldState::Invalid(FieldError::MalformedEmail),
                "expected invalid: {raw}"
            );
        }
    }

    #[test]
    fn test_email_rejects_whitespace_and_double_at() {
        for raw in ["user @example.com", "user@ example.com", "a@@b.com", ""] {
            assert!(!validate_email(raw).is_valid(), "expected invalid: {raw}");
        }
    }

    #[test]
    fn test_field_dispatch() {
        assert!(Field::Phone.validate("").is_valid());
        assert!(!Field::Phone.is_required());
        assert!(Field::Name.is_required());
        assert_eq!(
            Field::Email.validate("nope"),
            FieldState::Invalid(FieldError::MalformedEmail)
        );
        assert_eq!(Field::Message.id(), "message");
        assert_eq!(Field::Phone.label(), "Phone Number (Optional)");
    }

    #[test]
    fn test_unchecked_is_not_valid() {
        let state = FieldState::default();
        assert_eq!(state, FieldState::Unchecked);
        assert!(!state.is_valid());
        assert!(state.message().is_none());
    }
}
