//! Client-side checks run before a user form is submitted.

use std::sync::LazyLock;

use api::UserDraft;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\S+@\S+$").expect("email pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";

/// Per-field validation messages. `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a draft, returning it trimmed when both fields pass.
pub fn validate(draft: &UserDraft) -> Result<UserDraft, ValidationErrors> {
    let name = draft.name.trim();
    let email = draft.email.trim();

    let errors = ValidationErrors {
        name: name.is_empty().then_some(NAME_REQUIRED),
        email: if email.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !is_valid_email(email) {
            Some(EMAIL_INVALID)
        } else {
            None
        },
    };

    if errors.is_empty() {
        Ok(UserDraft::new(name, email))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_is_trimmed() {
        let draft = validate(&UserDraft::new("  Amit Sharma ", " amit@example.com ")).unwrap();
        assert_eq!(draft, UserDraft::new("Amit Sharma", "amit@example.com"));
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate(&UserDraft::new("   ", "")).unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("Priya.Singh@Example.COM"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("@example.com"));

        let errors = validate(&UserDraft::new("Priya", "not-an-email")).unwrap_err();
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(EMAIL_INVALID));
    }
}
