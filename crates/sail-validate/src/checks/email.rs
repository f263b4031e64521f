//! Email address format.

use std::sync::LazyLock;

use regex::Regex;
use sail_model::MemberRecord;

use crate::failure::ValidationFailure;

/// Exactly one `@`, with something on each side of it.
///
/// Any other character is allowed, so accented local parts and
/// internationalized domains pass.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+$").expect("Invalid email regex"));

/// Check the email format. Absent or empty addresses pass here; whether one
/// is needed depends on the communication preference.
pub fn check(record: &MemberRecord) -> Vec<ValidationFailure> {
    match record.email.as_deref() {
        Some(email) if !email.is_empty() && !is_valid_email(email) => {
            vec![ValidationFailure::EmailFormat]
        }
        _ => Vec::new(),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("skipper@example.com"));
        assert!(is_valid_email("first.last+club@mail.example.ca"));
        assert!(is_valid_email("o'brien@example.org"));
        assert!(is_valid_email("josé@example.com"));
        assert!(is_valid_email("skipper@bücher.example"));
        assert!(is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("skipper"));
        assert!(!is_valid_email("skipper@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two@at@example.com"));
        assert!(!is_valid_email("@"));
    }

    #[test]
    fn test_empty_email_is_not_a_format_error() {
        let absent = MemberRecord::default();
        assert!(check(&absent).is_empty());

        let empty = MemberRecord {
            email: Some(String::new()),
            ..MemberRecord::default()
        };
        assert!(check(&empty).is_empty());

        let bad = MemberRecord {
            email: Some("not-an-address".to_string()),
            ..MemberRecord::default()
        };
        assert_eq!(check(&bad), vec![ValidationFailure::EmailFormat]);
    }
}
