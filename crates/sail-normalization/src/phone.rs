//! Phone number formatting.

/// Number of digits in a North American phone number.
pub const PHONE_DIGITS: usize = 10;

/// Format ten digits as `DDD-DDD-DDDD`.
///
/// Returns `None` unless the input is exactly ten ASCII digits.
pub fn format_phone_number(digits: &str) -> Option<String> {
    if digits.len() != PHONE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{}-{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_number() {
        assert_eq!(
            format_phone_number("4165551234").as_deref(),
            Some("416-555-1234")
        );
        assert_eq!(format_phone_number("416555123"), None);
        assert_eq!(format_phone_number("41655512345"), None);
        assert_eq!(format_phone_number("416-555-12"), None);
        assert_eq!(format_phone_number(""), None);
    }
}
