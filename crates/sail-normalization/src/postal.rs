//! Canadian postal codes and US zip codes.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::extract_digits;

/// Canadian postal code, `A1A 1A1` with an optional space.
///
/// D, F, I, O, Q and U never appear; W and Z never lead.
pub static CANADIAN_POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z] ?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("Invalid postal code regex")
});

/// Check a Canadian postal code.
///
/// Absent input passes: whether the field is mandatory is decided elsewhere.
/// Supplied but blank input fails.
pub fn validate_canadian_postal_code(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return true;
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    CANADIAN_POSTAL_CODE_REGEX.is_match(trimmed)
}

/// Format a Canadian postal code as `A1A 1A1`.
///
/// Six characters without a space get one inserted after the third. The
/// result is upper-cased whatever its length. No validation happens here.
pub fn format_canadian_postal_code(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim();
    let formatted = match trimmed.char_indices().nth(3) {
        Some((split, _)) if trimmed.chars().count() == 6 => {
            format!("{} {}", &trimmed[..split], &trimmed[split..])
        }
        _ => trimmed.to_string(),
    };
    Some(formatted.to_uppercase())
}

/// Check and normalize a US zip code.
///
/// Returns whether the code is acceptable along with the value to keep:
///
/// - absent or empty: accepted as `""` (zip codes are optional)
/// - 5 digits: accepted as the bare digits
/// - 9 digits: accepted as `DDDDD-DDDD`
/// - anything else: rejected, original text returned unchanged
///
/// Non-digit characters are ignored when counting.
pub fn validate_and_format_us_zip(text: Option<&str>) -> (bool, String) {
    let text = match text {
        None | Some("") => return (true, String::new()),
        Some(text) => text,
    };

    let digits = extract_digits(Some(text)).unwrap_or_default();
    match digits.len() {
        5 => (true, digits),
        9 => (true, format!("{}-{}", &digits[..5], &digits[5..])),
        _ => (false, text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canadian_postal_code_valid() {
        assert!(validate_canadian_postal_code(Some("K1A0B1")));
        assert!(validate_canadian_postal_code(Some("k1a 0b1")));
        assert!(validate_canadian_postal_code(Some("  N2L 3G1  ")));
        assert!(validate_canadian_postal_code(None));
    }

    #[test]
    fn test_canadian_postal_code_invalid() {
        assert!(!validate_canadian_postal_code(Some("")));
        assert!(!validate_canadian_postal_code(Some("   ")));
        // D never leads
        assert!(!validate_canadian_postal_code(Some("D1A0B1")));
        // Z is allowed later but never first
        assert!(!validate_canadian_postal_code(Some("Z1A0B1")));
        assert!(validate_canadian_postal_code(Some("K1Z0Z1")));
        // Only a single space is allowed
        assert!(!validate_canadian_postal_code(Some("K1A  0B1")));
        assert!(!validate_canadian_postal_code(Some("K1A-0B1")));
        assert!(!validate_canadian_postal_code(Some("12345")));
    }

    #[test]
    fn test_format_canadian_postal_code() {
        assert_eq!(format_canadian_postal_code(None), None);
        assert_eq!(
            format_canadian_postal_code(Some("K1A0B1")).as_deref(),
            Some("K1A 0B1")
        );
        assert_eq!(
            format_canadian_postal_code(Some("k1a 0b1")).as_deref(),
            Some("K1A 0B1")
        );
        assert_eq!(
            format_canadian_postal_code(Some(" n2l3g1 ")).as_deref(),
            Some("N2L 3G1")
        );
        // Other lengths are only upper-cased
        assert_eq!(format_canadian_postal_code(Some("abc")).as_deref(), Some("ABC"));
    }

    #[test]
    fn test_us_zip_accepts_five_and_nine_digits() {
        assert_eq!(
            validate_and_format_us_zip(Some("12345")),
            (true, "12345".to_string())
        );
        assert_eq!(
            validate_and_format_us_zip(Some("123456789")),
            (true, "12345-6789".to_string())
        );
        assert_eq!(
            validate_and_format_us_zip(Some(" 12345 6789 ")),
            (true, "12345-6789".to_string())
        );
    }

    #[test]
    fn test_us_zip_empty_is_accepted() {
        assert_eq!(validate_and_format_us_zip(None), (true, String::new()));
        assert_eq!(validate_and_format_us_zip(Some("")), (true, String::new()));
    }

    #[test]
    fn test_us_zip_rejects_other_lengths() {
        assert_eq!(
            validate_and_format_us_zip(Some("1234567")),
            (false, "1234567".to_string())
        );
        assert_eq!(
            validate_and_format_us_zip(Some("K1A 0B1")),
            (false, "K1A 0B1".to_string())
        );
        assert_eq!(
            validate_and_format_us_zip(Some("   ")),
            (false, "   ".to_string())
        );
    }
}
