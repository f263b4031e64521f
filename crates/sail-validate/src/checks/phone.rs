//! Home phone normalization.

use sail_model::MemberRecord;
use sail_normalization::{extract_digits, format_phone_number};

use crate::failure::ValidationFailure;

/// Reduce the home phone to digits and reformat it as `DDD-DDD-DDDD`.
///
/// On failure the field keeps the extracted digits.
pub fn check(record: &mut MemberRecord) -> Vec<ValidationFailure> {
    let digits = extract_digits(record.home_phone.as_deref());

    match digits.as_deref().and_then(format_phone_number) {
        Some(formatted) => {
            record.home_phone = Some(formatted);
            Vec::new()
        }
        None => {
            let count = digits.as_deref().map_or(0, str::len);
            record.home_phone = digits;
            vec![ValidationFailure::PhoneLength { digits: count }]
        }
    }
}
