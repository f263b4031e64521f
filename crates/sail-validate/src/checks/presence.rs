//! Fields every submission must carry.

use sail_model::{MemberField, MemberRecord};

use crate::failure::ValidationFailure;

/// Fields that must be filled in before any other rule runs.
pub const REQUIRED_FIELDS: &[MemberField] = &[
    MemberField::FirstName,
    MemberField::LastName,
    MemberField::HomePhone,
];

/// Report required fields that are absent or whitespace-only.
pub fn check(record: &MemberRecord) -> Vec<ValidationFailure> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| {
            let value = match field {
                MemberField::FirstName => record.first_name.as_deref(),
                MemberField::LastName => record.last_name.as_deref(),
                MemberField::HomePhone => record.home_phone.as_deref(),
                _ => None,
            };
            value.is_none_or(|v| v.trim().is_empty())
        })
        .map(|field| ValidationFailure::Required { field })
        .collect()
}
