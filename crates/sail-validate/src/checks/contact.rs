//! Fields required by the member's communication preference.

use sail_model::{MemberField, MemberRecord, is_blank};

use crate::failure::ValidationFailure;

/// Members reachable electronically need an email address; members who
/// restricted communication to Canada Post need a complete mailing address.
pub fn check(record: &MemberRecord) -> Vec<ValidationFailure> {
    if !record.use_canada_post.unwrap_or(false) {
        if is_blank(record.email.as_deref()) {
            return vec![ValidationFailure::EmailRequired];
        }
        return Vec::new();
    }

    [
        (MemberField::Street, record.street.as_deref()),
        (MemberField::City, record.city.as_deref()),
        (MemberField::ProvinceCode, record.province_code.as_deref()),
        (MemberField::PostalCode, record.postal_code.as_deref()),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(*value))
    .map(|(field, _)| ValidationFailure::CanadaPostFieldRequired { field })
    .collect()
}
