//! Text cleanup and full-name derivation.

use sail_model::MemberRecord;
use sail_normalization::capitalize;

/// Trim the free-text fields that are not capitalized.
pub fn trim_fields(record: &mut MemberRecord) {
    for value in [
        &mut record.province_code,
        &mut record.email,
        &mut record.comment,
    ] {
        if let Some(text) = value.as_mut() {
            let trimmed = text.trim();
            if trimmed.len() != text.len() {
                *text = trimmed.to_string();
            }
        }
    }
}

/// Capitalize names and address lines.
///
/// Absent values become empty strings.
pub fn capitalize_fields(record: &mut MemberRecord) {
    for value in [
        &mut record.first_name,
        &mut record.last_name,
        &mut record.spouse_first_name,
        &mut record.spouse_last_name,
        &mut record.street,
        &mut record.city,
    ] {
        *value = Some(capitalize(value.as_deref()));
    }
}

/// Set `full_name` from the already capitalized name fields.
pub fn derive(record: &mut MemberRecord) {
    let full_name = derive_full_name(
        record.last_name.as_deref().unwrap_or(""),
        record.first_name.as_deref().unwrap_or(""),
        record.spouse_first_name.as_deref().unwrap_or(""),
        record.spouse_last_name.as_deref().unwrap_or(""),
    );
    record.full_name = Some(full_name);
}

/// Compose the listing name of a member and their spouse.
///
/// | spouse first | spouse last          | result                       |
/// |--------------|----------------------|------------------------------|
/// | empty        | empty                | `Last, First`                |
/// | set          | empty or same as own | `Last, First & SpouseFirst`  |
/// | set          | different            | `Last, First & SpLast, SpFirst` |
/// | empty        | set                  | `Last, First & SpouseLast`   |
///
/// The last row applies even when the spouse shares the member's surname,
/// which yields `Smith, John & Smith`.
pub fn derive_full_name(
    last: &str,
    first: &str,
    spouse_first: &str,
    spouse_last: &str,
) -> String {
    if spouse_first.is_empty() && spouse_last.is_empty() {
        return format!("{last}, {first}");
    }

    let mut full_name = if spouse_last.is_empty() || spouse_last == last {
        format!("{last}, {first} & {spouse_first}")
    } else {
        format!("{last}, {first} & {spouse_last}, {spouse_first}")
    };

    // Evaluated after the surname comparison and replaces its result.
    if spouse_first.is_empty() {
        full_name = format!("{last}, {first} & {spouse_last}");
    }

    full_name
}
