//! Join year and membership flags.

use sail_model::MemberRecord;

use crate::failure::ValidationFailure;

/// Check the join year against the record's state and the current year.
pub fn check_year_joined(record: &MemberRecord, current_year: i32) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if record.is_new() && record.year_joined.is_none() {
        failures.push(ValidationFailure::YearJoinedMissing);
    }

    if let Some(year) = record.year_joined
        && year > current_year
    {
        failures.push(ValidationFailure::YearJoinedInFuture { year, current_year });
    }

    failures
}

/// Default unset flags to `false`.
pub fn default_flags(record: &mut MemberRecord) {
    record.task_exempt.get_or_insert(false);
    record.use_canada_post.get_or_insert(false);
}
