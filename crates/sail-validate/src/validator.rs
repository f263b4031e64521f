//! Member validation entry points.

use chrono::Datelike;
use sail_model::MemberRecord;

use crate::checks::{address, contact, email, membership, names, phone, presence};
use crate::failure::ValidationFailure;
use crate::lookup::ProvinceLookup;
use crate::report::ValidationReport;

/// Options that affect rule outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Year used for the "joined in the future" check. Read from the local
    /// clock when unset.
    pub current_year: Option<i32>,
}

impl ValidatorOptions {
    /// Resolve the year to compare join years against.
    pub fn current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Normalizes and validates member records against a province table.
///
/// Holds no per-record state; one validator can check any number of
/// records, concurrently if the lookup allows it.
#[derive(Debug, Clone)]
pub struct MemberValidator<L> {
    lookup: L,
    options: ValidatorOptions,
}

impl<L: ProvinceLookup> MemberValidator<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            options: ValidatorOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the current year instead of reading the clock.
    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.options.current_year = Some(year);
        self
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Normalize the record in place and return every failure found.
    ///
    /// All rules run regardless of earlier failures. The returned order is
    /// the rule order: province/postal, phone, email, join year, then the
    /// communication preference fields.
    pub fn validate(&self, record: &mut MemberRecord) -> Vec<ValidationFailure> {
        let _span = tracing::debug_span!("validate_member", member_id = record.member_id).entered();
        let mut failures = Vec::new();

        names::trim_fields(record);
        names::capitalize_fields(record);
        names::derive(record);
        failures.extend(address::check(record, &self.lookup));
        failures.extend(phone::check(record));
        failures.extend(email::check(record));
        failures.extend(membership::check_year_joined(
            record,
            self.options.current_year(),
        ));
        membership::default_flags(record);
        failures.extend(contact::check(record));

        if failures.is_empty() {
            tracing::debug!("Member record accepted");
        } else {
            tracing::debug!(
                failures = failures.len(),
                fields = ?failures.iter().map(|f| f.field().name()).collect::<Vec<_>>(),
                "Member record rejected"
            );
        }

        failures
    }

    /// Validate a form submission.
    ///
    /// Required-field failures are reported on their own: when any are
    /// present the record is returned untouched and the remaining rules do
    /// not run.
    pub fn validate_submission(&self, record: &mut MemberRecord) -> Vec<ValidationFailure> {
        let missing = presence::check(record);
        if !missing.is_empty() {
            tracing::debug!(
                member_id = record.member_id,
                missing = missing.len(),
                "Required fields missing, skipping member rules"
            );
            return missing;
        }
        self.validate(record)
    }

    /// Validate a submission and wrap the outcome in a report.
    pub fn report(&self, record: &mut MemberRecord) -> ValidationReport {
        let failures = self.validate_submission(record);
        ValidationReport::new(record, failures)
    }
}

/// Validate one record with the given lookup.
///
/// Shorthand for `MemberValidator::new(lookup).validate(record)`.
pub fn validate_member<L>(record: &mut MemberRecord, lookup: &L) -> Vec<ValidationFailure>
where
    L: ProvinceLookup + ?Sized,
{
    MemberValidator::new(lookup).validate(record)
}

/// Report required fields that are missing from a submission.
pub fn check_presence(record: &MemberRecord) -> Vec<ValidationFailure> {
    presence::check(record)
}
