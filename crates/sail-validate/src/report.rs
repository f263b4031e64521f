//! Validation outcome for one member.

use sail_model::{MemberField, MemberRecord};
use serde::{Deserialize, Serialize};

use crate::failure::ValidationFailure;

/// Flattened view of a failure for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    pub field: MemberField,
    pub label: String,
    pub code: String,
    pub message: String,
}

impl From<&ValidationFailure> for FailureEntry {
    fn from(failure: &ValidationFailure) -> Self {
        let field = failure.field();
        Self {
            field,
            label: field.label().to_string(),
            code: failure.code().to_string(),
            message: failure.message(),
        }
    }
}

/// Failures produced for a single record, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub member_id: i32,
    pub display_name: String,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn new(record: &MemberRecord, failures: Vec<ValidationFailure>) -> Self {
        Self {
            member_id: record.member_id,
            display_name: record.display_name(),
            failures,
        }
    }

    /// An empty failure list means the record may be persisted.
    pub fn is_accepted(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Failures attached to one field, in order.
    pub fn failures_for(&self, field: MemberField) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter().filter(move |f| f.field() == field)
    }

    /// Fields with at least one failure, in order of their first failure.
    pub fn fields(&self) -> Vec<MemberField> {
        let mut fields = Vec::new();
        for failure in &self.failures {
            let field = failure.field();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    pub fn entries(&self) -> Vec<FailureEntry> {
        self.failures.iter().map(FailureEntry::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(failures: Vec<ValidationFailure>) -> ValidationReport {
        let record = MemberRecord {
            member_id: 3,
            full_name: Some("Smith, John".to_string()),
            ..MemberRecord::default()
        };
        ValidationReport::new(&record, failures)
    }

    #[test]
    fn test_accepted_report() {
        let report = report(vec![]);
        assert!(report.is_accepted());
        assert_eq!(report.display_name, "Smith, John");
        assert!(report.fields().is_empty());
    }

    #[test]
    fn test_fields_in_first_failure_order() {
        let report = report(vec![
            ValidationFailure::ProvinceNotOnFile {
                code: "ZZ".to_string(),
            },
            ValidationFailure::PhoneLength { digits: 3 },
            ValidationFailure::CanadaPostFieldRequired {
                field: MemberField::ProvinceCode,
            },
        ]);
        assert_eq!(
            report.fields(),
            vec![MemberField::ProvinceCode, MemberField::HomePhone]
        );
        assert_eq!(report.failures_for(MemberField::ProvinceCode).count(), 2);
        assert_eq!(report.failure_count(), 3);
    }

    #[test]
    fn test_entries_flatten_failures() {
        let report = report(vec![ValidationFailure::ZipCodeFormat]);
        let entries = report.entries();
        assert_eq!(
            entries,
            vec![FailureEntry {
                field: MemberField::PostalCode,
                label: "Postal Code".to_string(),
                code: "zip_code_format".to_string(),
                message: "This zip code must contain 5 or 9 digits".to_string(),
            }]
        );
    }
}
