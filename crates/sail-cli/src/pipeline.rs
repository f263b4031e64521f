//! Reading, validating and writing batches of member records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use sail_model::MemberRecord;
use sail_validate::{MemberValidator, ProvinceLookup, ValidationReport};
use serde::Deserialize;
use tracing::{debug, info, info_span, warn};

use crate::logging::redact_value;

/// Input file shape: one record or a list of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum MemberInput {
    Many(Vec<MemberRecord>),
    One(Box<MemberRecord>),
}

/// Outcome of validating a batch.
#[derive(Debug, Clone, Default)]
pub struct ValidationRun {
    /// Records after normalization, in input order.
    pub records: Vec<MemberRecord>,
    /// One report per record, in input order.
    pub reports: Vec<ValidationReport>,
}

impl ValidationRun {
    pub fn accepted_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.reports.len() - self.accepted_count()
    }

    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(ValidationReport::failure_count).sum()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected_count() > 0
    }
}

/// Parse member records from JSON text.
pub fn parse_members(json: &str) -> Result<Vec<MemberRecord>> {
    let input: MemberInput =
        serde_json::from_str(json).context("member input is not a record or list of records")?;
    Ok(match input {
        MemberInput::Many(records) => records,
        MemberInput::One(record) => vec![*record],
    })
}

/// Read member records from a JSON file.
pub fn read_members(path: &Path) -> Result<Vec<MemberRecord>> {
    let json = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let records =
        parse_members(&json).with_context(|| format!("parse members from {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "Loaded member records");
    Ok(records)
}

/// Write normalized member records as pretty-printed JSON.
pub fn write_members(path: &Path, records: &[MemberRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .with_context(|| format!("write members to {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "Wrote member records");
    Ok(())
}

/// Validate each record as a form submission.
pub fn validate_records<L: ProvinceLookup>(
    validator: &MemberValidator<L>,
    records: Vec<MemberRecord>,
) -> ValidationRun {
    let span = info_span!("validate_records", records = records.len());
    let _guard = span.enter();

    let mut run = ValidationRun {
        records: Vec::with_capacity(records.len()),
        reports: Vec::with_capacity(records.len()),
    };

    for mut record in records {
        let report = validator.report(&mut record);
        if report.is_accepted() {
            debug!(
                member_id = record.member_id,
                member = redact_value(&report.display_name),
                "Member accepted"
            );
        } else {
            warn!(
                member_id = record.member_id,
                member = redact_value(&report.display_name),
                failures = report.failure_count(),
                "Member rejected"
            );
        }
        run.records.push(record);
        run.reports.push(report);
    }

    info!(
        accepted = run.accepted_count(),
        rejected = run.rejected_count(),
        "Validation finished"
    );
    run
}
