//! Reference data error types.

use std::path::PathBuf;
use thiserror::Error;

/// Error loading the province table.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// File could not be opened.
    #[error("Failed to read province table: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Same province code listed twice.
    #[error("Duplicate province code {code} on line {line}")]
    DuplicateCode { code: String, line: u64 },

    /// Row without a country code.
    #[error("Province {code} has no country code")]
    MissingCountry { code: String },
}

/// Result type alias for reference data operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;
