//! Error types for the data-loader crate.
//!
//! Every failure while turning a CSV source into a `Catalog` ends up as a
//! `DataLoadError`. Matching and recommending never fail, so nothing outside
//! loading needs these.

use thiserror::Error;

/// Errors that can occur while loading and parsing the destination catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Row in the catalog couldn't be parsed
    ///
    /// Carries the source name and the 1-based line so the user can fix the file
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl DataLoadError {
    /// Create an InvalidValue error
    pub fn invalid_value(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
