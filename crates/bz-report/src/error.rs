//! Error types for report generation.

use std::path::PathBuf;

use bz_dates::{DateError, Notation};
use thiserror::Error;

/// Errors that can occur while building a report.
#[derive(Debug, Error)]
pub enum ReportError {
    // === Configuration Errors ===
    /// The start date matches neither notation or names a day that does not exist.
    #[error("invalid start date '{value}': {source}")]
    InvalidCutoffDate {
        value: String,
        #[source]
        source: DateError,
    },

    /// Reports can only be written in the Iso or Dotted notation.
    #[error("reports cannot be written in {notation} notation")]
    UnsupportedNotation { notation: Notation },

    // === Row Errors ===
    /// A vendor date used a month token outside the fixed table.
    #[error("line {line}: unknown month abbreviation '{token}'")]
    UnknownMonthAbbreviation { line: u64, token: String },

    /// Converting a row's date failed for a reason other than its month.
    #[error("line {line}: {source}")]
    Conversion {
        line: u64,
        #[source]
        source: DateError,
    },

    // === Result Errors ===
    /// No usable row is dated on or after the start date.
    #[error("no records found on or after {cutoff}")]
    NoRecordsSince { cutoff: String },

    // === I/O Errors ===
    /// Failed to read the input file.
    #[error("failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::UnknownMonthAbbreviation {
            line: 7,
            token: "Foo".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: unknown month abbreviation 'Foo'");

        let err = ReportError::NoRecordsSince {
            cutoff: "01.01.2016".to_string(),
        };
        assert_eq!(err.to_string(), "no records found on or after 01.01.2016");
    }

    #[test]
    fn test_cutoff_error_keeps_source() {
        let err = ReportError::InvalidCutoffDate {
            value: "2023-02-29".to_string(),
            source: DateError::InvalidCalendarDate {
                value: "2023-02-29".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid start date '2023-02-29': '2023-02-29' is not a valid calendar date"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
