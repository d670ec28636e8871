//! Error types for date notation handling.

use thiserror::Error;

use crate::notation::Notation;

/// Errors that can occur when recognizing, validating or converting dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The value does not follow the grammar of the requested notation.
    #[error("'{value}' is not a recognized date (expected YYYY-MM-DD, YYYYMMDD or DD.MM.YYYY)")]
    InvalidNotation { value: String },

    /// The value is well formed but names a day that does not exist.
    #[error("'{value}' is not a valid calendar date")]
    InvalidCalendarDate { value: String },

    /// The year cannot be written in the caller-facing notations.
    #[error("year {year} is outside 2000-2099")]
    YearOutOfRange { year: i32 },

    /// A vendor date uses a month token outside the fixed table.
    #[error("unknown month abbreviation '{token}'")]
    UnknownMonthAbbreviation { token: String },

    /// The value is not shaped like `DD-Mmm-YYYY`.
    #[error("'{value}' is not a vendor date (expected DD-Mmm-YYYY)")]
    MalformedVendorDate { value: String },

    /// Conversion was asked to produce a notation it cannot render.
    #[error("cannot convert a vendor date to {notation} notation")]
    UnsupportedTarget { notation: Notation },
}

/// Result type for date operations.
pub type Result<T> = std::result::Result<T, DateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DateError::UnknownMonthAbbreviation {
            token: "Foo".to_string(),
        };
        assert_eq!(err.to_string(), "unknown month abbreviation 'Foo'");

        let err = DateError::UnsupportedTarget {
            notation: Notation::Unknown,
        };
        assert_eq!(
            err.to_string(),
            "cannot convert a vendor date to unknown notation"
        );
    }
}
