//! Lexical recognition of the caller-facing date notations.
//!
//! Only the shape of a value is checked here: `2024-02-30` classifies as
//! [`Notation::Iso`] although February never has 30 days. Calendar validity
//! is decided by [`crate::calendar`].
//!
//! | Notation | Shape                      | Example      |
//! |----------|----------------------------|--------------|
//! | Iso      | `YYYY-MM-DD` or `YYYYMMDD` | `2016-01-01` |
//! | Dotted   | `DD.MM.YYYY`               | `01.01.2016` |
//! | Vendor   | `DD-Mmm-YYYY`              | `01-Jan-2016`|
//!
//! Iso and Dotted years are restricted to `20xx`.

use std::fmt;

/// Identifies which textual grammar a date string satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `YYYY-MM-DD`, or the same groups without separators.
    Iso,
    /// `DD.MM.YYYY`.
    Dotted,
    /// The exporter's `DD-Mmm-YYYY` with an English month abbreviation.
    Vendor,
    /// Matches none of the known grammars.
    Unknown,
}

impl Notation {
    /// Short lowercase name used in messages and CLI values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iso => "iso",
            Self::Dotted => "dotted",
            Self::Vendor => "vendor",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a caller-supplied date string.
///
/// Returns [`Notation::Iso`], [`Notation::Dotted`] or [`Notation::Unknown`].
/// The two grammars use disjoint separators so no value matches both; Iso is
/// tested first and would win if they ever overlapped.
pub fn classify(value: &str) -> Notation {
    if iso_groups(value).is_some() {
        Notation::Iso
    } else if dotted_groups(value).is_some() {
        Notation::Dotted
    } else {
        Notation::Unknown
    }
}

/// Digit groups of a date, always ordered year, month, day.
pub(crate) struct Groups<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

/// Splits an Iso value into its groups if it has the Iso shape.
pub(crate) fn iso_groups(value: &str) -> Option<Groups<'_>> {
    if !value.is_ascii() {
        return None;
    }
    let bytes = value.as_bytes();
    let groups = match bytes.len() {
        10 if bytes[4] == b'-' && bytes[7] == b'-' => Groups {
            year: &value[0..4],
            month: &value[5..7],
            day: &value[8..10],
        },
        8 => Groups {
            year: &value[0..4],
            month: &value[4..6],
            day: &value[6..8],
        },
        _ => return None,
    };
    groups.is_well_formed().then_some(groups)
}

/// Splits a Dotted value into its groups if it has the Dotted shape.
pub(crate) fn dotted_groups(value: &str) -> Option<Groups<'_>> {
    if !value.is_ascii() {
        return None;
    }
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let groups = Groups {
        year: &value[6..10],
        month: &value[3..5],
        day: &value[0..2],
    };
    groups.is_well_formed().then_some(groups)
}

impl Groups<'_> {
    fn is_well_formed(&self) -> bool {
        is_century_year(self.year)
            && is_ranged_pair(self.month, 12)
            && is_ranged_pair(self.day, 31)
    }
}

pub(crate) fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_century_year(value: &str) -> bool {
    value.len() == 4 && value.starts_with("20") && is_digits(value)
}

/// Two digits spelling a number in `01..=max`.
fn is_ranged_pair(value: &str, max: u32) -> bool {
    if value.len() != 2 || !is_digits(value) {
        return false;
    }
    value.parse::<u32>().is_ok_and(|n| (1..=max).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_iso_with_and_without_separators() {
        assert_eq!(classify("2016-01-01"), Notation::Iso);
        assert_eq!(classify("20160101"), Notation::Iso);
        assert_eq!(classify("2099-12-31"), Notation::Iso);
    }

    #[test]
    fn classify_dotted() {
        assert_eq!(classify("01.01.2016"), Notation::Dotted);
        assert_eq!(classify("31.12.2099"), Notation::Dotted);
    }

    #[test]
    fn classify_shape_only() {
        // Lexically fine, calendar-invalid
        assert_eq!(classify("2024-02-30"), Notation::Iso);
        assert_eq!(classify("31.04.2024"), Notation::Dotted);
    }

    #[test]
    fn classify_rejects_other_centuries() {
        assert_eq!(classify("1999-12-31"), Notation::Unknown);
        assert_eq!(classify("31.12.1999"), Notation::Unknown);
        assert_eq!(classify("2100-01-01"), Notation::Unknown);
        assert_eq!(classify("3016-01-01"), Notation::Unknown);
    }

    #[test]
    fn classify_rejects_mixed_or_odd_separators() {
        assert_eq!(classify("2016-0101"), Notation::Unknown);
        assert_eq!(classify("201601-01"), Notation::Unknown);
        assert_eq!(classify("2016/01/01"), Notation::Unknown);
        assert_eq!(classify("2016.01.01"), Notation::Unknown);
        assert_eq!(classify("01-01-2016"), Notation::Unknown);
    }

    #[test]
    fn classify_rejects_out_of_range_groups() {
        assert_eq!(classify("2016-13-01"), Notation::Unknown);
        assert_eq!(classify("2016-00-01"), Notation::Unknown);
        assert_eq!(classify("2016-01-32"), Notation::Unknown);
        assert_eq!(classify("00.01.2016"), Notation::Unknown);
    }

    #[test]
    fn classify_rejects_short_groups_and_noise() {
        assert_eq!(classify(""), Notation::Unknown);
        assert_eq!(classify("1.1.2016"), Notation::Unknown);
        assert_eq!(classify("01.01.16"), Notation::Unknown);
        assert_eq!(classify(" 2016-01-01"), Notation::Unknown);
        assert_eq!(classify("01-Jan-2016"), Notation::Unknown);
        assert_eq!(classify("2016-01-0ä"), Notation::Unknown);
    }
}
