//! Calendar validation and the validated [`CalendarDate`] type.
//!
//! Validity uses the fixed month table with February raised to 29 days in
//! Gregorian leap years.

use std::fmt;

use chrono::NaiveDate;

use crate::convert::{month_abbreviation, month_from_abbreviation, vendor_groups};
use crate::error::{DateError, Result};
use crate::notation::{Groups, Notation, classify, dotted_groups, iso_groups};

/// Earliest year either caller-facing notation can express.
pub const MIN_YEAR: i32 = 2000;
/// Latest year either caller-facing notation can express.
pub const MAX_YEAR: i32 = 2099;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1-12.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    let days = *DAYS_IN_MONTH.get(index)?;
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(days)
    }
}

/// Checks whether year/month/day names a day that exists.
///
/// Month 0 is never valid.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    days_in_month(month, year).is_some_and(|max| (1..=max).contains(&day))
}

/// A date split into its numeric components, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn is_valid(&self) -> bool {
        is_valid_date(self.year, self.month, self.day)
    }
}

/// Splits `value` into its components according to the grammar of `notation`.
///
/// # Errors
///
/// [`DateError::InvalidNotation`] when `notation` is `Unknown` or `value`
/// does not have the shape of `notation`. Vendor values with a month token
/// outside the table fail with [`DateError::UnknownMonthAbbreviation`].
pub fn decompose(value: &str, notation: Notation) -> Result<DateParts> {
    let invalid = || DateError::InvalidNotation {
        value: value.to_string(),
    };
    match notation {
        Notation::Iso => iso_groups(value).ok_or_else(invalid)?.to_parts(value),
        Notation::Dotted => dotted_groups(value).ok_or_else(invalid)?.to_parts(value),
        Notation::Vendor => {
            let (day, token, year) =
                vendor_groups(value).ok_or_else(|| DateError::MalformedVendorDate {
                    value: value.to_string(),
                })?;
            let month =
                month_from_abbreviation(token).ok_or_else(|| DateError::UnknownMonthAbbreviation {
                    token: token.to_string(),
                })?;
            Ok(DateParts {
                year: parse_number(year, value)?,
                month,
                day: parse_number(day, value)?,
            })
        }
        Notation::Unknown => Err(invalid()),
    }
}

impl Groups<'_> {
    fn to_parts(&self, original: &str) -> Result<DateParts> {
        Ok(DateParts {
            year: parse_number(self.year, original)?,
            month: parse_number(self.month, original)?,
            day: parse_number(self.day, original)?,
        })
    }
}

fn parse_number<T: std::str::FromStr>(digits: &str, original: &str) -> Result<T> {
    digits.parse().map_err(|_| DateError::InvalidNotation {
        value: original.to_string(),
    })
}

/// A validated calendar date between [`MIN_YEAR`] and [`MAX_YEAR`].
///
/// Ordering compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Builds a date, rejecting days that do not exist and years outside
    /// the supported century.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange { year });
        }
        if !is_valid_date(year, month, day) {
            return Err(DateError::InvalidCalendarDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Renders the date in the given notation.
    ///
    /// `Unknown` falls back to the Iso rendering.
    pub fn format(&self, notation: Notation) -> String {
        match notation {
            Notation::Dotted => format!("{:02}.{:02}.{:04}", self.day, self.month, self.year),
            Notation::Vendor => format!(
                "{:02}-{}-{:04}",
                self.day,
                month_abbreviation(self.month).unwrap_or("???"),
                self.year
            ),
            Notation::Iso | Notation::Unknown => {
                format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
            }
        }
    }

    /// Converts to a chrono date for day arithmetic.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Notation::Iso))
    }
}

/// Parses a caller-supplied Iso or Dotted date into a validated date.
///
/// Returns the notation the value was written in alongside the date.
pub fn parse_date(value: &str) -> Result<(CalendarDate, Notation)> {
    let notation = classify(value);
    let parts = decompose(value, notation)?;
    if !parts.is_valid() {
        return Err(DateError::InvalidCalendarDate {
            value: value.to_string(),
        });
    }
    Ok((CalendarDate::try_from(parts)?, notation))
}
