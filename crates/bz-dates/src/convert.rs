//! Conversion between the caller-facing notations and the vendor notation.

use crate::calendar::CalendarDate;
use crate::error::{DateError, Result};
use crate::notation::{Notation, is_digits};

/// Month abbreviations used by the exporter, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the abbreviation for a month number (1-12).
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_ABBREVIATIONS.get(index).copied()
}

/// Looks up a month number by its abbreviation. Matching is case-sensitive.
pub fn month_from_abbreviation(token: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == token)
        .and_then(|index| u32::try_from(index + 1).ok())
}

/// Splits `DD-Mmm-YYYY` into its day, month token and year.
///
/// The month token only has to be three ASCII letters; whether it is a known
/// month (case included) is checked later so that unknown months can be told
/// apart from noise.
pub(crate) fn vendor_groups(value: &str) -> Option<(&str, &str, &str)> {
    if !value.is_ascii() {
        return None;
    }
    let bytes = value.as_bytes();
    if bytes.len() != 11 || bytes[2] != b'-' || bytes[6] != b'-' {
        return None;
    }
    let (day, token, year) = (&value[0..2], &value[3..6], &value[7..11]);
    let token_shaped = token.bytes().all(|b| b.is_ascii_alphabetic());
    (is_digits(day) && token_shaped && is_digits(year)).then_some((day, token, year))
}

/// Returns true if `value` has the vendor date shape.
pub fn is_vendor_date(value: &str) -> bool {
    vendor_groups(value).is_some()
}

/// Formats a date as `DD-Mmm-YYYY`.
pub fn to_vendor(date: &CalendarDate) -> String {
    date.format(Notation::Vendor)
}

/// Re-emits a vendor date in the target notation.
///
/// Iso targets are written with hyphens (`YYYY-MM-DD`). The day and year
/// digits are carried over as-is; no calendar validation happens here.
///
/// # Errors
///
/// - [`DateError::MalformedVendorDate`] if `value` is not shaped `DD-Mmm-YYYY`
/// - [`DateError::UnknownMonthAbbreviation`] if the month token is not in
///   [`MONTH_ABBREVIATIONS`]
/// - [`DateError::UnsupportedTarget`] for an `Unknown` target
pub fn from_vendor(value: &str, target: Notation) -> Result<String> {
    let (day, token, year) = vendor_groups(value).ok_or_else(|| DateError::MalformedVendorDate {
        value: value.to_string(),
    })?;
    let month = month_from_abbreviation(token).ok_or_else(|| {
        DateError::UnknownMonthAbbreviation {
            token: token.to_string(),
        }
    })?;
    match target {
        Notation::Iso => Ok(format!("{year}-{month:02}-{day}")),
        Notation::Dotted => Ok(format!("{day}.{month:02}.{year}")),
        Notation::Vendor => Ok(value.to_string()),
        Notation::Unknown => Err(DateError::UnsupportedTarget { notation: target }),
    }
}
