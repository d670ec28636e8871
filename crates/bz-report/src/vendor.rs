//! The exporter's row grammar.
//!
//! Each row carries three fields with no header line:
//!
//! ```text
//! DD-Mmm-YYYY HH:MM, DD-Mmm-YYYY HH:MM, FLOAT
//! ```
//!
//! The first timestamp is the measurement time, the second is its end and is
//! only checked for shape. Rows that do not fit are dropped by the filter.

use std::io::Read;

use bz_dates::is_vendor_date;
use csv::{ReaderBuilder, StringRecord, Trim};

/// A row that matched the vendor grammar, borrowed from its CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorRow<'a> {
    /// Date part of the start timestamp (`DD-Mmm-YYYY`).
    pub date: &'a str,
    /// Time part of the start timestamp (`HH:MM`).
    pub time: &'a str,
    /// Reading as exported (`123` or `123.4`).
    pub reading: &'a str,
}

impl<'a> VendorRow<'a> {
    /// Matches a record against the vendor grammar.
    ///
    /// Returns `None` for anything else: wrong field count, timestamps of the
    /// wrong shape, or a reading that is not a plain decimal.
    pub fn parse(record: &'a StringRecord) -> Option<Self> {
        if record.len() != 3 {
            return None;
        }
        let (date, time) = split_timestamp(record.get(0)?)?;
        split_timestamp(record.get(1)?)?;
        let reading = record.get(2)?;
        is_decimal(reading).then_some(Self {
            date,
            time,
            reading,
        })
    }

    /// The reading with its fractional part discarded.
    pub fn reading_value(&self) -> Option<u32> {
        truncate_reading(self.reading)
    }
}

/// Splits `DD-Mmm-YYYY HH:MM` on its first space.
pub fn split_timestamp(value: &str) -> Option<(&str, &str)> {
    let (date, time) = value.split_once(' ')?;
    (is_vendor_date(date) && is_clock_time(time)).then_some((date, time))
}

/// `HH:MM` between 00:00 and 23:59.
fn is_clock_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    let bounded = |part: &str, max: u32| {
        part.len() == 2
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u32>().is_ok_and(|n| n <= max)
    };
    bounded(hours, 23) && bounded(minutes, 59)
}

fn is_decimal(value: &str) -> bool {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, "0"));
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && digits(fraction)
}

/// Truncates a decimal reading to its integer part.
///
/// `"142.9"` becomes `142`; there is no rounding.
pub fn truncate_reading(value: &str) -> Option<u32> {
    if !is_decimal(value) {
        return None;
    }
    let whole = value.split_once('.').map_or(value, |(whole, _)| whole);
    whole.parse().ok()
}

/// Builds a CSV reader configured for vendor exports.
///
/// Records may have any length so that short or long rows reach the filter
/// and are dropped there instead of aborting the read.
pub fn vendor_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input)
}
