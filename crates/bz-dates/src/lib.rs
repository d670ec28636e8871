//! Date notations used by glucose exports and clinic reports.
//!
//! This crate recognizes the two caller-facing notations, validates the
//! calendar dates they name, and converts between them and the exporter's
//! vendor notation.
//!
//! - **Iso**: `YYYY-MM-DD` (or `YYYYMMDD`), years 2000-2099
//! - **Dotted**: `DD.MM.YYYY`, years 2000-2099
//! - **Vendor**: `DD-Mmm-YYYY` with a fixed English month abbreviation
//!
//! # Example
//!
//! ```
//! use bz_dates::{Notation, classify, from_vendor, parse_date, to_vendor};
//!
//! assert_eq!(classify("2016-01-01"), Notation::Iso);
//!
//! let (date, notation) = parse_date("01.01.2016").unwrap();
//! assert_eq!(notation, Notation::Dotted);
//! assert_eq!(to_vendor(&date), "01-Jan-2016");
//! assert_eq!(from_vendor("01-Jan-2016", Notation::Dotted).unwrap(), "01.01.2016");
//! ```

mod calendar;
mod convert;
mod error;
mod notation;

pub use calendar::{
    CalendarDate, DateParts, MAX_YEAR, MIN_YEAR, days_in_month, decompose, is_leap_year,
    is_valid_date, parse_date,
};
pub use convert::{
    MONTH_ABBREVIATIONS, from_vendor, is_vendor_date, month_abbreviation,
    month_from_abbreviation, to_vendor,
};
pub use error::{DateError, Result};
pub use notation::{Notation, classify};
