//! Clinic report generation from glucose exports.
//!
//! Reads the exporter's three-column CSV (start timestamp, end timestamp,
//! reading), keeps the rows on or after an optional start date, and writes
//! a report with locale dates, times and integer readings.
//!
//! # Example
//!
//! ```
//! use bz_report::{ReportConfig, run_report};
//!
//! let input = "31-Dec-2015 23:50,31-Dec-2015 23:50,120.0\n\
//!              01-Jan-2016 08:15,01-Jan-2016 08:15,142.9\n";
//! let config = ReportConfig::from_cutoff(Some("01.01.2016"), None)?;
//! let (summary, output) = run_report(input.as_bytes(), Vec::new(), &config)?;
//!
//! assert_eq!(summary.stats.rows_written, 1);
//! assert!(String::from_utf8(output).unwrap().ends_with("01.01.2016,08:15,142\r\n"));
//! # Ok::<(), bz_report::ReportError>(())
//! ```

mod config;
mod error;
mod filter;
mod pipeline;
mod vendor;
mod writer;

// === Configuration ===
pub use config::ReportConfig;

// === Error Types ===
pub use error::{ReportError, Result};

// === Filtering ===
pub use filter::{
    DateRange, FilterState, FilterSummary, RecordFilter, ReportRecord, ReportStats, RowOutcome,
};

// === Vendor Rows ===
pub use vendor::{VendorRow, split_timestamp, truncate_reading, vendor_reader};

// === Output ===
pub use writer::{LINE_ENDING, ReportWriter, summary_line};

// === Pipeline ===
pub use pipeline::{ReportSummary, generate_report, run_report};
