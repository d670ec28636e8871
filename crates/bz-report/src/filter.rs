//! Row-by-row filtering and re-encoding.
//!
//! [`RecordFilter`] decides for each vendor row whether it belongs in the
//! report and, if so, turns it into a [`ReportRecord`]:
//!
//! 1. Rows that do not match the vendor grammar are dropped.
//! 2. The vendor date is converted to the report notation.
//! 3. With a start date configured, rows dated earlier are dropped.
//! 4. Accepted rows get their reading truncated to an integer.
//!
//! The filter starts in [`FilterState::NotInitialized`] and moves to
//! [`FilterState::Streaming`] on the first accepted row. It never moves back;
//! [`RecordFilter::finish`] consumes it.
//!
//! The filter only tracks whether a header is due. The summary line and the
//! CSV header are written by [`crate::ReportWriter::finish`], since the
//! summary names the last accepted date.

use bz_dates::{CalendarDate, DateError, Notation, classify, decompose, from_vendor};
use csv::StringRecord;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::vendor::VendorRow;

/// One line of the clinic report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Uhrzeit")]
    pub time: String,
    #[serde(rename = "Blutzuckerwert (md/dL)")]
    pub reading: u32,
}

/// Where the filter is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterState {
    /// No row accepted yet; the report will have no header.
    #[default]
    NotInitialized,
    /// At least one row accepted; the report gets a header.
    Streaming,
}

/// What happened to a single input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row belongs in the report. `first` is set for the row that moved
    /// the filter out of [`FilterState::NotInitialized`], i.e. the row the
    /// header will precede.
    Accepted { record: ReportRecord, first: bool },
    /// The row is dated before the start date.
    BeforeCutoff,
    /// The row does not match the vendor grammar or names an impossible day.
    Malformed,
}

/// Row counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub rows_read: usize,
    pub rows_written: usize,
    pub skipped_malformed: usize,
    pub skipped_before_cutoff: usize,
}

/// Earliest and latest accepted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: CalendarDate,
    pub to: CalendarDate,
}

impl DateRange {
    fn single(date: CalendarDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    fn include(&mut self, date: CalendarDate) {
        self.from = self.from.min(date);
        self.to = self.to.max(date);
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> Option<i64> {
        let from = self.from.to_naive_date()?;
        let to = self.to.to_naive_date()?;
        Some((to - from).num_days() + 1)
    }
}

/// Final state of a filter after the input is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub stats: ReportStats,
    pub range: Option<DateRange>,
}

/// Streaming filter over vendor rows.
#[derive(Debug)]
pub struct RecordFilter {
    config: ReportConfig,
    state: FilterState,
    stats: ReportStats,
    range: Option<DateRange>,
}

impl RecordFilter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            state: FilterState::default(),
            stats: ReportStats::default(),
            range: None,
        }
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn stats(&self) -> ReportStats {
        self.stats
    }

    /// Processes one raw record. `line` is only used for diagnostics.
    ///
    /// # Errors
    ///
    /// [`ReportError::UnknownMonthAbbreviation`] when a well-formed row names
    /// a month outside the table. The run cannot continue without silently
    /// losing data, so this is fatal.
    pub fn process(&mut self, record: &StringRecord, line: u64) -> Result<RowOutcome> {
        self.stats.rows_read += 1;

        let Some(row) = VendorRow::parse(record) else {
            debug!(line, "skipping row that does not match the vendor format");
            return Ok(self.malformed());
        };

        let date_text = from_vendor(row.date, self.config.notation).map_err(|err| match err {
            DateError::UnknownMonthAbbreviation { token } => {
                ReportError::UnknownMonthAbbreviation { line, token }
            }
            source => ReportError::Conversion { line, source },
        })?;

        let Some(date) = to_calendar_date(&date_text) else {
            debug!(line, "skipping row with an impossible or out-of-range date");
            return Ok(self.malformed());
        };

        if !self.config.accepts(&date) {
            trace!(line, "row is dated before the start date");
            self.stats.skipped_before_cutoff += 1;
            return Ok(RowOutcome::BeforeCutoff);
        }

        let Some(reading) = row.reading_value() else {
            debug!(line, "skipping row with a reading that does not fit");
            return Ok(self.malformed());
        };

        let first = self.state == FilterState::NotInitialized;
        if first {
            debug!(line, "first row in range");
            self.state = FilterState::Streaming;
        }
        match self.range.as_mut() {
            Some(range) => range.include(date),
            None => self.range = Some(DateRange::single(date)),
        }
        self.stats.rows_written += 1;

        Ok(RowOutcome::Accepted {
            record: ReportRecord {
                date: date_text,
                time: row.time.to_string(),
                reading,
            },
            first,
        })
    }

    /// Ends the run and returns the counts and covered range.
    pub fn finish(self) -> FilterSummary {
        FilterSummary {
            stats: self.stats,
            range: self.range,
        }
    }

    fn malformed(&mut self) -> RowOutcome {
        self.stats.skipped_malformed += 1;
        RowOutcome::Malformed
    }
}

/// Reads a converted date back as a validated calendar date.
fn to_calendar_date(value: &str) -> Option<CalendarDate> {
    let notation = classify(value);
    if notation == Notation::Unknown {
        return None;
    }
    let parts = decompose(value, notation).ok()?;
    CalendarDate::try_from(parts).ok()
}
