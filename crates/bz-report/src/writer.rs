//! Report output.
//!
//! A report is a free-text summary line naming the covered dates, the CSV
//! header row, then one row per accepted reading. Every line ends in CRLF.
//!
//! ```text
//! Blutzuckerwerte vom 01.01.2016 bis 02.01.2016
//! Datum,Uhrzeit,Blutzuckerwert (md/dL)
//! 01.01.2016,08:15,142
//! ```
//!
//! The summary line needs the last accepted date, so data rows are collected
//! in memory and only reach the sink in [`ReportWriter::finish`].

use std::io::Write;

use bz_dates::Notation;
use csv::{Terminator, WriterBuilder};

use crate::error::{ReportError, Result};
use crate::filter::{DateRange, ReportRecord};

/// Line terminator used throughout the report.
pub const LINE_ENDING: &str = "\r\n";

/// Renders the summary line for a date range, without terminator.
pub fn summary_line(range: &DateRange, notation: Notation) -> String {
    format!(
        "Blutzuckerwerte vom {} bis {}",
        range.from.format(notation),
        range.to.format(notation)
    )
}

/// Collects report rows and writes the finished report to a sink.
pub struct ReportWriter<W: Write> {
    sink: W,
    notation: Notation,
    body: csv::Writer<Vec<u8>>,
    rows: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, notation: Notation) -> Self {
        let body = WriterBuilder::new()
            .has_headers(true)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());
        Self {
            sink,
            notation,
            body,
            rows: 0,
        }
    }

    /// Appends one row. The header row is produced together with the first.
    pub fn write_record(&mut self, record: &ReportRecord) -> Result<()> {
        self.body.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Writes summary line, header and rows to the sink and returns it.
    ///
    /// Without a range (no accepted rows) nothing is written.
    pub fn finish(mut self, range: Option<&DateRange>) -> Result<W> {
        let body = self
            .body
            .into_inner()
            .map_err(|err| ReportError::Io(err.into_error()))?;
        if let Some(range) = range
            && self.rows > 0
        {
            self.sink
                .write_all(summary_line(range, self.notation).as_bytes())?;
            self.sink.write_all(LINE_ENDING.as_bytes())?;
            self.sink.write_all(&body)?;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}
