//! Report pipeline: read vendor rows, filter, write the report.
//!
//! [`run_report`] works on any reader/writer pair. [`generate_report`] adds
//! the file handling used by the command line:
//!
//! - the input is processed completely before the output file is created, so
//!   a fatal row error never leaves an output file behind
//! - with a start date, a run that accepts no rows fails instead of writing
//!   an empty report; without one the report is simply empty
//! - if writing the output file fails midway, the partial file is removed

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bz_dates::{CalendarDate, Notation};
use tracing::{debug, info, info_span, warn};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::filter::{DateRange, RecordFilter, ReportStats, RowOutcome};
use crate::vendor::vendor_reader;
use crate::writer::ReportWriter;

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub stats: ReportStats,
    /// Earliest and latest dates in the report; `None` if nothing was written.
    pub range: Option<DateRange>,
    pub cutoff: Option<CalendarDate>,
    pub notation: Notation,
}

/// Streams vendor rows from `input` and writes the report to `output`.
///
/// Malformed rows are skipped. Returns the summary together with the sink.
///
/// # Errors
///
/// Fails on unreadable input, an unknown month abbreviation, or a write error.
pub fn run_report<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ReportConfig,
) -> Result<(ReportSummary, W)> {
    let mut reader = vendor_reader(input);
    let mut filter = RecordFilter::new(*config);
    let mut writer = ReportWriter::new(output, config.notation);
    let mut record = csv::StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if is_recoverable(&err) => {
                let line = err.position().map_or(0, csv::Position::line);
                debug!(line, error = %err, "skipping unreadable row");
                // Feed an empty record so the row is counted as malformed.
                record.clear();
                filter.process(&record, line)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        let line = record.position().map_or(0, csv::Position::line);
        if let RowOutcome::Accepted { record: row, first } = filter.process(&record, line)? {
            if first {
                debug!(line, "writing report header");
            }
            writer.write_record(&row)?;
        }
    }

    let summary = filter.finish();
    let sink = writer.finish(summary.range.as_ref())?;
    Ok((
        ReportSummary {
            stats: summary.stats,
            range: summary.range,
            cutoff: config.cutoff,
            notation: config.notation,
        },
        sink,
    ))
}

/// Per-row decoding problems that only affect the row they occur in.
fn is_recoverable(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}

/// Builds a report file from a vendor export file.
///
/// # Errors
///
/// Everything [`run_report`] can fail with, plus
/// [`ReportError::NoRecordsSince`] when a start date is set and no row is
/// accepted, and read/write errors for the two files.
pub fn generate_report(input: &Path, output: &Path, config: &ReportConfig) -> Result<ReportSummary> {
    let span = info_span!(
        "report",
        input = %input.display(),
        output = %output.display(),
        notation = %config.notation
    );
    let _guard = span.enter();

    let file = File::open(input).map_err(|source| ReportError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;
    let (summary, report) = run_report(BufReader::new(file), Vec::new(), config)?;
    info!(
        rows_read = summary.stats.rows_read,
        rows_written = summary.stats.rows_written,
        skipped_malformed = summary.stats.skipped_malformed,
        skipped_before_cutoff = summary.stats.skipped_before_cutoff,
        "input processed"
    );

    if summary.stats.rows_written == 0
        && let Some(cutoff) = config.cutoff
    {
        return Err(ReportError::NoRecordsSince {
            cutoff: cutoff.format(config.notation),
        });
    }

    write_output(output, &report)?;
    info!(bytes = report.len(), "report written");
    Ok(summary)
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(contents)?;
        file.flush()?;
        file.get_ref().sync_all()
    };
    write().map_err(|source| {
        if path.exists()
            && let Err(err) = fs::remove_file(path)
        {
            warn!(path = %path.display(), error = %err, "could not remove partial report");
        }
        ReportError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
