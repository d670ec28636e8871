use std::time::Instant;

use anyhow::Result;
use bz_cli::logging::redact_value;
use bz_dates::Notation;
use bz_report::{ReportConfig, generate_report};
use tracing::{debug, info, info_span};

use crate::cli::ReportArgs;
use crate::types::RunResult;

pub fn run_convert(args: &ReportArgs) -> Result<RunResult> {
    debug!(
        input = %args.input.display(),
        output = %args.output.display(),
        datum = args.datum.as_deref().map(redact_value),
        notation = ?args.notation,
        "invocation"
    );

    // The start date is checked before either data file is opened.
    let config =
        ReportConfig::from_cutoff(args.datum.as_deref(), args.notation.map(Notation::from))?;

    let span = info_span!("convert", notation = %config.notation);
    let _guard = span.enter();
    let started = Instant::now();
    let summary = generate_report(&args.input, &args.output, &config)?;

    if let Some(range) = &summary.range {
        info!(
            from = redact_value(&range.from.format(config.notation)),
            to = redact_value(&range.to.format(config.notation)),
            "report period"
        );
    }
    info!(
        rows_written = summary.stats.rows_written,
        duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "conversion complete"
    );

    Ok(RunResult {
        input: args.input.clone(),
        output: args.output.clone(),
        summary,
    })
}
