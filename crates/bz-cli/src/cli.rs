//! CLI argument definitions for the report tool.

use std::path::PathBuf;

use bz_dates::Notation;
use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bzreport",
    version,
    about = "Convert a glucose export into a clinic-ready report",
    long_about = "Convert a glucose export into a clinic-ready report.\n\n\
                  Reads the exporter's CSV (start, end, reading), keeps the readings\n\
                  on or after an optional start date and writes date, time and\n\
                  integer reading per row."
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Allow readings and measurement dates to appear in logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Glucose export to read (CSV without header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report file to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Earliest date to include, as YYYY-MM-DD, YYYYMMDD or DD.MM.YYYY.
    #[arg(short = 'd', long = "datum", value_name = "DATE")]
    pub datum: Option<String>,

    /// Date notation for the report (default: that of --datum, else dotted).
    #[arg(long = "notation", value_enum)]
    pub notation: Option<NotationArg>,
}

/// Report date notations selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotationArg {
    /// YYYY-MM-DD
    Iso,
    /// DD.MM.YYYY
    Dotted,
}

impl From<NotationArg> for Notation {
    fn from(value: NotationArg) -> Self {
        match value {
            NotationArg::Iso => Notation::Iso,
            NotationArg::Dotted => Notation::Dotted,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_paths_and_short_datum() {
        let cli = Cli::try_parse_from(["bzreport", "in.csv", "out.csv", "-d", "2016-01-01"]).unwrap();
        assert_eq!(cli.report.input, PathBuf::from("in.csv"));
        assert_eq!(cli.report.output, PathBuf::from("out.csv"));
        assert_eq!(cli.report.datum.as_deref(), Some("2016-01-01"));
        assert_eq!(cli.report.notation, None);
    }

    #[test]
    fn long_datum_and_notation() {
        let cli = Cli::try_parse_from([
            "bzreport",
            "in.csv",
            "out.csv",
            "--datum",
            "01.01.2016",
            "--notation",
            "iso",
        ])
        .unwrap();
        assert_eq!(cli.report.datum.as_deref(), Some("01.01.2016"));
        assert_eq!(cli.report.notation, Some(NotationArg::Iso));
    }

    #[test]
    fn datum_is_optional_and_not_validated_by_parser() {
        let cli = Cli::try_parse_from(["bzreport", "in.csv", "out.csv"]).unwrap();
        assert!(cli.report.datum.is_none());

        // Date validation happens later so it can exit with status 1.
        let cli = Cli::try_parse_from(["bzreport", "a", "b", "-d", "garbage"]).unwrap();
        assert_eq!(cli.report.datum.as_deref(), Some("garbage"));
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["bzreport", "in.csv"]).is_err());
    }
}
