//! Integration tests for file-based report generation.

use std::fs;
use std::path::Path;

use bz_report::{ReportConfig, ReportError, generate_report};
use tempfile::TempDir;

const EXPORT: &str = "\
31-Dec-2015 23:50,31-Dec-2015 23:50,120.0
01-Jan-2016 08:15,01-Jan-2016 08:15,142.9
02-Jan-2016 07:05,02-Jan-2016 07:05,98
";

fn write_export(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("export.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn read(path: &Path) -> String {
    String::from_utf8(fs::read(path).unwrap()).unwrap()
}

#[test]
fn generates_report_file() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir, EXPORT);
    let output = dir.path().join("report.csv");
    let config = ReportConfig::from_cutoff(Some("01.01.2016"), None).unwrap();

    let summary = generate_report(&input, &output, &config).unwrap();

    assert_eq!(summary.stats.rows_written, 2);
    assert_eq!(
        read(&output),
        "Blutzuckerwerte vom 01.01.2016 bis 02.01.2016\r\n\
         Datum,Uhrzeit,Blutzuckerwert (md/dL)\r\n\
         01.01.2016,08:15,142\r\n\
         02.01.2016,07:05,98\r\n"
    );
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir, EXPORT);
    let output = dir.path().join("report.csv");
    let config = ReportConfig::from_cutoff(Some("2016-01-01"), None).unwrap();

    generate_report(&input, &output, &config).unwrap();
    let first = fs::read(&output).unwrap();
    generate_report(&input, &output, &config).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unknown_month_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_export(
        &dir,
        "01-Jan-2016 08:15,01-Jan-2016 08:15,142.9\n01-Xyz-2016 09:00,01-Xyz-2016 09:00,99\n",
    );
    let output = dir.path().join("report.csv");

    let err = generate_report(&input, &output, &ReportConfig::default()).unwrap_err();

    assert!(matches!(err, ReportError::UnknownMonthAbbreviation { .. }));
    assert!(!output.exists());
}

#[test]
fn no_rows_after_cutoff_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir, EXPORT);
    let output = dir.path().join("report.csv");
    let config = ReportConfig::from_cutoff(Some("2017-01-01"), None).unwrap();

    let err = generate_report(&input, &output, &config).unwrap_err();

    assert_eq!(err.to_string(), "no records found on or after 2017-01-01");
    assert!(!output.exists());
}

#[test]
fn no_usable_rows_without_start_date_writes_empty_report() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir, "not-a-date,x,abc\n");
    let output = dir.path().join("report.csv");

    let summary = generate_report(&input, &output, &ReportConfig::default()).unwrap();

    assert_eq!(summary.stats.rows_written, 0);
    assert_eq!(summary.stats.skipped_malformed, 1);
    assert_eq!(summary.range, None);
    assert_eq!(read(&output), "");
}

#[test]
fn missing_input_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("report.csv");

    let err = generate_report(&input, &output, &ReportConfig::default()).unwrap_err();

    assert!(matches!(err, ReportError::InputRead { ref path, .. } if path == &input));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir, EXPORT);
    let output = dir.path().join("no-such-dir").join("report.csv");

    let err = generate_report(&input, &output, &ReportConfig::default()).unwrap_err();

    assert!(matches!(err, ReportError::OutputWrite { .. }));
}
