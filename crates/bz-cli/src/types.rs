use std::path::PathBuf;

use bz_report::ReportSummary;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: ReportSummary,
}
