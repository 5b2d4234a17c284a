use std::path::PathBuf;

use rowcheck_model::ViolationReport;

/// Outcome of one `check` run.
#[derive(Debug)]
pub struct CheckResult {
    pub data_path: PathBuf,
    pub rows: usize,
    pub rules_evaluated: usize,
    pub reports: Vec<ViolationReport>,
}

impl CheckResult {
    /// Whether any rule produced a report (violation or evaluation error).
    pub fn has_findings(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn violated_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_error()).count()
    }

    pub fn error_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_error()).count()
    }
}
