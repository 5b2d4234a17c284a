use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Maximum number of offending row positions echoed in a report.
pub const MAX_SAMPLE_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Rows failed the rule's condition.
    Violation,
    /// The condition could not be evaluated for this table.
    Error,
}

impl ReportKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Violation => "Violation",
            Self::Error => "Error",
        }
    }
}

/// Finding for a single rule after a validation run.
///
/// Rules that pass produce no report at all; a report always carries either
/// at least one violation or an evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    /// Name of the rule that produced the finding.
    pub rule: String,
    /// Configured error message, or a description of the evaluation failure.
    pub message: String,
    /// Whether rows violated the condition or the condition failed to run.
    pub kind: ReportKind,
    /// Number of offending rows. Zero for `Error` reports.
    pub violations: u64,
    /// First offending row positions, ascending, capped at [`MAX_SAMPLE_ROWS`].
    pub sample_rows: Vec<usize>,
}

impl ViolationReport {
    pub fn violation(
        rule: impl Into<String>,
        message: impl Into<String>,
        violations: u64,
        sample_rows: Vec<usize>,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            kind: ReportKind::Violation,
            violations,
            sample_rows,
        }
    }

    /// Synthetic report for a rule whose condition failed to evaluate.
    pub fn evaluation_error(rule: impl Into<String>, error: &CheckError) -> Self {
        Self {
            rule: rule.into(),
            message: format!("rule evaluation failed: {error}"),
            kind: ReportKind::Error,
            violations: 0,
            sample_rows: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ReportKind::Error
    }
}
