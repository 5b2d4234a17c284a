use std::fmt;

use polars::prelude::DataFrame;

use rowcheck_model::{CheckError, MAX_SAMPLE_ROWS, Result, ViolationReport};

use crate::condition::{BoxedCondition, Condition};

/// A named condition plus the message reported when rows violate it.
pub struct Rule {
    name: String,
    condition: BoxedCondition,
    message: String,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        condition: impl Condition + 'static,
        error_msg: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            condition: Box::new(condition),
            message: error_msg.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the condition against a table.
    ///
    /// Returns `Ok(None)` when every row passes and `Ok(Some(report))` when
    /// at least one row offends; the report samples the first
    /// [`MAX_SAMPLE_ROWS`] offending positions in table order. Evaluation
    /// failures propagate as errors; converting them into reports is the
    /// validator's job.
    pub fn check(&self, frame: &DataFrame) -> Result<Option<ViolationReport>> {
        let mask = self.condition.evaluate(frame)?;
        if mask.len() != frame.height() {
            return Err(CheckError::MaskLength {
                got: mask.len(),
                expected: frame.height(),
            });
        }

        let offenders: Vec<usize> = mask.invalid_rows().collect();
        if offenders.is_empty() {
            return Ok(None);
        }

        let violations = offenders.len() as u64;
        let sample_rows: Vec<usize> = offenders.into_iter().take(MAX_SAMPLE_ROWS).collect();
        Ok(Some(ViolationReport::violation(
            self.name.clone(),
            self.message.clone(),
            violations,
            sample_rows,
        )))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
