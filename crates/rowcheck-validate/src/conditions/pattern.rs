use polars::prelude::{AnyValue, DataFrame, DataType};
use regex::Regex;

use rowcheck_ingest::any_to_string;
use rowcheck_model::{CheckError, Result};

use crate::condition::{Condition, column};
use crate::mask::RowMask;

/// Condition built by [`matches_pattern`].
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    column: String,
    pattern: String,
}

/// Rows are valid when `column` matches `pattern` from the start of the value.
///
/// The pattern is compiled as `^(?:pattern)`: a match anchored at the start
/// of the cell suffices, and there is no implicit anchor at the end. Null
/// cells fail the condition. The column must be a string column. The pattern
/// is compiled at evaluation time; a malformed pattern surfaces as an
/// evaluation error, never a panic.
pub fn matches_pattern(column: impl Into<String>, pattern: impl Into<String>) -> MatchesPattern {
    MatchesPattern {
        column: column.into(),
        pattern: pattern.into(),
    }
}

impl Condition for MatchesPattern {
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask> {
        let series = column(frame, &self.column)?;
        if !matches!(series.dtype(), DataType::String) {
            return Err(CheckError::TypeMismatch {
                column: self.column.clone(),
                dtype: series.dtype().to_string(),
                expected: "a string type",
            });
        }

        let regex = Regex::new(&format!("^(?:{})", self.pattern)).map_err(|e| {
            CheckError::InvalidPattern {
                column: self.column.clone(),
                message: e.to_string(),
            }
        })?;

        let mask = (0..frame.height())
            .map(|idx| {
                let value = series.get(idx).unwrap_or(AnyValue::Null);
                match value {
                    AnyValue::Null => false,
                    other => regex.is_match(&any_to_string(other)),
                }
            })
            .collect();
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    const EMAIL: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

    #[test]
    fn flags_mismatches_and_nulls() {
        let frame = df! {
            "email" => &[
                Some("john@gmail.com"),
                Some("invalid-email"),
                None,
                Some("sarah@yahoo.com"),
            ],
        }
        .unwrap();
        let mask = matches_pattern("email", EMAIL).evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn matches_from_start_without_end_anchor() {
        let frame = df! { "code" => &["AB-12", "AB", "XAB-12"] }.unwrap();
        let mask = matches_pattern("code", r"AB-\d+").evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn malformed_pattern_is_evaluation_error() {
        let frame = df! { "email" => &["a@b.c"] }.unwrap();
        let err = matches_pattern("email", "[unclosed")
            .evaluate(&frame)
            .unwrap_err();
        assert!(matches!(err, CheckError::InvalidPattern { .. }));
        assert_eq!(err.kind(), rowcheck_model::ErrorKind::Evaluation);
    }

    #[test]
    fn numeric_column_is_type_mismatch() {
        let frame = df! { "zip" => &[12345i64] }.unwrap();
        let err = matches_pattern("zip", r"\d{5}").evaluate(&frame).unwrap_err();
        assert!(matches!(err, CheckError::TypeMismatch { .. }));
        assert_eq!(err.kind(), rowcheck_model::ErrorKind::Schema);
    }

    #[test]
    fn empty_string_cells_still_match_empty_patterns() {
        let frame = df! { "s" => &["", "x"] }.unwrap();
        let mask = matches_pattern("s", ".*").evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_count(), 0);
    }
}
