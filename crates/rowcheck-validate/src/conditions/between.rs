use polars::prelude::{AnyValue, DataFrame, DataType};

use rowcheck_ingest::any_to_f64;
use rowcheck_model::{CheckError, Result};

use crate::condition::{Condition, column};
use crate::mask::RowMask;

/// Condition built by [`between`].
#[derive(Debug, Clone)]
pub struct Between {
    column: String,
    min_val: f64,
    max_val: f64,
}

/// Rows are valid when `min_val <= column <= max_val`, bounds inclusive.
///
/// Null cells fail the range check. The column must have a numeric dtype;
/// a string column is a schema error even when its cells look numeric.
pub fn between(column: impl Into<String>, min_val: f64, max_val: f64) -> Between {
    Between {
        column: column.into(),
        min_val,
        max_val,
    }
}

impl Condition for Between {
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask> {
        let series = column(frame, &self.column)?;
        let is_numeric = matches!(
            series.dtype(),
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::Float32
                | DataType::Float64
        );
        if !is_numeric {
            return Err(CheckError::TypeMismatch {
                column: self.column.clone(),
                dtype: series.dtype().to_string(),
                expected: "a numeric type",
            });
        }

        let mask = (0..frame.height())
            .map(|idx| {
                any_to_f64(series.get(idx).unwrap_or(AnyValue::Null))
                    .is_some_and(|v| v >= self.min_val && v <= self.max_val)
            })
            .collect();
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn bounds_are_inclusive() {
        let frame = df! { "age" => &[12i64, 13, 120, 121] }.unwrap();
        let mask = between("age", 13.0, 120.0).evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn nulls_fail_the_range() {
        let frame = df! { "age" => &[Some(25i64), None, Some(35)] }.unwrap();
        let mask = between("age", 13.0, 120.0).evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn float_columns_work() {
        let frame = df! { "total_spent" => &[250.50f64, -50.00, 0.0] }.unwrap();
        let mask = between("total_spent", 0.0, 1_000_000.0).evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn string_column_is_type_mismatch() {
        let frame = df! { "age" => &["25", "30"] }.unwrap();
        let err = between("age", 13.0, 120.0).evaluate(&frame).unwrap_err();
        assert!(matches!(err, CheckError::TypeMismatch { column, .. } if column == "age"));
    }

    #[test]
    fn inverted_bounds_reject_everything() {
        let frame = df! { "n" => &[1i64, 2] }.unwrap();
        let mask = between("n", 10.0, 0.0).evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_count(), 2);
    }
}
