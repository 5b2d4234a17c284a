//! The condition seam: per-row verdicts over a DataFrame.

use polars::prelude::{Column, DataFrame};

use rowcheck_model::{CheckError, Result};

use crate::mask::RowMask;

/// A predicate over a table, yielding one verdict per row.
///
/// Conditions only read the frame; they never mutate it and do no I/O. Any
/// closure `Fn(&DataFrame) -> Result<RowMask>` is a condition, so ad-hoc
/// predicates over one or more columns go through the same seam as the
/// built-in builders.
pub trait Condition: Send + Sync {
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask>;
}

impl<F> Condition for F
where
    F: Fn(&DataFrame) -> Result<RowMask> + Send + Sync,
{
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask> {
        self(frame)
    }
}

pub type BoxedCondition = Box<dyn Condition>;

/// Resolves a column by exact name.
pub(crate) fn column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column> {
    frame.column(name).map_err(|_| CheckError::MissingColumn {
        column: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn closures_are_conditions() {
        let condition = |frame: &DataFrame| -> Result<RowMask> {
            Ok(RowMask::all_valid(frame.height()))
        };
        let frame = df! { "a" => &[1i64, 2, 3] }.unwrap();
        let mask = condition.evaluate(&frame).unwrap();
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.invalid_count(), 0);
    }

    #[test]
    fn column_resolution_is_exact() {
        let frame = df! { "email" => &["a@b.c"] }.unwrap();
        assert!(column(&frame, "email").is_ok());
        let err = column(&frame, "Email").unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn { .. }));
    }
}
