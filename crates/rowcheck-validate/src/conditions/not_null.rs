use polars::prelude::{AnyValue, DataFrame};

use rowcheck_ingest::is_null;
use rowcheck_model::Result;

use crate::condition::{Condition, column};
use crate::mask::RowMask;

/// Condition built by [`not_null`].
#[derive(Debug, Clone)]
pub struct NotNull {
    column: String,
}

/// Rows are valid when `column` holds a value.
///
/// Only nulls are missing. Empty strings, zero, and whitespace are present
/// values and pass.
pub fn not_null(column: impl Into<String>) -> NotNull {
    NotNull {
        column: column.into(),
    }
}

impl Condition for NotNull {
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask> {
        let series = column(frame, &self.column)?;
        let mask = (0..frame.height())
            .map(|idx| !is_null(&series.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use rowcheck_model::CheckError;

    #[test]
    fn flags_null_cells_only() {
        let frame = df! { "email" => &[Some("a@b.c"), None, Some("")] }.unwrap();
        let mask = not_null("email").evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_rows().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn empty_string_is_present() {
        let frame = df! { "name" => &["", " ", "x"] }.unwrap();
        let mask = not_null("name").evaluate(&frame).unwrap();
        assert_eq!(mask.invalid_count(), 0);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let frame = df! { "a" => &[1i64] }.unwrap();
        let err = not_null("b").evaluate(&frame).unwrap_err();
        assert!(matches!(err, CheckError::MissingColumn { column } if column == "b"));
    }

    #[test]
    fn empty_table_has_no_offenders() {
        let frame = df! { "a" => &[1i64] }.unwrap();
        let empty = frame.head(Some(0));
        let mask = not_null("a").evaluate(&empty).unwrap();
        assert!(mask.is_empty());
    }
}
