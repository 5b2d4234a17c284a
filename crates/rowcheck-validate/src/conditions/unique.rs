use std::collections::HashMap;

use polars::prelude::{AnyValue, DataFrame};

use rowcheck_ingest::{any_to_string, is_null};
use rowcheck_model::Result;

use crate::condition::{Condition, column};
use crate::mask::RowMask;

/// Condition built by [`unique_values`].
#[derive(Debug, Clone)]
pub struct UniqueValues {
    column: String,
}

/// Rows are valid when the value in `column` occurs exactly once.
///
/// Every member of a duplicate group is an offender, not just the later
/// occurrences. Null cells are never duplicates of each other and always
/// pass; missing data is [`not_null`](super::not_null)'s concern.
pub fn unique_values(column: impl Into<String>) -> UniqueValues {
    UniqueValues {
        column: column.into(),
    }
}

impl Condition for UniqueValues {
    fn evaluate(&self, frame: &DataFrame) -> Result<RowMask> {
        let series = column(frame, &self.column)?;

        let mut counts: HashMap<String, u32> = HashMap::new();
        for idx in 0..frame.height() {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            if is_null(&value) {
                continue;
            }
            *counts.entry(any_to_string(value)).or_insert(0) += 1;
        }

        let mask = (0..frame.height())
            .map(|idx| {
                let value = series.get(idx).unwrap_or(AnyValue::Null);
                if is_null(&value) {
                    return true;
                }
                counts.get(&any_to_string(value)).is_some_and(|&n| n == 1)
            })
            .collect();
        Ok(mask)
    }
}
