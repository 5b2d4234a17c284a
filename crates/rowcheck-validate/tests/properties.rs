//! Property-based tests for the condition builders.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use rowcheck_validate::{Condition, MAX_SAMPLE_ROWS, Rule, between, unique_values};

fn int_frame(values: &[Option<i64>]) -> DataFrame {
    let series = Series::new("v".into(), values);
    DataFrame::new(vec![series.into_column()]).unwrap()
}

proptest! {
    /// A between report counts exactly the rows a direct scan rejects, and
    /// its sample is the capped prefix of those rows.
    #[test]
    fn between_counts_match_a_direct_scan(
        values in prop::collection::vec(prop::option::of(-1000i64..1000), 0..40),
        lo in -500i64..0,
        hi in 0i64..500,
    ) {
        let frame = int_frame(&values);
        let rule = Rule::new("range", between("v", lo as f64, hi as f64), "out of range");

        let expected: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_some_and(|n| n >= lo && n <= hi))
            .map(|(idx, _)| idx)
            .collect();

        match rule.check(&frame).unwrap() {
            None => prop_assert!(expected.is_empty()),
            Some(report) => {
                prop_assert_eq!(report.violations as usize, expected.len());
                let sample_len = expected.len().min(MAX_SAMPLE_ROWS);
                prop_assert_eq!(&report.sample_rows[..], &expected[..sample_len]);
            }
        }
    }

    /// A row fails uniqueness exactly when its non-null value occurs more
    /// than once; null rows always pass.
    #[test]
    fn unique_flags_exactly_the_repeated_values(
        values in prop::collection::vec(prop::option::of(0i64..6), 0..30),
    ) {
        let frame = int_frame(&values);
        let mask = unique_values("v").evaluate(&frame).unwrap();

        for (idx, value) in values.iter().enumerate() {
            match value {
                None => prop_assert!(mask.is_valid(idx)),
                Some(v) => {
                    let occurrences = values.iter().flatten().filter(|&o| o == v).count();
                    prop_assert_eq!(mask.is_valid(idx), occurrences == 1);
                }
            }
        }
    }
}
