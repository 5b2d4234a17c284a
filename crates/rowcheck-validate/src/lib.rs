//! Rule engine for rowcheck.
//!
//! A [`Condition`] turns a table into per-row verdicts. [`Rule`] attaches a
//! name and an error message to a condition, and [`DataValidator`] runs an
//! ordered rule set in one call. Evaluation failures are folded into the
//! report stream instead of aborting the run, so one broken rule never hides
//! the verdicts of the others.

pub mod condition;
pub mod conditions;
pub mod mask;
pub mod rule;
pub mod validator;

pub use condition::{BoxedCondition, Condition};
pub use conditions::{
    Between, MatchesPattern, NotNull, UniqueValues, between, matches_pattern, not_null,
    unique_values,
};
pub use mask::RowMask;
pub use rule::Rule;
pub use validator::DataValidator;

pub use rowcheck_model::{
    CheckError, ErrorKind, MAX_SAMPLE_ROWS, ReportKind, Result, ViolationReport,
};
