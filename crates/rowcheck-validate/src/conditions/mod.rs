//! Built-in condition builders.
//!
//! Each builder returns a concrete [`Condition`](crate::Condition) that
//! resolves its column at evaluation time, so the same condition can be
//! reused against tables with different shapes.

mod between;
mod not_null;
mod pattern;
mod unique;

pub use between::{Between, between};
pub use not_null::{NotNull, not_null};
pub use pattern::{MatchesPattern, matches_pattern};
pub use unique::{UniqueValues, unique_values};
