//! Ordered rule execution with fail-soft error reporting.

use polars::prelude::DataFrame;

use rowcheck_model::ViolationReport;

use crate::rule::Rule;

/// An ordered set of rules run as a unit against one table.
///
/// Rules are evaluated in registration order. A rule whose condition fails
/// to evaluate contributes an `Error`-kind report and never halts the
/// remaining rules.
#[derive(Debug, Default)]
pub struct DataValidator {
    rules: Vec<Rule>,
}

impl DataValidator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. Returns `self` for chaining.
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule against the table.
    ///
    /// The result holds one report per failed rule, in registration order;
    /// passing rules contribute nothing, so an empty result is a clean
    /// table. A rule whose evaluation fails becomes an `Error`-kind report
    /// in the same stream with zero violations and no sample rows.
    pub fn validate(&self, frame: &DataFrame) -> Vec<ViolationReport> {
        let mut reports = Vec::new();
        for rule in &self.rules {
            match rule.check(frame) {
                Ok(Some(report)) => reports.push(report),
                Ok(None) => {}
                Err(error) => {
                    reports.push(ViolationReport::evaluation_error(rule.name(), &error));
                }
            }
        }
        reports
    }
}
