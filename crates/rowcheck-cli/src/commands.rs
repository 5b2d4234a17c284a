use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use rowcheck_ingest::read_csv;
use rowcheck_validate::{DataValidator, Rule, between, matches_pattern, not_null, unique_values};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

/// Load the table, build the validator from the flags, and run it.
pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check", data = %args.data.display());
    let _guard = span.enter();

    let validator = build_validator(args)?;
    if validator.is_empty() {
        bail!("no rules given; pass at least one of --not-null, --unique, --between, --pattern");
    }

    let frame = read_csv(&args.data)
        .with_context(|| format!("load table {}", args.data.display()))?;

    info!(rows = frame.height(), rules = validator.len(), "running checks");
    let reports = validator.validate(&frame);

    Ok(CheckResult {
        data_path: args.data.clone(),
        rows: frame.height(),
        rules_evaluated: validator.len(),
        reports,
    })
}

/// Print the built-in rule kinds and their flag syntax.
pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Flag", "Description"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "not-null",
        "--not-null <COLUMN>",
        "Every row must have a value; empty strings count as present",
    ]);
    table.add_row(vec![
        "unique",
        "--unique <COLUMN>",
        "Each value must occur exactly once; nulls always pass",
    ]);
    table.add_row(vec![
        "between",
        "--between <COLUMN=MIN..MAX>",
        "Numeric values must lie within the inclusive range",
    ]);
    table.add_row(vec![
        "pattern",
        "--pattern <COLUMN=REGEX>",
        "String values must match the pattern from the start",
    ]);
    println!("{table}");
}

/// Rules are registered in a fixed group order so report order is stable:
/// not-null, unique, between, pattern, keeping command-line order within
/// each group.
fn build_validator(args: &CheckArgs) -> Result<DataValidator> {
    let mut validator = DataValidator::new();

    for column in &args.not_null {
        validator = validator.add_rule(Rule::new(
            format!("not-null({column})"),
            not_null(column.clone()),
            format!("column `{column}` must not contain nulls"),
        ));
    }
    for column in &args.unique {
        validator = validator.add_rule(Rule::new(
            format!("unique({column})"),
            unique_values(column.clone()),
            format!("values in `{column}` must be unique"),
        ));
    }
    for spec in &args.between {
        let (column, min_val, max_val) = parse_between_spec(spec)?;
        validator = validator.add_rule(Rule::new(
            format!("between({column})"),
            between(column.clone(), min_val, max_val),
            format!("values in `{column}` must lie between {min_val} and {max_val}"),
        ));
    }
    for spec in &args.pattern {
        let (column, pattern) = parse_pattern_spec(spec)?;
        validator = validator.add_rule(Rule::new(
            format!("pattern({column})"),
            matches_pattern(column.clone(), pattern),
            format!("values in `{column}` must match the expected pattern"),
        ));
    }

    Ok(validator)
}

fn parse_between_spec(spec: &str) -> Result<(String, f64, f64)> {
    let Some((column, range)) = spec.split_once('=') else {
        bail!("invalid --between spec `{spec}`: expected COLUMN=MIN..MAX");
    };
    let Some((lo, hi)) = range.split_once("..") else {
        bail!("invalid --between range `{range}`: expected MIN..MAX");
    };
    let min_val: f64 = lo
        .trim()
        .parse()
        .with_context(|| format!("invalid --between minimum `{lo}`"))?;
    let max_val: f64 = hi
        .trim()
        .parse()
        .with_context(|| format!("invalid --between maximum `{hi}`"))?;
    Ok((column.trim().to_string(), min_val, max_val))
}

fn parse_pattern_spec(spec: &str) -> Result<(String, String)> {
    let Some((column, pattern)) = spec.split_once('=') else {
        bail!("invalid --pattern spec `{spec}`: expected COLUMN=REGEX");
    };
    Ok((column.trim().to_string(), pattern.to_string()))
}
