use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use rowcheck_model::{ReportKind, ViolationReport};

use crate::types::CheckResult;

/// Print the findings of a check run as a console table plus a totals line.
pub fn print_summary(result: &CheckResult) {
    println!("Data: {}", result.data_path.display());
    println!("Rows checked: {}", result.rows);
    if result.reports.is_empty() {
        println!("All {} rule(s) passed.", result.rules_evaluated);
        return;
    }
    println!("{}", render_reports(&result.reports));
    println!(
        "{} of {} rule(s) failed: {} with violations, {} could not be evaluated.",
        result.reports.len(),
        result.rules_evaluated,
        result.violated_count(),
        result.error_count(),
    );
}

/// Print the findings as a JSON array of reports.
pub fn print_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&result.reports)?;
    println!("{json}");
    Ok(())
}

/// Render the report table; separated from printing for tests.
pub fn render_reports(reports: &[ViolationReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Kind"),
        header_cell("Violations"),
        header_cell("Sample rows"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            rule_cell(&report.rule),
            kind_cell(report.kind),
            violation_count_cell(report),
            sample_cell(&report.sample_rows),
            Cell::new(&report.message),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::UpperBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn rule_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn kind_cell(kind: ReportKind) -> Cell {
    let cell = Cell::new(kind.label().to_uppercase()).add_attribute(Attribute::Bold);
    match kind {
        ReportKind::Violation => cell.fg(Color::Red),
        ReportKind::Error => cell.fg(Color::Yellow),
    }
}

fn violation_count_cell(report: &ViolationReport) -> Cell {
    if report.is_error() {
        dim_cell("-")
    } else {
        Cell::new(report.violations)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn sample_cell(rows: &[usize]) -> Cell {
    if rows.is_empty() {
        dim_cell("-")
    } else {
        let joined = rows
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Cell::new(joined)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
