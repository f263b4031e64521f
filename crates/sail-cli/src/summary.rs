use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use sail_model::ProvinceOrState;
use sail_validate::{FailureEntry, ValidationReport};
use serde::Serialize;

use sail_cli::pipeline::ValidationRun;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberOutcome<'a> {
    member_id: i32,
    display_name: &'a str,
    accepted: bool,
    failures: Vec<FailureEntry>,
}

/// Print one JSON document describing every record's outcome.
pub fn print_json(run: &ValidationRun) -> Result<()> {
    let outcomes: Vec<MemberOutcome<'_>> = run
        .reports
        .iter()
        .map(|report| MemberOutcome {
            member_id: report.member_id,
            display_name: &report.display_name,
            accepted: report.is_accepted(),
            failures: report.entries(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

pub fn print_summary(run: &ValidationRun) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Member ID"),
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Failures"),
    ]);
    apply_table_style(&mut table, 120);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, report) in run.reports.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            member_id_cell(report.member_id),
            Cell::new(&report.display_name),
            status_cell(report),
            count_cell(report.failure_count()),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} accepted / {} rejected",
            run.accepted_count(),
            run.rejected_count()
        ))
        .add_attribute(Attribute::Bold),
        count_cell(run.failure_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_failure_table(run);
}

fn print_failure_table(run: &ValidationRun) {
    if run.failure_count() == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Member"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table, 160);
    for report in run.reports.iter().filter(|r| !r.is_accepted()) {
        for entry in report.entries() {
            table.add_row(vec![
                Cell::new(&report.display_name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&entry.label),
                dim_cell(&entry.code),
                Cell::new(&entry.message),
            ]);
        }
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

pub fn print_provinces(provinces: &[ProvinceOrState]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Country"),
    ]);
    apply_table_style(&mut table, 80);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for province in provinces {
        table.add_row(vec![
            Cell::new(&province.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&province.name),
            Cell::new(&province.country_code),
        ]);
    }
    println!("{table}");
    println!("{} entries", provinces.len());
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn member_id_cell(member_id: i32) -> Cell {
    if member_id == 0 {
        dim_cell("new")
    } else {
        Cell::new(member_id)
    }
}

fn status_cell(report: &ValidationReport) -> Cell {
    if report.is_accepted() {
        Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("REJECTED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
