use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Report: {}", result.output.display());
    println!("{}", summary_table(result));
}

fn summary_table(result: &RunResult) -> Table {
    let summary = &result.summary;
    let stats = &summary.stats;
    let notation = summary.notation;

    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let start = summary
        .cutoff
        .map_or_else(|| dim_cell("-"), |date| Cell::new(date.format(notation)));
    let (period, days) = match &summary.range {
        Some(range) => (
            Cell::new(format!(
                "{} - {}",
                range.from.format(notation),
                range.to.format(notation)
            )),
            range.days().map_or_else(|| dim_cell("-"), Cell::new),
        ),
        None => (dim_cell("-"), dim_cell("-")),
    };

    table.add_row(vec![Cell::new("Start date"), start]);
    table.add_row(vec![Cell::new("Period"), period]);
    table.add_row(vec![Cell::new("Days covered"), days]);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Rows written").add_attribute(Attribute::Bold),
        Cell::new(stats.rows_written)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (before start date)"),
        count_cell(stats.skipped_before_cutoff, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (malformed)"),
        count_cell(stats.skipped_malformed, Color::Yellow),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
