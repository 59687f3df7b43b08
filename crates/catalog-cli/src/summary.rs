use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{LocaleReport, RunReport};

/// How the summary table decides on ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    /// Style only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

pub fn print_summary(report: &RunReport, styling: Styling) {
    println!("{}", summary_table(report, styling));
}

pub fn summary_table(report: &RunReport, styling: Styling) -> Table {
    let mut table = Table::new();
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
    }
    table.set_header(vec![
        header_cell("Locale"),
        header_cell("Files"),
        header_cell("Passed"),
        header_cell("Failed"),
        header_cell("Result"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for locale in &report.locales {
        table.add_row(locale_row(locale));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.checked()).add_attribute(Attribute::Bold),
        count_cell(report.passed(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(report.failed(), Color::Red).add_attribute(Attribute::Bold),
        result_cell(report.all_passed()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn locale_row(locale: &LocaleReport) -> Vec<Cell> {
    vec![
        Cell::new(&locale.locale)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(locale.checked()),
        count_cell(locale.passed(), Color::Green),
        count_cell(locale.failed(), Color::Red),
        result_cell(locale.all_passed()),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn result_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("OK").fg(Color::Green)
    } else {
        Cell::new("FAIL").fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
