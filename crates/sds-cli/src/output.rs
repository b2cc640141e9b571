//! Human-readable rendering of analysis results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use sds_model::{AnalyzeResponse, CellValue, Dataset, Statistics};

/// Print a completed or failed response to the terminal.
pub fn print_response(response: &AnalyzeResponse) {
    match &response.processed_data {
        Some(dataset) => {
            println!("{}", records_table(dataset));
            match &response.statistics {
                Some(statistics) => println!("{}", statistics_table(statistics)),
                None => println!("No valid numeric values to summarize."),
            }
            println!("{}", response.message);
        }
        None => eprintln!("error: {}", response.message),
    }
}

/// Render the processed rows in original column order.
pub fn records_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(dataset.columns.iter().map(|c| header_cell(c)));
    if let Some(index) = dataset.columns.iter().position(|c| *c == dataset.target) {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for row in &dataset.rows {
        table.add_row(dataset.columns.iter().map(|column| {
            match row.cell(column) {
                Some(CellValue::Text(text)) => text.clone(),
                Some(CellValue::Number(value)) => value.to_string(),
                Some(CellValue::Missing) | None => String::new(),
            }
        }));
    }
    table
}

/// Render the summary statistics as a two-column table.
pub fn statistics_table(statistics: &Statistics) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec!["count".to_string(), statistics.count.to_string()]);
    table.add_row(vec!["mean".to_string(), statistics.mean.to_string()]);
    table.add_row(vec!["std".to_string(), statistics.std.to_string()]);
    table.add_row(vec!["min".to_string(), statistics.min.to_string()]);
    table.add_row(vec!["max".to_string(), statistics.max.to_string()]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sds_model::{Row, TARGET_COLUMN};

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new(
            vec!["Region".to_string(), TARGET_COLUMN.to_string()],
            TARGET_COLUMN,
        );
        let mut row = Row::default();
        row.set_cell("Region", CellValue::Text("North".to_string()));
        row.set_cell(TARGET_COLUMN, CellValue::Number(10.5));
        dataset.push_row(row);
        let mut row = Row::default();
        row.set_cell("Region", CellValue::Text("South".to_string()));
        row.set_cell(TARGET_COLUMN, CellValue::Missing);
        dataset.push_row(row);
        dataset
    }

    #[test]
    fn records_table_renders_values_and_blanks() {
        let rendered = records_table(&dataset()).to_string();
        assert!(rendered.contains("Region"));
        assert!(rendered.contains("North"));
        assert!(rendered.contains("10.5"));
        assert!(rendered.contains("South"));
    }

    #[test]
    fn statistics_table_lists_all_five_measures() {
        let rendered = statistics_table(&Statistics {
            count: 3,
            mean: 20.0,
            std: 8.165,
            min: 10.0,
            max: 30.0,
        })
        .to_string();
        for label in ["count", "mean", "std", "min", "max"] {
            assert!(rendered.contains(label), "missing {label}");
        }
        assert!(rendered.contains("8.165"));
    }
}
