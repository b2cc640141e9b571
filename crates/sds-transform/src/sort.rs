//! Descending reorder of the dataset by target value.

use std::cmp::Ordering;

use sds_model::{CellValue, Dataset};

/// Sort rows by target value, descending.
///
/// Implemented as a stable ascending sort followed by a full reversal, so
/// rows with equal target values come out in *inverted* relative order.
/// Missing values compare below every number in the ascending pass and
/// therefore emit last.
pub fn sort_descending(mut dataset: Dataset) -> Dataset {
    let target = dataset.target.clone();
    dataset.rows.sort_by(|a, b| {
        let a = a.cell(&target).unwrap_or(&CellValue::Missing);
        let b = b.cell(&target).unwrap_or(&CellValue::Missing);
        compare_ascending(a, b)
    });
    dataset.rows.reverse();
    tracing::debug!(rows = dataset.len(), "sorted dataset by target value");
    dataset
}

/// Ascending order with missing cells before every number.
fn compare_ascending(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sds_model::{Row, TARGET_COLUMN};

    fn dataset(rows: Vec<(&str, CellValue)>) -> Dataset {
        let mut dataset = Dataset::new(
            vec!["Label".to_string(), TARGET_COLUMN.to_string()],
            TARGET_COLUMN,
        );
        for (label, value) in rows {
            let mut row = Row::default();
            row.set_cell("Label", CellValue::Text(label.to_string()));
            row.set_cell(TARGET_COLUMN, value);
            dataset.push_row(row);
        }
        dataset
    }

    fn labels(dataset: &Dataset) -> Vec<String> {
        dataset
            .rows
            .iter()
            .map(|row| match row.cell("Label") {
                Some(CellValue::Text(label)) => label.clone(),
                _ => String::new(),
            })
            .collect()
    }

    #[test]
    fn sorts_descending_by_target() {
        let sorted = sort_descending(dataset(vec![
            ("a", CellValue::Number(10.0)),
            ("b", CellValue::Number(30.0)),
            ("c", CellValue::Number(20.0)),
        ]));
        assert_eq!(labels(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn tied_rows_come_out_in_inverted_order() {
        // Reverse-of-ascending: the full reversal inverts tie order too.
        let sorted = sort_descending(dataset(vec![
            ("first", CellValue::Number(5.0)),
            ("second", CellValue::Number(5.0)),
            ("third", CellValue::Number(9.0)),
        ]));
        assert_eq!(labels(&sorted), vec!["third", "second", "first"]);
    }

    #[test]
    fn missing_values_sort_last() {
        let sorted = sort_descending(dataset(vec![
            ("a", CellValue::Missing),
            ("b", CellValue::Number(1.0)),
            ("c", CellValue::Missing),
            ("d", CellValue::Number(2.0)),
        ]));
        assert_eq!(labels(&sorted), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn empty_dataset_sorts_to_empty() {
        let sorted = sort_descending(dataset(vec![]));
        assert!(sorted.is_empty());
    }
}
