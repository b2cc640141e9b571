//! Removal of rows whose target value failed numeric coercion.

use sds_model::Dataset;

/// Drop every row whose target cell is missing.
///
/// Relative order of the kept rows is preserved. An all-missing dataset
/// degenerates to an empty dataset, which is a valid result.
pub fn drop_missing(mut dataset: Dataset) -> Dataset {
    let target = dataset.target.clone();
    let before = dataset.len();
    dataset
        .rows
        .retain(|row| row.cell(&target).is_some_and(|cell| !cell.is_missing()));
    if dataset.len() < before {
        tracing::debug!(
            dropped = before - dataset.len(),
            kept = dataset.len(),
            "dropped rows with missing target values"
        );
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use sds_model::{CellValue, Row, TARGET_COLUMN};

    fn dataset(values: Vec<CellValue>) -> Dataset {
        let mut dataset = Dataset::new(vec![TARGET_COLUMN.to_string()], TARGET_COLUMN);
        for value in values {
            let mut row = Row::default();
            row.set_cell(TARGET_COLUMN, value);
            dataset.push_row(row);
        }
        dataset
    }

    #[test]
    fn keeps_valid_rows_in_order() {
        let cleaned = dataset(vec![
            CellValue::Number(10.0),
            CellValue::Missing,
            CellValue::Number(30.0),
        ]);
        let cleaned = drop_missing(cleaned);

        let values: Vec<Option<f64>> = cleaned.target_numbers().collect();
        assert_eq!(values, vec![Some(10.0), Some(30.0)]);
    }

    #[test]
    fn all_missing_degenerates_to_empty() {
        let cleaned = drop_missing(dataset(vec![CellValue::Missing, CellValue::Missing]));
        assert!(cleaned.is_empty());
    }

    #[test]
    fn empty_dataset_stays_empty() {
        let cleaned = drop_missing(dataset(vec![]));
        assert!(cleaned.is_empty());
    }
}
