//! Population Z-score normalization of the target column.

use sds_model::{CellValue, Dataset};

use crate::summary::population_moments;

/// Replace every target value with its population Z-score, rounded to four
/// decimal places.
///
/// Operates on whatever dataset exists at this pipeline position:
///
/// - Empty dataset: no-op.
/// - Any missing target value: the mean is undefined, so every target value
///   degrades to missing (the arithmetic-with-missing rule).
/// - Zero standard deviation (all values identical, including a single row):
///   every value becomes exactly `0.0`.
pub fn normalize_target(mut dataset: Dataset) -> Dataset {
    if dataset.is_empty() {
        return dataset;
    }
    let target = dataset.target.clone();

    let values: Option<Vec<f64>> = dataset.target_numbers().collect();
    let Some(values) = values else {
        for row in &mut dataset.rows {
            row.set_cell(&target, CellValue::Missing);
        }
        tracing::debug!("normalization degraded to missing: uncoerced values present");
        return dataset;
    };

    let Some((mean, std)) = population_moments(&values) else {
        return dataset;
    };
    for (row, value) in dataset.rows.iter_mut().zip(values) {
        let score = if std > 0.0 {
            round_4dp((value - mean) / std)
        } else {
            0.0
        };
        row.set_cell(&target, CellValue::Number(score));
    }
    tracing::debug!(rows = dataset.len(), mean, std, "normalized target values");
    dataset
}

/// Round half away from zero to four decimal places.
fn round_4dp(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
