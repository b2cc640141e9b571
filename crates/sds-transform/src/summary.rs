//! Descriptive statistics over the final target values.

use sds_model::{Dataset, Statistics};

/// Mean and population standard deviation (divisor = count) of `values`.
///
/// Returns `None` for an empty slice.
pub fn population_moments(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / count;
    Some((mean, variance.sqrt()))
}

/// Summarize the dataset's target values, excluding missing cells.
///
/// The exclusion happens regardless of whether cleaning ran earlier; the
/// summary is always computed over valid numbers only. Returns `None` when
/// no valid values remain.
pub fn summarize(dataset: &Dataset) -> Option<Statistics> {
    let values: Vec<f64> = dataset.target_numbers().flatten().collect();
    let (mean, std) = population_moments(&values)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Statistics {
        count: values.len(),
        mean,
        std,
        min,
        max,
    })
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
    fn population_moments_use_count_divisor() {
        let (mean, std) = population_moments(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(mean, 20.0);
        // sqrt(200 / 3), not sqrt(200 / 2)
        assert!((std - 8.164_965_809_277_26).abs() < 1e-12);
    }

    #[test]
    fn population_moments_of_empty_slice_is_none() {
        assert_eq!(population_moments(&[]), None);
    }

    #[test]
    fn summarize_excludes_missing_values() {
        let statistics = summarize(&dataset(vec![
            CellValue::Number(10.0),
            CellValue::Missing,
            CellValue::Number(30.0),
        ]))
        .unwrap();
        assert_eq!(statistics.count, 2);
        assert_eq!(statistics.mean, 20.0);
        assert_eq!(statistics.min, 10.0);
        assert_eq!(statistics.max, 30.0);
        assert_eq!(statistics.std, 10.0);
    }

    #[test]
    fn summarize_all_missing_is_none() {
        let statistics = summarize(&dataset(vec![CellValue::Missing, CellValue::Missing]));
        assert_eq!(statistics, None);
    }

    #[test]
    fn summarize_single_value() {
        let statistics = summarize(&dataset(vec![CellValue::Number(7.0)])).unwrap();
        assert_eq!(statistics.count, 1);
        assert_eq!(statistics.mean, 7.0);
        assert_eq!(statistics.std, 0.0);
        assert_eq!(statistics.min, 7.0);
        assert_eq!(statistics.max, 7.0);
    }
}
