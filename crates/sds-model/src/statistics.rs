use serde::{Deserialize, Serialize};

/// Descriptive summary over the valid target values of a dataset.
///
/// `std` is the population standard deviation (divisor = count, not
/// count − 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}
