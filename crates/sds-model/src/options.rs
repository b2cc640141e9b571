use serde::{Deserialize, Serialize};

/// Boolean switches for the optional pipeline stages.
///
/// The order of application is fixed regardless of which flags are set:
/// clean → normalize → sort → summarize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Drop rows whose target value failed numeric coercion.
    #[serde(default)]
    pub clean_missing: bool,
    /// Replace each target value with its population Z-score.
    #[serde(default)]
    pub normalize_data: bool,
    /// Reorder rows by target value, descending.
    #[serde(default)]
    pub sort_sales: bool,
}
