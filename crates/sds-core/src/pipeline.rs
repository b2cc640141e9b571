//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in fixed order:
//! 1. **Parse**: Raw delimited text into a typed dataset
//! 2. **Clean**: Drop rows with missing target values (optional)
//! 3. **Normalize**: Replace target values with population Z-scores (optional)
//! 4. **Sort**: Reorder rows by target value, descending (optional)
//! 5. **Summarize**: Descriptive statistics over the final valid values
//!
//! The order never changes; the three option flags only switch their stage
//! on or off. Every invocation is a pure function of its input: the dataset
//! moves stage to stage with a single owner and identical input produces an
//! identical result.

use tracing::{debug, info, info_span};

use sds_ingest::parse_dataset;
use sds_model::{
    AnalyzeOptions, AnalyzeRequest, AnalyzeResponse, Dataset, Statistics, TARGET_COLUMN,
};
use sds_transform::{drop_missing, normalize_target, sort_descending, summarize};

use crate::error::PipelineError;

/// Message attached to every successful response.
pub const COMPLETED_MESSAGE: &str = "data analysis completed";

/// Run the full pipeline over `raw` and return the processed dataset plus
/// its summary statistics.
///
/// # Errors
///
/// - [`PipelineError::InvalidInput`] when `raw` is empty or whitespace-only.
/// - [`PipelineError::Parse`] when the text is structurally malformed or the
///   target column is absent. No partial dataset is returned.
pub fn run_pipeline(
    raw: &str,
    options: AnalyzeOptions,
) -> Result<(Dataset, Option<Statistics>), PipelineError> {
    let span = info_span!(
        "analyze",
        clean = options.clean_missing,
        normalize = options.normalize_data,
        sort = options.sort_sales,
    );
    let _guard = span.enter();

    let mut dataset = parse_dataset(raw, TARGET_COLUMN)?;
    debug!(rows = dataset.len(), "parse stage complete");

    if options.clean_missing {
        dataset = drop_missing(dataset);
    }
    if options.normalize_data {
        dataset = normalize_target(dataset);
    }
    if options.sort_sales {
        dataset = sort_descending(dataset);
    }

    let statistics = summarize(&dataset);
    info!(
        rows = dataset.len(),
        valid = statistics.map_or(0, |s| s.count),
        "pipeline completed"
    );
    Ok((dataset, statistics))
}

/// Boundary entry point: run the pipeline for `request` and package the
/// outcome as an [`AnalyzeResponse`], never propagating an error.
///
/// Failure responses carry a message that distinguishes missing input from
/// a processing failure.
pub fn analyze(request: &AnalyzeRequest) -> AnalyzeResponse {
    match run_pipeline(&request.data, request.options) {
        Ok((dataset, statistics)) => {
            AnalyzeResponse::completed(dataset, statistics, COMPLETED_MESSAGE)
        }
        Err(error) => AnalyzeResponse::failed(error.to_string()),
    }
}
