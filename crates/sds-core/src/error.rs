use sds_ingest::IngestError;
use thiserror::Error;

/// Pipeline-level error taxonomy surfaced at the boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Required input data was absent; the pipeline never ran.
    #[error("no input data supplied")]
    InvalidInput,

    /// The input could not be parsed; no partial dataset is returned.
    #[error("failed to process data: {0}")]
    Parse(IngestError),
}

impl From<IngestError> for PipelineError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::EmptyInput => PipelineError::InvalidInput,
            other => PipelineError::Parse(other),
        }
    }
}
