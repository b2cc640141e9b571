//! Error types for tabular data ingestion.

use thiserror::Error;

/// Errors that can occur while parsing raw delimited text.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No data supplied at all (empty or whitespace-only input).
    #[error("input data is empty")]
    EmptyInput,

    /// The header does not contain the column the pipeline operates on.
    #[error("target column '{column}' not found in header")]
    MissingTargetColumn { column: String },

    /// Structurally malformed input (ragged rows, decoding failure).
    #[error("malformed tabular input: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
