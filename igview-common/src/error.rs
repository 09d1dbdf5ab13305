//! Common error types for igview

use thiserror::Error;

/// Common result type for igview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading and normalizing an export.
///
/// Field-level absences are never errors; they resolve to fallback values
/// inside the normalizer.
#[derive(Error, Debug)]
pub enum Error {
    /// Expected dataset file (or directory) is absent from the export
    #[error("Missing dataset: {0}")]
    MissingDataset(String),

    /// Dataset file exists but is not JSON, or lacks its record sequence
    #[error("Malformed JSON in {dataset}: {reason}")]
    MalformedJson { dataset: String, reason: String },

    /// An aggregate (e.g. a timespan) was requested over zero records
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Requested single identity (e.g. a conversation thread) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a `MalformedJson` error for a dataset label
    pub fn malformed(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedJson {
            dataset: dataset.into(),
            reason: reason.into(),
        }
    }
}
