//! Changeset error types.

use thiserror::Error;

/// Errors that can occur while reading or writing changeset files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read an existing changeset.
    #[error("Failed to read changeset '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a changeset.
    #[error("Failed to write changeset '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An unrecognized bump severity.
#[derive(Debug, Error)]
#[error("Unknown bump severity '{value}' (expected patch, minor or major)")]
pub struct ParseSeverityError {
    /// The rejected input.
    pub value: String,
}
