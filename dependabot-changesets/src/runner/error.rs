//! Runner error types.

use crate::changeset::StoreError;
use crate::pull_request::FetchError;

/// Errors that can occur while running the generator.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A required input was not provided.
    #[error("Missing required input: {name}")]
    MissingInput { name: &'static str },

    /// The pull request could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A changeset could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
