//! Per-update outcome types.

use serde::Serialize;
use std::path::PathBuf;

/// Where the updates of a run were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateSource {
    /// A single-package title.
    Title,
    /// The PR body (grouped PRs and unrecognized titles).
    Body,
}

impl UpdateSource {
    /// Returns the source as a display string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }
}

/// A changeset written for one update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangesetResult {
    /// Updated package.
    pub package: String,

    /// Path the changeset was written to.
    pub path: PathBuf,

    /// Whether release notes were appended.
    pub changelog_attached: bool,

    /// Whether an existing changeset for another update was replaced.
    pub overwrote_other_update: bool,
}
