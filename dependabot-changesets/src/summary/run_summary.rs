//! Run summary types.

use super::result::{ChangesetResult, UpdateSource};
use serde::Serialize;

/// Summary of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Pull request number processed.
    pub pr_number: u64,

    /// Whether the title described a grouped update.
    pub grouped: bool,

    /// Where the updates were read from. `None` until updates are found.
    pub source: Option<UpdateSource>,

    /// Number of updates extracted.
    pub updates_found: usize,

    /// Changesets written, in extraction order.
    pub changesets: Vec<ChangesetResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(pr_number: u64, grouped: bool) -> Self {
        Self {
            pr_number,
            grouped,
            source: None,
            updates_found: 0,
            changesets: Vec::new(),
        }
    }

    /// Records a written changeset.
    pub fn record_result(&mut self, result: ChangesetResult) {
        self.changesets.push(result);
    }

    /// Number of changesets written.
    #[must_use]
    pub fn changesets_written(&self) -> usize {
        self.changesets.len()
    }

    /// Number of changesets carrying release notes.
    #[must_use]
    pub fn changelogs_attached(&self) -> usize {
        self.changesets
            .iter()
            .filter(|c| c.changelog_attached)
            .count()
    }

    /// Number of changesets that replaced one for a different update.
    #[must_use]
    pub fn overwrites(&self) -> usize {
        self.changesets
            .iter()
            .filter(|c| c.overwrote_other_update)
            .count()
    }

    /// Returns true if no updates were recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates_found == 0
    }
}
