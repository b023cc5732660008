//! Changeset rendering and storage.
//!
//! A changeset is a markdown file with a front-matter block mapping package
//! names to bump severities, read by release tooling:
//!
//! ```text
//! ---
//! "my-package": patch
//! ---
//!
//! Bump @typescript-eslint/parser from 6.10.0 to 6.11.0
//! ```

mod error;
mod severity;
mod store;

pub use error::{ParseSeverityError, StoreError};
pub use severity::BumpSeverity;
pub use store::{ChangesetStore, FsChangesetStore};

use crate::update::{extract_update_from_title, UpdateTriple};

const FRONT_MATTER_FENCE: &str = "---";

/// Renders the changeset announcing `update` for `target_name`.
///
/// The update's changelog, when present, follows the summary line after a
/// blank line.
#[must_use]
pub fn generate_changeset(
    target_name: &str,
    severity: BumpSeverity,
    update: &UpdateTriple,
) -> String {
    let mut changeset = format!(
        "{FRONT_MATTER_FENCE}\n\"{target_name}\": {severity}\n{FRONT_MATTER_FENCE}\n\nBump {} from {} to {}\n",
        update.package, update.from, update.to
    );

    if let Some(changelog) = &update.changelog {
        changeset.push('\n');
        changeset.push_str(changelog);
        changeset.push('\n');
    }

    changeset
}

/// Derives the changeset file name for a package.
///
/// `/` becomes `__`, so `@scope/name` maps to `@scope__name.md`.
#[must_use]
pub fn get_changeset_name(package: &str) -> String {
    format!("{}.md", package.replace('/', "__"))
}

/// Recovers the update a rendered changeset announces.
///
/// Skips the front matter and parses the first `Bump x from a to b` line.
/// The changelog is not recovered.
#[must_use]
pub fn extract_changeset_update(document: &str) -> Option<UpdateTriple> {
    let mut lines = document.lines().peekable();

    if lines.peek().map(|line| line.trim()) == Some(FRONT_MATTER_FENCE) {
        lines.next();
        lines.find(|line| line.trim() == FRONT_MATTER_FENCE)?;
    }

    lines.find_map(|line| extract_update_from_title(line.trim()))
}
