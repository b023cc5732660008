//! Release notes extraction.
//!
//! Dependabot embeds upstream release notes, changelog excerpts and commit
//! lists as adjacent `<details>` elements after each ``Updates `x` from a
//! to b`` line. This module finds the run belonging to one package and returns
//! it verbatim.

mod blocks;
mod matcher;

use blocks::{find_runs, DetailsRun};
use matcher::PackageMatcher;
use tracing::debug;

/// Returns the `<details>` run holding `package`'s release notes.
///
/// A run belongs to the package when the last non-blank line before it
/// names the package (``Updates `x` from ...``, `Bumps [x](...) from ...`).
/// Failing that, the first run whose own content mentions the package is
/// used, which covers grouped notes listing several packages.
///
/// Returns `None` when the body has no `<details>` element or none matches.
#[must_use]
pub fn extract_changelog(body: &str, package: &str) -> Option<String> {
    let runs = find_runs(body);
    if runs.is_empty() {
        return None;
    }

    let matcher = PackageMatcher::new(package);

    for index in 0..runs.len() {
        if run_heading(body, &runs, index).is_some_and(|line| matcher.is_mentioned_in(line)) {
            debug!(package, "Found changelog by heading");
            return Some(body[runs[index].range.clone()].to_string());
        }
    }

    let index = runs
        .iter()
        .position(|run| matcher.is_mentioned_in(&body[run.range.clone()]))?;
    debug!(
        package,
        heading = run_heading(body, &runs, index).unwrap_or_default().trim(),
        "Found changelog by content"
    );
    Some(body[runs[index].range.clone()].to_string())
}

/// The last non-blank line between the previous run and run `index`.
fn run_heading<'a>(body: &'a str, runs: &[DetailsRun], index: usize) -> Option<&'a str> {
    let start = index.checked_sub(1).map_or(0, |previous| runs[previous].range.end);
    body[start..runs[index].range.start]
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
}
