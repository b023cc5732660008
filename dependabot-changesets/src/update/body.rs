//! Pull request body parsing.
//!
//! Dependabot describes the updates of a PR body in one of two shapes:
//!
//! - a markdown table (`| Package | From | To |`), used by grouped PRs with
//!   several updates;
//! - ``Updates `x` from a to b`` / `Bumps [x](url) from a to b.` lines, used
//!   by single-package PRs and older grouped PRs.
//!
//! [`BodyShape::detect`] probes the body for a table header and dispatches
//! to the matching parser.

use super::markdown::strip_markup;
use super::UpdateTriple;
use regex::Regex;
use std::sync::LazyLock;

/// ``Updates `x` from a to b`` and its `Bumps` variants, one per line.
static UPDATE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*
        (?:[-*+]\s+)?
        (?:updates|bumps?)\s+
        (?:the\s+requirements\s+on\s+)?
        (?P<package>\S+)
        \s+from\s+(?P<from>\S+)
        \s+to\s+(?P<to>\S+)",
    )
    .expect("valid update line regex")
});

/// A markdown table delimiter row: `| --- | :---: |`.
static TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|?\s*:?-+:?\s*(?:\|\s*:?-+:?\s*)*\|?$").expect("valid separator regex")
});

/// Column positions of an update table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Index of the first data row in the body's lines.
    first_row: usize,
    package: usize,
    from: usize,
    to: usize,
}

/// The structural variant of a PR body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// A `Package | From | To` table.
    Table(TableLayout),
    /// One update sentence per line.
    List,
}

impl BodyShape {
    /// Probes `body` for an update table header followed by a delimiter row.
    #[must_use]
    pub fn detect(body: &str) -> Self {
        let lines: Vec<&str> = body.lines().collect();

        for (index, pair) in lines.windows(2).enumerate() {
            let (header, separator) = (pair[0].trim(), pair[1].trim());
            if !header.starts_with('|') || !TABLE_SEPARATOR.is_match(separator) {
                continue;
            }
            if let Some(layout) = header_layout(header, index + 2) {
                return Self::Table(layout);
            }
        }

        Self::List
    }

    /// Runs the parser for this shape over `body`.
    #[must_use]
    pub fn parse(self, body: &str) -> Vec<UpdateTriple> {
        match self {
            Self::Table(layout) => parse_table(body, layout),
            Self::List => parse_list(body),
        }
    }
}

/// Extracts every update described in a PR body, in document order.
///
/// Returns an empty vector when nothing recognizable is present. Duplicate
/// packages are kept.
#[must_use]
pub fn extract_updates(body: &str) -> Vec<UpdateTriple> {
    BodyShape::detect(body).parse(body)
}

fn header_layout(header: &str, first_row: usize) -> Option<TableLayout> {
    let columns: Vec<String> = split_cells(header)
        .iter()
        .map(|cell| strip_markup(cell).to_lowercase())
        .collect();
    let position = |names: &[&str]| columns.iter().position(|c| names.contains(&c.as_str()));

    Some(TableLayout {
        first_row,
        package: position(&["package", "dependency", "dependency name", "name"])?,
        from: position(&["from"])?,
        to: position(&["to"])?,
    })
}

fn parse_table(body: &str, layout: TableLayout) -> Vec<UpdateTriple> {
    body.lines()
        .skip(layout.first_row)
        .map(str::trim)
        .take_while(|line| line.starts_with('|'))
        .filter_map(|row| {
            let cells = split_cells(row);
            let cell = |index: usize| cells.get(index).map(|c| strip_markup(c));
            UpdateTriple::new(cell(layout.package)?, cell(layout.from)?, cell(layout.to)?)
        })
        .collect()
}

fn parse_list(body: &str) -> Vec<UpdateTriple> {
    let mut updates = Vec::new();
    let mut details_depth = 0usize;

    for line in body.lines() {
        let lower = line.to_lowercase();
        let at_top_level = details_depth == 0;
        details_depth += lower.matches("<details").count();
        details_depth = details_depth.saturating_sub(lower.matches("</details").count());

        // Release notes quote upstream "Bump x from a to b" commits.
        if !at_top_level {
            continue;
        }

        let Some(caps) = UPDATE_LINE.captures(line) else {
            continue;
        };
        let update = UpdateTriple::new(
            strip_markup(&caps["package"]),
            clean_version(&caps["from"]),
            clean_version(&caps["to"]),
        );
        updates.extend(update);
    }

    updates
}

/// Versions at the end of a sentence carry its full stop.
fn clean_version(raw: &str) -> String {
    strip_markup(raw.trim_end_matches(['.', ',', ';']))
}

fn split_cells(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}
