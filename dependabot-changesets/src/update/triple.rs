//! Dependency update record.

use serde::Serialize;

/// A single dependency version change recovered from a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTriple {
    /// Package identifier, possibly scoped (e.g. `@scope/name`).
    pub package: String,

    /// Version before the update, as written in the source text.
    pub from: String,

    /// Version after the update, as written in the source text.
    pub to: String,

    /// Release notes fragment (`<details>` blocks) for this package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
}

impl UpdateTriple {
    /// Creates an update without a changelog.
    ///
    /// Returns `None` when any of the three parts is empty.
    #[must_use]
    pub fn new(
        package: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Option<Self> {
        let (package, from, to) = (package.into(), from.into(), to.into());
        if package.is_empty() || from.is_empty() || to.is_empty() {
            return None;
        }
        Some(Self {
            package,
            from,
            to,
            changelog: None,
        })
    }

    /// Attaches a changelog fragment, dropping empty ones.
    #[must_use]
    pub fn with_changelog(mut self, changelog: Option<String>) -> Self {
        self.changelog = changelog.filter(|c| !c.trim().is_empty());
        self
    }
}
