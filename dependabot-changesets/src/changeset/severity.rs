//! Bump severity of a changeset entry.

use super::ParseSeverityError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Semantic-versioning change class written into a changeset's front matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpSeverity {
    /// Backwards compatible bug fixes.
    #[default]
    Patch,
    /// Backwards compatible features.
    Minor,
    /// Breaking changes.
    Major,
}

impl BumpSeverity {
    /// Returns the severity as written in a changeset.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpSeverity {
    type Err = ParseSeverityError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(ParseSeverityError {
                value: value.to_string(),
            }),
        }
    }
}
