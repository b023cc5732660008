//! Runner configuration.

use super::RunnerError;
use crate::changeset::BumpSeverity;
use std::path::{Path, PathBuf};

/// Default directory changesets are written to.
pub const DEFAULT_CHANGESET_DIR: &str = ".changeset";

/// Configuration for a single changeset generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository owner (user or organization).
    owner: String,
    /// Repository name.
    repo: String,
    /// Pull request number.
    pr_number: u64,
    /// GitHub token used to read the pull request.
    token: String,
    /// Whether release notes are appended to each changeset.
    include_changelog: bool,
    /// Name written into the changeset front matter.
    package_name: Option<String>,
    /// Severity written into the changeset front matter.
    severity: BumpSeverity,
    /// Directory changesets are written to.
    changeset_dir: PathBuf,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(owner: String, repo: String, pr_number: u64, token: String) -> Self {
        Self {
            owner,
            repo,
            pr_number,
            token,
            include_changelog: false,
            package_name: None,
            severity: BumpSeverity::default(),
            changeset_dir: PathBuf::from(DEFAULT_CHANGESET_DIR),
        }
    }

    /// Sets whether release notes are appended to changesets.
    pub fn with_include_changelog(mut self, include_changelog: bool) -> Self {
        self.include_changelog = include_changelog;
        self
    }

    /// Sets the changeset target name. Defaults to the repository name.
    pub fn with_package_name(mut self, package_name: String) -> Self {
        self.package_name = Some(package_name);
        self
    }

    /// Sets the bump severity.
    pub fn with_severity(mut self, severity: BumpSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the changeset directory.
    pub fn with_changeset_dir(mut self, changeset_dir: PathBuf) -> Self {
        self.changeset_dir = changeset_dir;
        self
    }

    /// Checks that every required input is present.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingInput`] naming the first absent input.
    pub fn validate(&self) -> Result<(), RunnerError> {
        let missing = |name: &'static str| Err(RunnerError::MissingInput { name });

        if self.owner.trim().is_empty() {
            return missing("owner");
        }
        if self.repo.trim().is_empty() {
            return missing("repo");
        }
        if self.pr_number == 0 {
            return missing("pr-number");
        }
        if self.token.trim().is_empty() {
            return missing("token");
        }
        Ok(())
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the pull request number.
    pub fn pr_number(&self) -> u64 {
        self.pr_number
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether release notes are appended to changesets.
    pub fn include_changelog(&self) -> bool {
        self.include_changelog
    }

    /// Returns the changeset target name, falling back to the repository name.
    pub fn target_name(&self) -> &str {
        self.package_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.repo)
    }

    /// Returns the bump severity.
    pub fn severity(&self) -> BumpSeverity {
        self.severity
    }

    /// Returns the changeset directory.
    pub fn changeset_dir(&self) -> &Path {
        &self.changeset_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunnerConfig {
        RunnerConfig::new(
            "test-owner".to_string(),
            "test-repo".to_string(),
            123,
            "test-token".to_string(),
        )
    }

    #[test]
    fn applies_defaults() {
        let config = config();
        assert!(!config.include_changelog());
        assert_eq!(config.severity(), BumpSeverity::Patch);
        assert_eq!(config.changeset_dir(), Path::new(".changeset"));
        assert_eq!(config.target_name(), "test-repo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn prefers_explicit_package_name() {
        let config = config().with_package_name("@acme/app".to_string());
        assert_eq!(config.target_name(), "@acme/app");

        let config = config.with_package_name("  ".to_string());
        assert_eq!(config.target_name(), "test-repo");
    }

    #[test]
    fn reports_missing_inputs() {
        let cases = [
            (RunnerConfig::new(String::new(), "r".into(), 1, "t".into()), "owner"),
            (RunnerConfig::new("o".into(), " ".into(), 1, "t".into()), "repo"),
            (RunnerConfig::new("o".into(), "r".into(), 0, "t".into()), "pr-number"),
            (RunnerConfig::new("o".into(), "r".into(), 1, String::new()), "token"),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(RunnerError::MissingInput { name }) => assert_eq!(name, expected),
                other => panic!("expected missing {expected}, got {other:?}"),
            }
        }
    }
}
