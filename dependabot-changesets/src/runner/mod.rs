//! Orchestrates changeset generation for one pull request.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CHANGESET_DIR};
pub use error::RunnerError;

use crate::changelog::extract_changelog;
use crate::changeset::{
    extract_changeset_update, generate_changeset, get_changeset_name, ChangesetStore,
    FsChangesetStore,
};
use crate::pull_request::{GitHubPullRequests, PullRequestSource, PullRequestText};
use crate::summary::{ChangesetResult, RunSummary, UpdateSource};
use crate::update::{extract_update_from_title, extract_updates, is_grouped_pr, UpdateTriple};
use tracing::{debug, info, info_span, warn, Instrument};

/// Turns one Dependabot pull request into changeset files.
pub struct Runner {
    config: RunnerConfig,
    source: Box<dyn PullRequestSource>,
    store: Box<dyn ChangesetStore>,
}

impl Runner {
    /// Builds a runner reading from GitHub and writing to the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingInput`] before any network access when a
    /// required input is absent, or an error if the GitHub client cannot be
    /// built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let source = GitHubPullRequests::with_token(config.token())?;
        Ok(Self {
            config,
            source: Box::new(source),
            store: Box::new(FsChangesetStore),
        })
    }

    /// Builds a runner over the given collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingInput`] when a required input is absent.
    pub fn with_collaborators(
        config: RunnerConfig,
        source: impl PullRequestSource + 'static,
        store: impl ChangesetStore + 'static,
    ) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self {
            config,
            source: Box::new(source),
            store: Box::new(store),
        })
    }

    /// Fetches the pull request and writes one changeset per update.
    ///
    /// A PR with no recognizable update yields an empty summary, not an
    /// error. When two updates map to the same file the later one wins.
    ///
    /// # Errors
    ///
    /// Fetch and store failures are returned unchanged. Changesets written
    /// before a store failure stay on disk.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let span = info_span!(
            "run",
            repo = %format!("{}/{}", self.config.owner(), self.config.repo()),
            pr_number = self.config.pr_number()
        );

        async {
            info!("Fetching pull request");
            let pr = self
                .source
                .fetch_pull_request(
                    self.config.owner(),
                    self.config.repo(),
                    self.config.pr_number(),
                )
                .await?;

            let grouped = is_grouped_pr(&pr.title);
            let mut summary = RunSummary::new(self.config.pr_number(), grouped);
            let (source, updates) = select_updates(&pr, grouped);

            if updates.is_empty() {
                warn!(title = %pr.title, "No dependency updates found");
                return Ok(summary);
            }

            info!(
                count = updates.len(),
                source = source.as_str(),
                grouped,
                "Found dependency updates"
            );
            summary.source = Some(source);
            summary.updates_found = updates.len();

            for update in updates {
                let result = self.write_update(&pr.body, update).await?;
                summary.record_result(result);
            }

            Ok(summary)
        }
        .instrument(span)
        .await
    }

    async fn write_update(
        &self,
        body: &str,
        update: UpdateTriple,
    ) -> Result<ChangesetResult, RunnerError> {
        let update = if self.config.include_changelog() {
            let changelog = extract_changelog(body, &update.package);
            if changelog.is_none() {
                debug!(package = %update.package, "No changelog found");
            }
            update.with_changelog(changelog)
        } else {
            update
        };

        let path = self
            .config
            .changeset_dir()
            .join(get_changeset_name(&update.package));

        // Only feeds the overwrite warning; an unreadable file is replaced.
        let previous = match self.store.read_changeset(&path).await {
            Ok(previous) => previous.as_deref().and_then(extract_changeset_update),
            Err(error) => {
                warn!(path = %path.display(), %error, "Could not read existing changeset");
                None
            }
        };
        let overwrote_other_update = previous
            .as_ref()
            .is_some_and(|previous| !same_change(previous, &update));
        if let Some(previous) = previous.filter(|_| overwrote_other_update) {
            warn!(
                path = %path.display(),
                previous = %format!("{} {} -> {}", previous.package, previous.from, previous.to),
                "Overwriting changeset for a different update"
            );
        }

        let content = generate_changeset(self.config.target_name(), self.config.severity(), &update);
        self.store.write_changeset(&path, &content).await?;

        info!(
            package = %update.package,
            from = %update.from,
            to = %update.to,
            path = %path.display(),
            "Wrote changeset"
        );

        Ok(ChangesetResult {
            package: update.package,
            path,
            changelog_attached: update.changelog.is_some(),
            overwrote_other_update,
        })
    }
}

/// Chooses where updates are read from.
///
/// Grouped titles go straight to the body. Other titles are parsed first and
/// fall back to the body when they do not match.
#[must_use]
pub fn select_updates(pr: &PullRequestText, grouped: bool) -> (UpdateSource, Vec<UpdateTriple>) {
    if !grouped {
        if let Some(update) = extract_update_from_title(&pr.title) {
            return (UpdateSource::Title, vec![update]);
        }
        debug!(title = %pr.title, "Title not recognized, reading body");
    }

    (UpdateSource::Body, extract_updates(&pr.body))
}

fn same_change(a: &UpdateTriple, b: &UpdateTriple) -> bool {
    a.package == b.package && a.from == b.from && a.to == b.to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(title: &str, body: &str) -> PullRequestText {
        PullRequestText {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn prefers_title_for_single_updates() {
        let pr = pr(
            "Bump nanoid from 3.3.6 to 3.3.8",
            "Updates `svelte` from 4.2.3 to 4.2.4",
        );
        let (source, updates) = select_updates(&pr, false);
        assert_eq!(source, UpdateSource::Title);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].package, "nanoid");
    }

    #[test]
    fn reads_body_for_grouped_prs() {
        let pr = pr(
            "Bump the dev group with 2 updates",
            "Updates `svelte` from 4.2.3 to 4.2.4\nUpdates `wrangler` from 3.15.0 to 3.16.0\n",
        );
        let (source, updates) = select_updates(&pr, true);
        assert_eq!(source, UpdateSource::Body);
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn falls_back_to_body_for_unrecognized_titles() {
        let pr = pr(
            "Bump @auth/core and @auth/sveltekit",
            "Updates `@auth/core` from 0.18.0 to 0.18.1\nUpdates `@auth/sveltekit` from 0.3.11 to 0.3.12\n",
        );
        let (source, updates) = select_updates(&pr, false);
        assert_eq!(source, UpdateSource::Body);
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn compares_changes_without_changelog() {
        let a = UpdateTriple::new("svelte", "4.2.3", "4.2.4").unwrap();
        let b = a.clone().with_changelog(Some("<details></details>".to_string()));
        assert!(same_change(&a, &b));
        assert!(!same_change(&a, &UpdateTriple::new("svelte", "4.2.3", "4.2.5").unwrap()));
    }
}
