//! Pull request retrieval.

mod error;

pub use error::FetchError;

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info_span, Instrument};

/// The text of a pull request the updates are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestText {
    /// PR title.
    pub title: String,

    /// PR body in markdown. Empty when the PR has no description.
    pub body: String,
}

/// Source of pull request text.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Fetches the title and body of pull request `number` in `owner/repo`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the PR cannot be retrieved.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestText, FetchError>;
}

/// Fetches pull requests through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubPullRequests {
    octocrab: Octocrab,
}

impl GitHubPullRequests {
    /// Wraps an authenticated GitHub client.
    #[must_use]
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_token(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl PullRequestSource for GitHubPullRequests {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestText, FetchError> {
        let span = info_span!("fetch_pull_request", repo = %format!("{owner}/{repo}"), number);

        async {
            let pr = self.octocrab.pulls(owner, repo).get(number).await?;
            debug!(title = ?pr.title, "Fetched pull request");

            Ok(PullRequestText {
                title: pr.title.unwrap_or_default(),
                body: pr.body.unwrap_or_default(),
            })
        }
        .instrument(span)
        .await
    }
}
