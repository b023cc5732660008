#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod changelog;
pub mod changeset;
pub mod pull_request;
pub mod runner;
pub mod summary;
pub mod update;

pub use changelog::extract_changelog;
pub use changeset::{
    extract_changeset_update, generate_changeset, get_changeset_name, BumpSeverity,
    ChangesetStore, FsChangesetStore, ParseSeverityError, StoreError,
};
pub use pull_request::{FetchError, GitHubPullRequests, PullRequestSource, PullRequestText};
pub use runner::{select_updates, Runner, RunnerConfig, RunnerError, DEFAULT_CHANGESET_DIR};
pub use summary::{ChangesetResult, RunSummary, UpdateSource};
pub use update::{
    extract_update_from_title, extract_updates, is_grouped_pr, BodyShape, UpdateTriple,
};
