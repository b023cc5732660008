//! CLI for Dependabot Changesets.
//!
//! Reads a Dependabot pull request and writes one changeset per dependency
//! update. Every flag can also be supplied through the `INPUT_*` variables
//! GitHub Actions sets for action inputs.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use dependabot_changesets::{
    BumpSeverity, RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_CHANGESET_DIR,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Dependabot Changesets - Generate changesets from Dependabot pull requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository owner.
    #[arg(long, env = "INPUT_OWNER")]
    owner: String,

    /// Repository name.
    #[arg(long, env = "INPUT_REPO")]
    repo: String,

    /// Pull request number.
    #[arg(long, env = "INPUT_PR-NUMBER")]
    pr_number: u64,

    /// GitHub token with read access to pull requests.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: String,

    /// Append the release notes Dependabot embeds to each changeset.
    #[arg(
        long,
        env = "INPUT_INCLUDE-CHANGELOG",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    include_changelog: bool,

    /// Package named in the changeset front matter (defaults to the repository name).
    #[arg(long, env = "INPUT_PACKAGE-NAME")]
    package_name: Option<String>,

    /// Bump severity written into each changeset.
    #[arg(long, env = "INPUT_BUMP", default_value = "patch")]
    bump: BumpSeverity,

    /// Directory changesets are written to.
    #[arg(long, env = "INPUT_CHANGESET-DIR", default_value = DEFAULT_CHANGESET_DIR)]
    changeset_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to generate changesets");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(build_config(args))?;
    runner.run().await
}

fn build_config(args: Args) -> RunnerConfig {
    let mut config = RunnerConfig::new(args.owner, args.repo, args.pr_number, args.token)
        .with_include_changelog(args.include_changelog)
        .with_severity(args.bump)
        .with_changeset_dir(args.changeset_dir);
    if let Some(package_name) = args.package_name {
        config = config.with_package_name(package_name);
    }
    config
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Pull request: #{}", summary.pr_number);
    println!(
        "  Kind: {}",
        if summary.grouped { "Grouped" } else { "Single" }
    );
    if let Some(source) = summary.source {
        println!("  Updates read from: {}", source.as_str());
    }
    println!("  Updates found: {}", summary.updates_found);
    println!("  Changesets written: {}", summary.changesets_written());
    println!("  Changelogs attached: {}", summary.changelogs_attached());
    if summary.overwrites() > 0 {
        println!("  Overwritten: {}", summary.overwrites());
    }

    for changeset in &summary.changesets {
        println!("    {} -> {}", changeset.package, changeset.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT_VARS: [&str; 8] = [
        "INPUT_OWNER",
        "INPUT_REPO",
        "INPUT_PR-NUMBER",
        "INPUT_TOKEN",
        "INPUT_INCLUDE-CHANGELOG",
        "INPUT_PACKAGE-NAME",
        "INPUT_BUMP",
        "INPUT_CHANGESET-DIR",
    ];

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        temp_env::with_vars_unset(INPUT_VARS, || {
            Args::try_parse_from(std::iter::once("dependabot-changesets").chain(args.iter().copied()))
        })
    }

    #[test]
    fn parses_flags_with_defaults() {
        let args = parse(&[
            "--owner",
            "test-owner",
            "--repo",
            "test-repo",
            "--pr-number",
            "123",
            "--token",
            "test-token",
        ])
        .unwrap();

        assert_eq!(args.pr_number, 123);
        assert!(!args.include_changelog);
        assert_eq!(args.bump, BumpSeverity::Patch);
        assert_eq!(args.changeset_dir, PathBuf::from(".changeset"));

        let config = build_config(args);
        assert_eq!(config.target_name(), "test-repo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn accepts_boolish_changelog_flag() {
        let base = [
            "--owner", "o", "--repo", "r", "--pr-number", "1", "--token", "t",
        ];

        let bare = parse(&[&base[..], &["--include-changelog"][..]].concat()).unwrap();
        assert!(bare.include_changelog);

        let yes = parse(&[&base[..], &["--include-changelog", "yes"][..]].concat()).unwrap();
        assert!(yes.include_changelog);

        let off = parse(&[&base[..], &["--include-changelog", "false"][..]].concat()).unwrap();
        assert!(!off.include_changelog);
    }

    #[test]
    fn reads_action_inputs_from_env() {
        let args = temp_env::with_vars(
            [
                ("INPUT_OWNER", Some("test-owner")),
                ("INPUT_REPO", Some("test-repo")),
                ("INPUT_PR-NUMBER", Some("42")),
                ("INPUT_TOKEN", Some("test-token")),
                ("INPUT_INCLUDE-CHANGELOG", Some("true")),
                ("INPUT_BUMP", Some("minor")),
                ("INPUT_PACKAGE-NAME", None),
                ("INPUT_CHANGESET-DIR", None),
            ],
            || Args::try_parse_from(["dependabot-changesets"]),
        )
        .unwrap();

        assert_eq!(args.owner, "test-owner");
        assert_eq!(args.pr_number, 42);
        assert!(args.include_changelog);
        assert_eq!(args.bump, BumpSeverity::Minor);
        assert_eq!(args.package_name, None);
    }

    #[test]
    fn rejects_missing_required_inputs() {
        assert!(parse(&["--owner", "o", "--repo", "r", "--pr-number", "1"]).is_err());
        assert!(parse(&[
            "--owner", "o", "--repo", "r", "--pr-number", "1", "--token", "t", "--bump", "huge",
        ])
        .is_err());
    }
}
