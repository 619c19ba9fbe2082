//! Command-line interface definition.
//!
//! Flag resolution is deliberately thin here: flags that map 1:1 onto a
//! single environment variable use clap's `env` fallback, while knobs with
//! multi-variable precedence (token, user/repo, days, dry) are resolved in
//! [`crate::config`].

use clap::Parser;

/// Delete stale branches of recently closed GitHub pull requests.
#[derive(Parser, Debug)]
#[command(name = "fresh", version, about)]
pub struct Cli {
    /// GitHub API token (GITHUB_FRESH_TOKEN, GITHUB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub user or organization owning the repository (GITHUB_FRESH_USER)
    #[arg(long)]
    pub user: Option<String>,

    /// GitHub repository name (GITHUB_FRESH_REPO)
    #[arg(long)]
    pub repo: Option<String>,

    /// Max age in days of checked pull requests (GITHUB_FRESH_DAYS)
    #[arg(long)]
    pub days: Option<u32>,

    /// Log deletions without performing them (GITHUB_FRESH_DRY)
    #[arg(long)]
    pub dry: bool,

    /// GitHub API base URL (GITHUB_FRESH_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
