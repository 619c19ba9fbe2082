//! Runtime configuration resolution.
//!
//! Produces a plain [`Config`] from command-line flags and the environment.
//! Precedence per knob: explicit flag, then tool-specific environment
//! variables, then the fallbacks GitHub Actions provides. The rest of the
//! crate consumes the resolved struct and never touches the environment.

use crate::cli::Cli;
use crate::github::GITHUB_API_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub user: String,
    pub repo: String,
    pub days: u32,
    pub dry: bool,
    pub api_url: String,
}

impl Config {
    /// Resolve configuration from `cli` and the process environment.
    #[must_use]
    pub fn resolve(cli: &Cli) -> Self {
        Self::resolve_from(cli, |name| {
            std::env::var(name).ok().filter(|value| !value.is_empty())
        })
    }

    /// Resolution against an injected variable lookup. Unit tests pass a
    /// map-backed closure instead of mutating the process environment.
    fn resolve_from(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        // GITHUB_REPOSITORY carries "owner/name" inside GitHub Actions and
        // fills both fields unless overridden by a flag.
        let (repo_user, repo_name) = match env("GITHUB_REPOSITORY").as_deref().and_then(split_repository) {
            Some((owner, name)) => (Some(owner), Some(name)),
            None => (None, None),
        };

        let token = cli
            .token
            .clone()
            .or_else(|| env("GITHUB_FRESH_TOKEN"))
            .or_else(|| env("GITHUB_TOKEN"))
            .unwrap_or_default();

        let user = cli
            .user
            .clone()
            .or(repo_user)
            .or_else(|| env("GITHUB_FRESH_USER"))
            .unwrap_or_default();

        let repo = cli
            .repo
            .clone()
            .or(repo_name)
            .or_else(|| env("GITHUB_FRESH_REPO"))
            .unwrap_or_default();

        // Unparsable GITHUB_FRESH_DAYS / GITHUB_FRESH_DRY values are
        // ignored, not fatal.
        let days = cli.days.unwrap_or_else(|| {
            env("GITHUB_FRESH_DAYS")
                .and_then(|value| value.parse().ok())
                .filter(|days| *days > 0)
                .unwrap_or(1)
        });

        let dry = cli.dry
            || env("GITHUB_FRESH_DRY")
                .and_then(|value| value.parse().ok())
                .unwrap_or(false);

        let api_url = cli
            .api_url
            .clone()
            .or_else(|| env("GITHUB_FRESH_API_URL"))
            .unwrap_or_else(|| GITHUB_API_URL.to_string());

        Self {
            token,
            user,
            repo,
            days,
            dry,
            api_url,
        }
    }
}

fn split_repository(repository: &str) -> Option<(String, String)> {
    let (owner, name) = repository.split_once('/')?;
    if owner.is_empty() || name.is_empty() {
        return None;
    }
    Some((owner.to_string(), name.to_string()))
}
