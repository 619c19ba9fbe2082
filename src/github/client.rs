//! Blocking GitHub API client.
//!
//! One request in flight at a time; pagination runs until the natural
//! termination signals (short or empty page, recency cutoff) with a hard
//! page ceiling as a backstop against a remote that keeps returning full
//! pages.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Response;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::error::{FreshError, Result};
use crate::github::models::{Branch, PullRequest};
use crate::sweep::BranchHost;

/// Default API root; override with [`GitHubClient::with_base_url`] for
/// GitHub Enterprise hosts or mock servers.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const PAGE_SIZE: usize = 100;
const MAX_PAGES: u32 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GitHubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("fresh/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FreshError::Client)?;
        Ok(Self {
            http,
            base_url: GITHUB_API_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// List closed pull requests no older than `days` days, newest-updated
    /// first. Stops paging at the first pull request past the cutoff: the
    /// listing is sorted descending by update time, so nothing after it can
    /// be inside the window either.
    pub fn list_closed_pull_requests(
        &self,
        user: &str,
        repo: &str,
        days: u32,
    ) -> Result<Vec<PullRequest>> {
        let mut pull_requests = Vec::new();
        let now = Utc::now();
        // Small epsilon keeps a pull request updated exactly on the
        // boundary inside the window.
        let max_age_hours = f64::from(days) * 24.0 + 0.01;

        for page in 1..=MAX_PAGES {
            let response = self
                .get(
                    &format!("repos/{user}/{repo}/pulls"),
                    &[
                        ("state", "closed".to_string()),
                        ("sort", "updated".to_string()),
                        ("direction", "desc".to_string()),
                        ("per_page", PAGE_SIZE.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .map_err(|source| FreshError::Fetch {
                    what: "pull requests",
                    source,
                })?;
            let batch: Vec<PullRequest> = response.json().map_err(|source| FreshError::Decode {
                what: "pull requests",
                source,
            })?;

            debug!(page, count = batch.len(), "fetched pull request page");

            let full_page = batch.len() >= PAGE_SIZE;
            for pr in batch {
                if age_in_hours(now, pr.updated_at) > max_age_hours {
                    return Ok(pull_requests);
                }
                pull_requests.push(pr);
            }

            if !full_page {
                break;
            }
        }

        Ok(pull_requests)
    }

    /// List every branch not covered by branch protection. No recency
    /// filter applies; pagination ends on the first short page.
    pub fn list_unprotected_branches(&self, user: &str, repo: &str) -> Result<Vec<Branch>> {
        let mut branches = Vec::new();

        for page in 1..=MAX_PAGES {
            let response = self
                .get(
                    &format!("repos/{user}/{repo}/branches"),
                    &[
                        ("protected", "false".to_string()),
                        ("per_page", PAGE_SIZE.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .map_err(|source| FreshError::Fetch {
                    what: "branches",
                    source,
                })?;
            let batch: Vec<Branch> = response.json().map_err(|source| FreshError::Decode {
                what: "branches",
                source,
            })?;

            debug!(page, count = batch.len(), "fetched branch page");

            let last_page = batch.len() < PAGE_SIZE;
            branches.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(branches)
    }

    /// Delete one branch ref. The branch name is spliced into the ref path
    /// verbatim; slashes in names like `feature/foo` are part of the ref.
    pub fn delete_branch(&self, user: &str, repo: &str, branch: &str) -> Result<()> {
        let url = format!("{}/repos/{user}/{repo}/git/refs/heads/{branch}", self.base_url);
        self.http
            .delete(url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .and_then(Response::error_for_status)
            .map_err(|source| FreshError::DeleteRequest { source })?;
        Ok(())
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> reqwest::Result<Response> {
        self.http
            .get(format!("{}/{path}", self.base_url))
            .header(AUTHORIZATION, self.auth_header())
            .query(query)
            .send()
            .and_then(Response::error_for_status)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }
}

impl BranchHost for GitHubClient {
    fn list_closed_pull_requests(
        &self,
        user: &str,
        repo: &str,
        days: u32,
    ) -> Result<Vec<PullRequest>> {
        Self::list_closed_pull_requests(self, user, repo, days)
    }

    fn list_unprotected_branches(&self, user: &str, repo: &str) -> Result<Vec<Branch>> {
        Self::list_unprotected_branches(self, user, repo)
    }

    fn delete_branch(&self, user: &str, repo: &str, branch: &str) -> Result<()> {
        Self::delete_branch(self, user, repo, branch)
    }
}

fn age_in_hours(now: DateTime<Utc>, then: DateTime<Utc>) -> f64 {
    (now - then).num_seconds() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn age_is_measured_in_hours() {
        let now = Utc::now();
        let age = age_in_hours(now, now - Duration::hours(36));
        assert!((age - 36.0).abs() < 0.001);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GitHubClient::new("token")
            .expect("build client")
            .with_base_url("http://localhost:9000/");
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
