//! Stale branch detection and reconciliation.
//!
//! A branch is stale when its current head commit equals the head commit
//! recorded on a recently closed pull request of the same name. Comparing
//! the commit, not just the name, keeps a branch alive once anything new
//! has been pushed to it since the pull request closed.

use std::collections::HashMap;

use tracing::info;

use crate::error::{FreshError, Result};
use crate::github::models::{Branch, PullRequest};

/// The remote platform operations the sweep depends on. Implemented by
/// [`crate::github::GitHubClient`]; tests substitute in-memory hosts.
pub trait BranchHost {
    fn list_closed_pull_requests(
        &self,
        user: &str,
        repo: &str,
        days: u32,
    ) -> Result<Vec<PullRequest>>;

    fn list_unprotected_branches(&self, user: &str, repo: &str) -> Result<Vec<Branch>>;

    fn delete_branch(&self, user: &str, repo: &str, branch: &str) -> Result<()>;
}

/// Find branches of recently closed pull requests and delete them.
/// Returns the number of branches deleted.
pub fn run(host: &dyn BranchHost, user: &str, repo: &str, days: u32, dry: bool) -> Result<usize> {
    if user.is_empty() {
        return Err(FreshError::Validation("missing user".to_string()));
    }
    if repo.is_empty() {
        return Err(FreshError::Validation("missing repo".to_string()));
    }
    if days < 1 {
        return Err(FreshError::Validation(format!(
            "invalid value for days ({days})"
        )));
    }

    let pull_requests = host.list_closed_pull_requests(user, repo, days)?;
    let branches = host.list_unprotected_branches(user, repo)?;
    let stale = stale_branches(&branches, &pull_requests);
    let deleted = delete_branches(host, user, repo, &stale, dry)?;
    info!("deleted {deleted} branches");
    Ok(deleted)
}

/// Correlate branches with closed pull requests into the list of branch
/// names eligible for deletion, in pull-request order. Pure; a name may
/// appear twice when two pull requests share the same head.
#[must_use]
pub fn stale_branches(branches: &[Branch], pull_requests: &[PullRequest]) -> Vec<String> {
    let by_name: HashMap<&str, &Branch> =
        branches.iter().map(|b| (b.name.as_str(), b)).collect();

    let mut stale = Vec::new();
    for pr in pull_requests {
        if let Some(branch) = by_name.get(pr.head.branch.as_str()) {
            if branch.commit.sha == pr.head.sha {
                stale.push(branch.name.clone());
            }
        }
    }

    stale
}

/// Delete the named branches in order. In dry mode nothing is contacted and
/// the deleted count stays zero. In live mode the first failure stops the
/// batch; the error carries the failing branch name and how many deletions
/// completed before it.
pub fn delete_branches(
    host: &dyn BranchHost,
    user: &str,
    repo: &str,
    branches: &[String],
    dry: bool,
) -> Result<usize> {
    let mut deleted = 0;

    for branch in branches {
        if dry {
            info!("would delete branch {branch}");
            continue;
        }

        host.delete_branch(user, repo, branch)
            .map_err(|source| FreshError::Delete {
                branch: branch.clone(),
                deleted,
                source: Box::new(source),
            })?;

        info!("deleted branch {branch}");
        deleted += 1;
    }

    Ok(deleted)
}
