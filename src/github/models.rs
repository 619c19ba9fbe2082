//! Wire shapes consumed from the GitHub REST API.
//!
//! Read-only snapshots that live for the duration of one run; nothing here
//! is mutated or persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed pull request, as returned by `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub updated_at: DateTime<Utc>,
    pub head: PullRequestHead,
}

/// Head of a pull request: the branch it was opened from and the commit
/// that branch pointed at when the PR last changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub branch: String,
    pub sha: String,
}

/// A repository branch, as returned by `GET /repos/{owner}/{repo}/branches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchCommit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchCommit {
    pub sha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_request_decodes_from_api_shape() {
        let raw = r#"{
            "number": 42,
            "updated_at": "2026-07-01T12:00:00Z",
            "head": {
                "ref": "feature/cleanup",
                "sha": "1761e021e70d29619ca270046b23bd243f652b98"
            }
        }"#;
        let pr: PullRequest = serde_json::from_str(raw).expect("decode pull request");
        assert_eq!(pr.number, 42);
        assert_eq!(pr.head.branch, "feature/cleanup");
        assert_eq!(pr.head.sha, "1761e021e70d29619ca270046b23bd243f652b98");
    }

    #[test]
    fn branch_decodes_from_api_shape() {
        let raw = r#"{"name": "main", "commit": {"sha": "abc123"}}"#;
        let branch: Branch = serde_json::from_str(raw).expect("decode branch");
        assert_eq!(branch.name, "main");
        assert_eq!(branch.commit.sha, "abc123");
    }
}
