//! Binary-level tests: flag surface, validation failures, and a full run
//! against a mock API server via environment configuration.

use assert_cmd::Command;
use chrono::Utc;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

/// A `fresh` command with ambient GitHub configuration stripped, so runs on
/// CI machines (where GITHUB_TOKEN and friends are set) stay hermetic.
fn fresh() -> Command {
    let mut cmd = Command::cargo_bin("fresh").unwrap();
    for var in [
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_FRESH_TOKEN",
        "GITHUB_FRESH_USER",
        "GITHUB_FRESH_REPO",
        "GITHUB_FRESH_DAYS",
        "GITHUB_FRESH_DRY",
        "GITHUB_FRESH_API_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help() {
    fresh()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    fresh()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_user_fails_fast() {
    fresh()
        .args(["--repo", "repo", "--token", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing user"));
}

#[test]
fn test_missing_repo_fails_fast() {
    fresh()
        .args(["--user", "user", "--token", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing repo"));
}

#[test]
fn test_zero_days_rejected() {
    fresh()
        .args(["--user", "user", "--repo", "repo", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for days (0)"));
}

#[test]
fn test_run_configured_from_environment() {
    let server = MockServer::start();
    let now = Utc::now().to_rfc3339();
    let sha = "1761e021e70d29619ca270046b23bd243f652b98";

    let pulls = server.mock(|when, then| {
        when.method(GET).path("/repos/foo/bar/pulls");
        then.status(200).json_body(json!([{
            "number": 1,
            "updated_at": now,
            "head": {"ref": "stalebranch", "sha": sha}
        }]));
    });
    let branches = server.mock(|when, then| {
        when.method(GET).path("/repos/foo/bar/branches");
        then.status(200)
            .json_body(json!([{"name": "stalebranch", "commit": {"sha": sha}}]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/repos/foo/bar/git/refs/heads/stalebranch")
            .header("authorization", "token xyzzy");
        then.status(204);
    });

    fresh()
        .env("GITHUB_REPOSITORY", "foo/bar")
        .env("GITHUB_TOKEN", "xyzzy")
        .env("GITHUB_FRESH_API_URL", server.base_url())
        .assert()
        .success();

    pulls.assert_hits(1);
    branches.assert_hits(1);
    delete.assert_hits(1);
}

#[test]
fn test_dry_flag_suppresses_deletion() {
    let server = MockServer::start();
    let now = Utc::now().to_rfc3339();
    let sha = "abc123";

    server.mock(|when, then| {
        when.method(GET).path("/repos/foo/bar/pulls");
        then.status(200).json_body(json!([{
            "number": 1,
            "updated_at": now,
            "head": {"ref": "stalebranch", "sha": sha}
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/repos/foo/bar/branches");
        then.status(200)
            .json_body(json!([{"name": "stalebranch", "commit": {"sha": sha}}]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/repos/foo/bar/git/refs/heads/stalebranch");
        then.status(204);
    });

    fresh()
        .args(["--user", "foo", "--repo", "bar", "--token", "t", "--dry"])
        .env("GITHUB_FRESH_API_URL", server.base_url())
        .assert()
        .success();

    delete.assert_hits(0);
}
