//! GitHub REST API surface: wire models and the blocking client.

pub mod client;
pub mod models;

pub use client::{GITHUB_API_URL, GitHubClient};
pub use models::{Branch, PullRequest};
