//! Platform services for GitHub
//!
//! The orchestrator only sees these traits, so the merge flow can run
//! against the real API or a test double.

mod gh_cli;
mod github;

pub use gh_cli::GhCli;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{MergeCommit, MergeResult, PlatformConfig, PullRequestSnapshot};
use async_trait::async_trait;

/// Pull request, review, merge and comment operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch a fresh snapshot of the PR
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestSnapshot>;

    /// Submit an approving review
    async fn approve_pr(&self, pr_number: u64) -> Result<()>;

    /// Merge the PR right away with the given subject, body and method
    async fn merge_pr(&self, pr_number: u64, commit: &MergeCommit) -> Result<MergeResult>;

    /// Create a comment on a PR
    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

/// Deferred merge mechanism, used instead of [`PlatformService::merge_pr`]
/// when auto merge is enabled
#[async_trait]
pub trait AutoMergeService: Send + Sync {
    /// Ask GitHub to merge the PR once its requirements are met
    async fn enable_auto_merge(&self, pr_number: u64, commit: &MergeCommit) -> Result<()>;
}
