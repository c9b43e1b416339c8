//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{
    Call, CreateCommentCall, MergeCall, MockAutoMerge, MockPlatformService, SharedAutoMerge,
};

use pr_merger::config::MergeRequest;
use pr_merger::types::{MergeMethod, MergeableState, PlatformConfig, PullRequestSnapshot};

/// Config for the `owner/repo` test repository on github.com
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        host: None,
    }
}

/// PR #1 titled "pull request title" with no body or labels
pub fn make_pr(state: MergeableState) -> PullRequestSnapshot {
    make_snapshot(1, "pull request title", "", &[], state, false)
}

/// A PR snapshot with every field spelled out
pub fn make_snapshot(
    number: u64,
    title: &str,
    body: &str,
    labels: &[&str],
    mergeable_state: MergeableState,
    merged: bool,
) -> PullRequestSnapshot {
    PullRequestSnapshot {
        number,
        title: title.to_string(),
        body: body.to_string(),
        labels: labels.iter().map(ToString::to_string).collect(),
        mergeable_state,
        merged,
    }
}

/// A valid `/merge` request for PR #1 by `alice`, anyone may merge
pub fn make_request() -> MergeRequest {
    MergeRequest {
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        pr_number: 1,
        comment: "/merge".to_string(),
        merge_method: MergeMethod::Merge,
        actor: "alice".to_string(),
        mergers: Vec::new(),
        auto_approvers: Vec::new(),
        enable_auto_merge: false,
        git_trailers: Vec::new(),
    }
}

/// Owned list of names
pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
