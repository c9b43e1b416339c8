//! Core types for pr-merger

use crate::error::Error;
use serde::Deserialize;
use std::str::FromStr;

/// Repository coordinates the platform services operate on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom API host (None for github.com)
    pub host: Option<String>,
}

impl PlatformConfig {
    /// `owner/repo`, as accepted by `gh --repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// GitHub's `mergeable_state` for a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeableState {
    /// Head branch is behind the base branch
    Behind,
    /// A gate such as required reviews blocks the merge
    Blocked,
    /// Mergeable with passing checks
    Clean,
    /// Merge conflicts
    Dirty,
    /// Draft PR
    Draft,
    /// Mergeable with passing checks and pre-receive hooks
    HasHooks,
    /// Mergeable with failing checks
    Unstable,
    /// GitHub has not computed the state (or sent one we do not know)
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MergeableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Behind => "behind",
            Self::Blocked => "blocked",
            Self::Clean => "clean",
            Self::Dirty => "dirty",
            Self::Draft => "draft",
            Self::HasHooks => "has_hooks",
            Self::Unknown => "unknown",
            Self::Unstable => "unstable",
        };
        write!(f, "{s}")
    }
}

/// Read-only view of the pull request, fetched fresh for every step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body (empty when the PR has no description)
    pub body: String,
    /// Label names in the order GitHub returns them
    pub labels: Vec<String>,
    /// Current mergeable state
    pub mergeable_state: MergeableState,
    /// Whether the PR is already merged
    pub merged: bool,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMethod {
    /// Create a merge commit
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Squash => write!(f, "squash"),
            Self::Merge => write!(f, "merge"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

impl FromStr for MergeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            other => Err(Error::Config(format!(
                "merge method must be one of merge, squash, rebase; got {other}"
            ))),
        }
    }
}

/// Everything a merge strategy needs to produce the merge commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommit {
    /// Commit subject, `"{title} (#{number})"`
    pub title: String,
    /// Composed commit body
    pub message: String,
    /// How to integrate the PR
    pub method: MergeMethod,
}

/// Result of an immediate merge call
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}
