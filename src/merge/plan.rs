//! Merge planning - pure functions for the merge flow
//!
//! Every decision the orchestrator makes from a PR snapshot lives here, so
//! it can be unit tested without a platform.

use crate::config::MergeRequest;
use crate::message::{commit_subject, compose};
use crate::types::{MergeCommit, MergeableState, PullRequestSnapshot};

/// Phases of a single merge invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Configuration loaded, nothing called yet
    Start,
    /// Checking whether the actor should approve a blocked PR
    AutoApproveCheck,
    /// Building the commit and merging
    Merging,
    /// Posting the result comment
    Notifying,
    /// Finished successfully
    Done,
    /// Finished with an error
    Failed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::AutoApproveCheck => write!(f, "auto-approve-check"),
            Self::Merging => write!(f, "merging"),
            Self::Notifying => write!(f, "notifying"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What the auto-approve check decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    /// Submit an approving review
    Approve,
    /// Nothing to do, the PR is already merged
    AlreadyMerged,
    /// Nothing to do, the PR is not blocked
    NotBlocked(MergeableState),
}

/// Approve only an unmerged PR whose merge is blocked
pub fn plan_auto_approve(pr: &PullRequestSnapshot) -> ApprovalDecision {
    if pr.merged {
        ApprovalDecision::AlreadyMerged
    } else if pr.mergeable_state != MergeableState::Blocked {
        ApprovalDecision::NotBlocked(pr.mergeable_state)
    } else {
        ApprovalDecision::Approve
    }
}

/// Subject, body and method for merging `pr` as requested
pub fn build_merge_commit(pr: &PullRequestSnapshot, request: &MergeRequest) -> MergeCommit {
    MergeCommit {
        title: commit_subject(pr),
        message: compose(pr, &request.git_trailers),
        method: request.merge_method,
    }
}

/// How the merge concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merged right away
    Merged {
        /// SHA of the merge commit, when GitHub reports one
        sha: Option<String>,
    },
    /// Auto merge scheduled; GitHub merges once checks pass
    AutoMergeEnabled,
}

impl MergeOutcome {
    /// Comment posted on success
    pub fn success_message(&self, pr_number: u64) -> String {
        match self {
            Self::Merged { .. } => format!("Merged PR #{pr_number} successfully!"),
            Self::AutoMergeEnabled => {
                format!("Enabled auto merge #{pr_number} \nIf CI fails, fix problems and retry.")
            }
        }
    }
}
