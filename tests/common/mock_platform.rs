//! Mock platform services for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_merger::error::{Error, Result};
use pr_merger::platform::{AutoMergeService, PlatformService};
use pr_merger::types::{MergeCommit, MergeResult, PlatformConfig, PullRequestSnapshot};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Call record for `merge_pr` and `enable_auto_merge`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub pr_number: u64,
    pub commit: MergeCommit,
}

/// Call record for `create_pr_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Every platform call, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetPullRequest(u64),
    Approve(u64),
    Merge(u64),
    Comment(u64),
}

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Queued PR snapshots (one per fetch, the last one repeats)
/// - Call tracking for verification
/// - Error injection for failure path testing
/// - Optional delay to exercise the deadline
pub struct MockPlatformService {
    config: PlatformConfig,
    snapshots: Mutex<VecDeque<PullRequestSnapshot>>,
    merge_response: Mutex<MergeResult>,
    delay: Mutex<Option<Duration>>,
    // Call tracking
    calls: Mutex<Vec<Call>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    comment_calls: Mutex<Vec<CreateCommentCall>>,
    // Error injection
    error_on_get_pr: Mutex<Option<String>>,
    error_on_approve: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
    error_on_comment: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            snapshots: Mutex::new(VecDeque::new()),
            merge_response: Mutex::new(MergeResult {
                merged: true,
                sha: Some("merged_sha".to_string()),
                message: Some("Pull Request successfully merged".to_string()),
            }),
            delay: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            comment_calls: Mutex::new(Vec::new()),
            error_on_get_pr: Mutex::new(None),
            error_on_approve: Mutex::new(None),
            error_on_merge: Mutex::new(None),
            error_on_comment: Mutex::new(None),
        }
    }

    // === Response setup ===

    /// Queue a snapshot for the next `get_pull_request`
    pub fn push_snapshot(&self, pr: PullRequestSnapshot) {
        self.snapshots.lock().unwrap().push_back(pr);
    }

    /// Set the response for `merge_pr`
    pub fn set_merge_response(&self, result: MergeResult) {
        *self.merge_response.lock().unwrap() = result;
    }

    /// Sleep this long inside every call
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    // === Error injection methods ===

    /// Make `get_pull_request` return an error
    pub fn fail_get_pr(&self, msg: &str) {
        *self.error_on_get_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `approve_pr` return an error
    pub fn fail_approve(&self, msg: &str) {
        *self.error_on_approve.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr_comment` return an error
    pub fn fail_comment(&self, msg: &str) {
        *self.error_on_comment.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// All `merge_pr` calls
    pub fn get_merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// All `create_pr_comment` calls
    pub fn get_comment_calls(&self) -> Vec<CreateCommentCall> {
        self.comment_calls.lock().unwrap().clone()
    }

    /// Bodies of all posted comments
    pub fn comment_bodies(&self) -> Vec<String> {
        self.get_comment_calls()
            .into_iter()
            .map(|c| c.body)
            .collect()
    }

    /// Whether an approving review was submitted
    pub fn approved(&self) -> bool {
        self.calls().iter().any(|c| matches!(c, Call::Approve(_)))
    }

    /// Assert that nothing at all was called
    pub fn assert_untouched(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "Expected no platform calls but got: {calls:?}");
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn pause(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn injected(slot: &Mutex<Option<String>>) -> Result<()> {
        match slot.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::Platform(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestSnapshot> {
        self.record(Call::GetPullRequest(pr_number));
        self.pause().await;
        Self::injected(&self.error_on_get_pr)?;

        let mut snapshots = self.snapshots.lock().unwrap();
        let snapshot = if snapshots.len() > 1 {
            snapshots.pop_front()
        } else {
            snapshots.front().cloned()
        };
        snapshot.ok_or_else(|| {
            Error::Platform(format!(
                "get_pull_request: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn approve_pr(&self, pr_number: u64) -> Result<()> {
        self.record(Call::Approve(pr_number));
        self.pause().await;
        Self::injected(&self.error_on_approve)
    }

    async fn merge_pr(&self, pr_number: u64, commit: &MergeCommit) -> Result<MergeResult> {
        self.record(Call::Merge(pr_number));
        self.merge_calls.lock().unwrap().push(MergeCall {
            pr_number,
            commit: commit.clone(),
        });
        self.pause().await;
        Self::injected(&self.error_on_merge)?;
        Ok(self.merge_response.lock().unwrap().clone())
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.record(Call::Comment(pr_number));
        self.comment_calls.lock().unwrap().push(CreateCommentCall {
            pr_number,
            body: body.to_string(),
        });
        Self::injected(&self.error_on_comment)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// Recording stand-in for the `gh` CLI
#[derive(Default)]
pub struct MockAutoMerge {
    calls: Mutex<Vec<MergeCall>>,
    error: Mutex<Option<String>>,
}

impl MockAutoMerge {
    /// Make `enable_auto_merge` return an error
    pub fn fail(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    /// All `enable_auto_merge` calls
    pub fn get_calls(&self) -> Vec<MergeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AutoMergeService for MockAutoMerge {
    async fn enable_auto_merge(&self, pr_number: u64, commit: &MergeCommit) -> Result<()> {
        self.calls.lock().unwrap().push(MergeCall {
            pr_number,
            commit: commit.clone(),
        });
        match self.error.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::AutoMerge(msg.clone())),
            None => Ok(()),
        }
    }
}

/// Shares a [`MockAutoMerge`] with the strategy that owns it
pub struct SharedAutoMerge(pub Arc<MockAutoMerge>);

#[async_trait]
impl AutoMergeService for SharedAutoMerge {
    async fn enable_auto_merge(&self, pr_number: u64, commit: &MergeCommit) -> Result<()> {
        self.0.enable_auto_merge(pr_number, commit).await
    }
}
