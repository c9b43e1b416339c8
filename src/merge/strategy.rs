//! Merge strategies: merge now, or let GitHub merge later

use crate::config::MergeRequest;
use crate::error::{Error, Result, Step};
use crate::merge::plan::MergeOutcome;
use crate::platform::{AutoMergeService, PlatformService};
use crate::types::MergeCommit;
use async_trait::async_trait;

/// A way of merging a PR once its commit has been built
#[async_trait]
pub trait MergeStrategy: Send + Sync {
    /// Step reported when [`merge`](Self::merge) fails
    fn step(&self) -> Step;

    /// Merge (or schedule the merge of) `pr_number`
    async fn merge(
        &self,
        platform: &dyn PlatformService,
        pr_number: u64,
        commit: &MergeCommit,
    ) -> Result<MergeOutcome>;
}

/// Merge through the merge API right away
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateMerge;

#[async_trait]
impl MergeStrategy for ImmediateMerge {
    fn step(&self) -> Step {
        Step::MergePullRequest
    }

    async fn merge(
        &self,
        platform: &dyn PlatformService,
        pr_number: u64,
        commit: &MergeCommit,
    ) -> Result<MergeOutcome> {
        let result = platform.merge_pr(pr_number, commit).await?;
        if !result.merged {
            return Err(Error::GitHubApi(
                result
                    .message
                    .unwrap_or_else(|| "pull request was not merged".to_string()),
            ));
        }
        Ok(MergeOutcome::Merged { sha: result.sha })
    }
}

/// Enable auto merge and leave the merge to GitHub
pub struct DeferredAutoMerge {
    service: Box<dyn AutoMergeService>,
}

impl DeferredAutoMerge {
    /// Schedule merges through `service`
    pub fn new(service: Box<dyn AutoMergeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MergeStrategy for DeferredAutoMerge {
    fn step(&self) -> Step {
        Step::EnableAutoMerge
    }

    async fn merge(
        &self,
        _platform: &dyn PlatformService,
        pr_number: u64,
        commit: &MergeCommit,
    ) -> Result<MergeOutcome> {
        self.service.enable_auto_merge(pr_number, commit).await?;
        Ok(MergeOutcome::AutoMergeEnabled)
    }
}

/// Pick the strategy `request` asks for
pub fn select_strategy(
    request: &MergeRequest,
    auto_merge: Box<dyn AutoMergeService>,
) -> Box<dyn MergeStrategy> {
    if request.enable_auto_merge {
        Box::new(DeferredAutoMerge::new(auto_merge))
    } else {
        Box::new(ImmediateMerge)
    }
}
