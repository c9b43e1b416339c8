//! Merge execution - effectful operations
//!
//! Runs the merge flow against a [`PlatformService`]: optional
//! auto-approve, merge through the selected [`MergeStrategy`], then a
//! result comment. Calls are sequential and never retried.

use crate::classify::classify;
use crate::config::MergeRequest;
use crate::error::{Error, Result, Step};
use crate::merge::plan::{
    ApprovalDecision, MergeOutcome, Phase, build_merge_commit, plan_auto_approve,
};
use crate::merge::strategy::MergeStrategy;
use crate::platform::PlatformService;
use crate::policy::{should_auto_approve, validate_command};
use std::time::Duration;
use tracing::{info, warn};

/// Deadline for a whole invocation
pub const JOB_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Approve `pr_number` if it is open and blocked
pub async fn approve_if_blocked(
    platform: &dyn PlatformService,
    pr_number: u64,
) -> Result<ApprovalDecision> {
    info!(phase = %Phase::AutoApproveCheck, pr_number, "checking whether the PR is blocked");
    let pr = platform
        .get_pull_request(pr_number)
        .await
        .map_err(|e| e.during(Step::GetPullRequest))?;

    let decision = plan_auto_approve(&pr);
    match decision {
        ApprovalDecision::AlreadyMerged => info!(pr_number, "PR is already merged"),
        ApprovalDecision::NotBlocked(state) => {
            info!(pr_number, mergeable_state = %state, "PR is not blocked");
        }
        ApprovalDecision::Approve => {
            info!(pr_number, "approving blocked PR");
            platform
                .approve_pr(pr_number)
                .await
                .map_err(|e| e.during(Step::ApprovePullRequest))?;
        }
    }
    Ok(decision)
}

/// Auto-approve when the actor qualifies, then merge
///
/// The PR is fetched again for the merge so the commit reflects its state
/// after any approval.
pub async fn execute_merge(
    request: &MergeRequest,
    platform: &dyn PlatformService,
    strategy: &dyn MergeStrategy,
) -> Result<MergeOutcome> {
    if should_auto_approve(&request.auto_approvers, &request.actor) {
        approve_if_blocked(platform, request.pr_number).await?;
    }

    info!(phase = %Phase::Merging, pr_number = request.pr_number, "merging");
    let pr = platform
        .get_pull_request(request.pr_number)
        .await
        .map_err(|e| e.during(Step::GetPullRequest))?;
    let commit = build_merge_commit(&pr, request);

    strategy
        .merge(platform, request.pr_number, &commit)
        .await
        .map_err(|e| e.during(strategy.step()))
}

/// Post the outcome of `result` on the PR and pass it on
///
/// A failure is classified before posting and then returned unchanged. If
/// the comment itself cannot be posted, both errors are returned.
pub async fn report_result(
    platform: &dyn PlatformService,
    pr_number: u64,
    result: Result<MergeOutcome>,
) -> Result<MergeOutcome> {
    info!(phase = %Phase::Notifying, pr_number, "posting result");
    match result {
        Ok(outcome) => {
            let message = outcome.success_message(pr_number);
            platform
                .create_pr_comment(pr_number, &message)
                .await
                .map_err(|e| Error::Notification(Box::new(e)))?;
            info!(phase = %Phase::Done, pr_number, "{message}");
            Ok(outcome)
        }
        Err(err) => {
            let message = classify(Some(&err));
            warn!(phase = %Phase::Failed, pr_number, error = %err, "merge failed");
            if let Err(notify) = platform.create_pr_comment(pr_number, &message).await {
                return Err(Error::Report {
                    notify: Box::new(notify),
                    original: Box::new(err),
                });
            }
            Err(err)
        }
    }
}

/// Handle one merge command end to end within [`JOB_TIMEOUT`]
pub async fn run_merge_command(
    request: &MergeRequest,
    platform: &dyn PlatformService,
    strategy: &dyn MergeStrategy,
) -> Result<MergeOutcome> {
    run_merge_command_within(request, platform, strategy, JOB_TIMEOUT).await
}

/// [`run_merge_command`] with an explicit deadline
///
/// Authorization failures return before any platform call and post nothing.
pub async fn run_merge_command_within(
    request: &MergeRequest,
    platform: &dyn PlatformService,
    strategy: &dyn MergeStrategy,
    deadline: Duration,
) -> Result<MergeOutcome> {
    info!(
        phase = %Phase::Start,
        owner = %request.owner,
        repo = %request.repo,
        pr_number = request.pr_number,
        actor = %request.actor,
        method = %request.merge_method,
        auto_merge = request.enable_auto_merge,
        "handling merge command"
    );
    validate_command(&request.comment, &request.mergers, &request.actor)?;

    let flow = async {
        let result = execute_merge(request, platform, strategy).await;
        report_result(platform, request.pr_number, result).await
    };

    tokio::time::timeout(deadline, flow)
        .await
        .unwrap_or(Err(Error::Timeout(deadline)))
}
