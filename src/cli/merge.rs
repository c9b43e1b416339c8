//! Merge command - authorize, merge and report

use crate::cli::context::CommandContext;
use pr_merger::config::{Config, Inputs};
use pr_merger::error::Result;
use pr_merger::merge::{MergeOutcome, run_merge_command};
use pr_merger::policy::validate_command;
use tracing::info;

/// Run the merge command for the given inputs
pub async fn run_merge(inputs: Inputs) -> Result<MergeOutcome> {
    let config = Config::from_inputs(inputs)?;

    // Reject early, before a client is built.
    let request = &config.request;
    validate_command(&request.comment, &request.mergers, &request.actor)?;

    let ctx = CommandContext::new(config)?;
    let outcome = run_merge_command(
        &ctx.config.request,
        ctx.platform.as_ref(),
        ctx.strategy.as_ref(),
    )
    .await?;

    info!(?outcome, "merge command finished");
    Ok(outcome)
}
