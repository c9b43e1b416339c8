//! Merge engine
//!
//! Three-phase pattern:
//! 1. Plan - decisions over a PR snapshot (pure, testable)
//! 2. Strategy - immediate merge or deferred auto merge
//! 3. Execute - approve, merge and report (effectful)

mod execute;
mod plan;
mod strategy;

pub use execute::{
    JOB_TIMEOUT, approve_if_blocked, execute_merge, report_result, run_merge_command,
    run_merge_command_within,
};
pub use plan::{
    ApprovalDecision, MergeOutcome, Phase, build_merge_commit, plan_auto_approve,
};
pub use strategy::{DeferredAutoMerge, ImmediateMerge, MergeStrategy, select_strategy};
