//! Authorization policy for merge commands
//!
//! Pure checks over the configured allowlists. Nothing here talks to GitHub.

use crate::error::AuthError;
use tracing::info;

/// The only comment that triggers a merge
pub const MERGE_COMMAND: &str = "/merge";

/// Check that `comment` is the merge command and `actor` may run it.
///
/// An empty `mergers` list means anyone may merge.
pub fn validate_command(comment: &str, mergers: &[String], actor: &str) -> Result<(), AuthError> {
    if comment != MERGE_COMMAND {
        return Err(AuthError::InvalidCommand {
            expected: MERGE_COMMAND.to_string(),
            actual: comment.to_string(),
        });
    }
    if mergers.is_empty() || mergers.iter().any(|m| m == actor) {
        return Ok(());
    }
    Err(AuthError::ActorNotAllowed(actor.to_string()))
}

/// Whether `actor` should approve a blocked PR on its own behalf.
///
/// Unlike [`validate_command`], an empty list grants nothing.
pub fn should_auto_approve(auto_approvers: &[String], actor: &str) -> bool {
    if auto_approvers.is_empty() {
        info!("auto approvers list is empty");
        return false;
    }
    if auto_approvers.iter().any(|a| a == actor) {
        info!(actor, "actor is an auto approver");
        true
    } else {
        info!(actor, ?auto_approvers, "actor is not in the auto approvers list");
        false
    }
}
