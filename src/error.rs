//! Error types for pr-merger

use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Why a merge command was rejected before touching the pull request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The triggering comment is not the merge command
    #[error("comment must be {expected}, got {actual}")]
    InvalidCommand {
        /// The command the bot reacts to
        expected: String,
        /// The comment that was actually posted
        actual: String,
    },
    /// The actor is not listed in a non-empty merger allowlist
    #[error("actor {0} is not in mergers list")]
    ActorNotAllowed(String),
}

/// The external call that failed, used as error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fetching the pull request snapshot
    GetPullRequest,
    /// Submitting the approving review
    ApprovePullRequest,
    /// Calling the immediate merge API
    MergePullRequest,
    /// Scheduling a deferred auto merge
    EnableAutoMerge,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetPullRequest => write!(f, "get pull request"),
            Self::ApprovePullRequest => write!(f, "approve pull request"),
            Self::MergePullRequest => write!(f, "merge pull request"),
            Self::EnableAutoMerge => write!(f, "enable auto merge"),
        }
    }
}

/// Errors raised while handling a merge command
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The command or actor is not authorized
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// GitHub API returned an error
    #[error("{0}")]
    GitHubApi(String),

    /// The `gh` CLI could not schedule the auto merge
    #[error("auto merge command failed: {0}")]
    AutoMerge(String),

    /// A failed external call, wrapped with the step it belongs to
    #[error("failed to {step}: {source}")]
    Step {
        /// Which call failed
        step: Step,
        /// The underlying failure
        source: Box<Error>,
    },

    /// The success comment could not be posted
    #[error("failed to send message: {0}")]
    Notification(#[source] Box<Error>),

    /// The failure comment could not be posted either
    #[error("failed to send message: {notify} original: {original}")]
    Report {
        /// Error from posting the comment
        notify: Box<Error>,
        /// The failure the comment was meant to report
        #[source]
        original: Box<Error>,
    },

    /// The invocation did not finish before the deadline
    #[error("merge job timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Generic platform failure (used by test doubles)
    #[error("Platform error: {0}")]
    Platform(String),
}

impl Error {
    /// Wrap this error with the step that produced it
    #[must_use]
    pub fn during(self, step: Step) -> Self {
        Self::Step {
            step,
            source: Box::new(self),
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        // Keep GitHub's own wording; the failure classifier matches on it.
        match err {
            octocrab::Error::GitHub { source, .. } => Self::GitHubApi(source.message),
            other => Self::GitHubApi(other.to_string()),
        }
    }
}
