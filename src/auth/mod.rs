//! Authentication for GitHub
//!
//! Supports the action input and the usual token environment variables.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed as the `github_token` input
    Input,
    /// Token from environment variable
    EnvVar,
}
