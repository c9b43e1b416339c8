//! GitHub token resolution

use super::AuthSource;
use crate::error::{Error, Result};
use tracing::debug;

/// Environment variables consulted when no token input is given, in order
const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolved GitHub credentials
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Access token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the token: explicit input first, then `GITHUB_TOKEN`, then `GH_TOKEN`
pub fn get_github_auth<F>(input: Option<&str>, lookup: F) -> Result<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = input.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using token from github_token input");
        return Ok(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Input,
        });
    }

    for &var in TOKEN_ENV_VARS {
        if let Some(token) = lookup(var).filter(|t| !t.trim().is_empty()) {
            debug!(var, "using token from environment");
            return Ok(GitHubAuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    Err(Error::Config(
        "missing required input: github_token (or GITHUB_TOKEN / GH_TOKEN)".to_string(),
    ))
}
