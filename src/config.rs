//! Invocation configuration
//!
//! Inputs arrive the way GitHub Actions passes them: as `INPUT_*`
//! environment variables holding plain strings. [`Inputs`] captures them
//! (or the equivalent flags) and [`Config::from_inputs`] turns them into a
//! single validated value that is handed to every component.

use crate::auth::{GitHubAuthConfig, get_github_auth};
use crate::error::{Error, Result};
use crate::types::MergeMethod;
use clap::Args;
use url::Url;

/// API URL used when `GITHUB_API_URL` is unset
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Raw, unvalidated inputs
#[derive(Args, Debug, Clone, Default)]
pub struct Inputs {
    /// Token used for the GitHub API and the gh CLI
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Repository owner
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, env = "INPUT_REPO")]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(long, env = "INPUT_PR_NUMBER")]
    pub pr_number: Option<String>,

    /// Body of the triggering comment
    #[arg(long, env = "INPUT_COMMENT")]
    pub comment: Option<String>,

    /// merge, squash or rebase
    #[arg(long, env = "INPUT_MERGE_METHOD")]
    pub merge_method: Option<String>,

    /// Users allowed to merge (comma separated; empty allows everyone)
    #[arg(long, env = "INPUT_MERGERS")]
    pub mergers: Option<String>,

    /// Users whose merge request also approves a blocked PR
    #[arg(long, env = "INPUT_AUTO_APPROVERS")]
    pub auto_approvers: Option<String>,

    /// User who posted the comment
    #[arg(long, env = "INPUT_GITHUB_ACTOR")]
    pub github_actor: Option<String>,

    /// Enable auto merge instead of merging right away
    #[arg(long, env = "INPUT_ENABLE_AUTO_MERGE")]
    pub enable_auto_merge: Option<String>,

    /// `Key=Value` trailers appended to the commit message
    #[arg(long, env = "INPUT_GIT_TRAILERS")]
    pub git_trailers: Option<String>,

    /// GitHub API base URL (GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

/// One merge command, as requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number
    pub pr_number: u64,
    /// Body of the triggering comment
    pub comment: String,
    /// How to merge
    pub merge_method: MergeMethod,
    /// User who posted the comment
    pub actor: String,
    /// Merger allowlist (empty = anyone)
    pub mergers: Vec<String>,
    /// Auto-approver allowlist (empty = nobody)
    pub auto_approvers: Vec<String>,
    /// Schedule auto merge instead of merging immediately
    pub enable_auto_merge: bool,
    /// Raw `Key=Value` trailers
    pub git_trailers: Vec<String>,
}

/// Validated configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// What to merge and how
    pub request: MergeRequest,
    /// API credentials
    pub auth: GitHubAuthConfig,
    /// Custom API base URL, `None` for github.com
    pub api_url: Option<Url>,
}

impl Config {
    /// Validate raw inputs, resolving the token from the process environment
    pub fn from_inputs(inputs: Inputs) -> Result<Self> {
        Self::from_inputs_with(inputs, |key| std::env::var(key).ok())
    }

    /// Validate raw inputs with an explicit environment lookup
    pub fn from_inputs_with<F>(inputs: Inputs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth = get_github_auth(inputs.github_token.as_deref(), lookup)?;

        let pr_number = required("pr_number", inputs.pr_number)?;
        let pr_number = match pr_number.parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(Error::Config(format!(
                    "pr_number must be a positive integer, got {pr_number}"
                )));
            }
        };

        let merge_method = match non_empty(inputs.merge_method) {
            Some(method) => method.parse()?,
            None => MergeMethod::default(),
        };

        let request = MergeRequest {
            owner: required("owner", inputs.owner)?,
            repo: required("repo", inputs.repo)?,
            pr_number,
            comment: required("comment", inputs.comment)?,
            merge_method,
            actor: required("github_actor", inputs.github_actor)?,
            mergers: split_list(inputs.mergers.as_deref()),
            auto_approvers: split_list(inputs.auto_approvers.as_deref()),
            enable_auto_merge: parse_bool(
                "enable_auto_merge",
                inputs.enable_auto_merge.as_deref(),
            )?,
            git_trailers: split_list(inputs.git_trailers.as_deref()),
        };

        Ok(Self {
            request,
            auth,
            api_url: parse_api_url(inputs.api_url.as_deref())?,
        })
    }

    /// Host name of a custom API URL
    pub fn host(&self) -> Option<String> {
        self.api_url
            .as_ref()
            .and_then(|url| url.host_str().map(ToString::to_string))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    non_empty(value).ok_or_else(|| Error::Config(format!("missing required input: {name}")))
}

/// Split a comma or newline separated list, dropping blank entries
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool> {
    match value.map(str::trim).unwrap_or_default() {
        "" => Ok(false),
        v if v.eq_ignore_ascii_case("true") || v == "1" || v.eq_ignore_ascii_case("yes") => {
            Ok(true)
        }
        v if v.eq_ignore_ascii_case("false") || v == "0" || v.eq_ignore_ascii_case("no") => {
            Ok(false)
        }
        other => Err(Error::Config(format!(
            "{name} must be true or false, got {other}"
        ))),
    }
}

fn parse_api_url(value: Option<&str>) -> Result<Option<Url>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if raw.trim_end_matches('/') == DEFAULT_API_URL {
        return Ok(None);
    }
    Url::parse(raw)
        .map(Some)
        .map_err(|e| Error::Config(format!("invalid api_url {raw}: {e}")))
}
