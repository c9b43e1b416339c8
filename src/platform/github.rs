//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    MergeCommit, MergeMethod, MergeResult, MergeableState, PlatformConfig, PullRequestSnapshot,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

// Only the fields the merge flow reads; `mergeable_state` maps onto our own
// enum so unknown values become `Unknown`.

#[derive(Deserialize)]
struct RawPullRequest {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    labels: Vec<RawLabel>,
    #[serde(default)]
    mergeable_state: Option<MergeableState>,
    #[serde(default)]
    merged: Option<bool>,
}

#[derive(Deserialize)]
struct RawLabel {
    name: String,
}

impl From<RawPullRequest> for PullRequestSnapshot {
    fn from(pr: RawPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
            mergeable_state: pr.mergeable_state.unwrap_or_default(),
            merged: pr.merged.unwrap_or(false),
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `base_url` overrides the API root (GitHub Enterprise, test servers).
    pub fn new(token: &str, owner: String, repo: String, base_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let host = if let Some(url) = base_url {
            builder = builder
                .base_uri(url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            url::Url::parse(url)
                .ok()
                .and_then(|u| u.host_str().map(ToString::to_string))
        } else {
            None
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config: PlatformConfig { owner, repo, host },
        })
    }

    fn pull_route(&self, pr_number: u64) -> String {
        format!(
            "/repos/{}/{}/pulls/{pr_number}",
            self.config.owner, self.config.repo
        )
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequestSnapshot> {
        debug!(pr_number, "getting pull request");

        let pr: RawPullRequest = self
            .client
            .get(self.pull_route(pr_number), None::<&()>)
            .await?;
        let snapshot = PullRequestSnapshot::from(pr);

        debug!(
            pr_number,
            merged = snapshot.merged,
            mergeable_state = %snapshot.mergeable_state,
            "got pull request"
        );
        Ok(snapshot)
    }

    async fn approve_pr(&self, pr_number: u64) -> Result<()> {
        debug!(pr_number, "creating approving review");
        let _: serde_json::Value = self
            .client
            .post(
                format!("{}/reviews", self.pull_route(pr_number)),
                Some(&serde_json::json!({ "event": "APPROVE" })),
            )
            .await?;
        debug!(pr_number, "approved pull request");
        Ok(())
    }

    async fn merge_pr(&self, pr_number: u64, commit: &MergeCommit) -> Result<MergeResult> {
        debug!(pr_number, method = %commit.method, "merging PR");

        let octocrab_method = match commit.method {
            MergeMethod::Squash => octocrab::params::pulls::MergeMethod::Squash,
            MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
            MergeMethod::Rebase => octocrab::params::pulls::MergeMethod::Rebase,
        };

        let result = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .merge(pr_number)
            .method(octocrab_method)
            .title(commit.title.clone())
            .message(commit.message.clone())
            .send()
            .await?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }

    async fn create_pr_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!(pr_number, "creating PR comment");
        let route = format!(
            "/repos/{}/{}/issues/{pr_number}/comments",
            self.config.owner, self.config.repo
        );
        let _: serde_json::Value = self
            .client
            .post(route, Some(&serde_json::json!({ "body": body })))
            .await?;
        debug!(pr_number, "created PR comment");
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
