//! Auto merge through the `gh` CLI

use crate::error::{Error, Result};
use crate::platform::AutoMergeService;
use crate::types::{MergeCommit, PlatformConfig};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs `gh pr merge --auto` for the configured repository
pub struct GhCli {
    program: String,
    token: String,
    config: PlatformConfig,
}

impl GhCli {
    /// Create a runner for `gh` on `PATH`
    pub fn new(token: &str, config: PlatformConfig) -> Self {
        Self {
            program: "gh".to_string(),
            token: token.to_string(),
            config,
        }
    }

    /// Use a different executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to the executable for `pr_number`
    pub fn auto_merge_args(&self, pr_number: u64, commit: &MergeCommit) -> Vec<String> {
        vec![
            "pr".to_string(),
            "merge".to_string(),
            pr_number.to_string(),
            "--auto".to_string(),
            format!("--{}", commit.method),
            "--subject".to_string(),
            commit.title.clone(),
            "--body".to_string(),
            commit.message.clone(),
            "--repo".to_string(),
            self.config.full_name(),
        ]
    }
}

#[async_trait]
impl AutoMergeService for GhCli {
    async fn enable_auto_merge(&self, pr_number: u64, commit: &MergeCommit) -> Result<()> {
        let args = self.auto_merge_args(pr_number, commit);
        debug!(pr_number, program = %self.program, method = %commit.method, "enabling auto merge");

        let mut command = Command::new(&self.program);
        command.args(&args).env("GH_TOKEN", &self.token);
        if let Some(host) = &self.config.host {
            command.env("GH_HOST", host);
        }

        let output = command
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::AutoMerge(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(Error::AutoMerge(if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr.to_string()
            }));
        }

        debug!(pr_number, "auto merge enabled");
        Ok(())
    }
}
