//! Shared command context
//!
//! Turns validated configuration into the services the merge flow needs.

use pr_merger::config::Config;
use pr_merger::error::Result;
use pr_merger::merge::{MergeStrategy, select_strategy};
use pr_merger::platform::{GhCli, GitHubService, PlatformService};

/// Everything one merge command runs against
pub struct CommandContext {
    /// Validated configuration
    pub config: Config,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// Immediate or deferred merge, per configuration
    pub strategy: Box<dyn MergeStrategy>,
}

impl CommandContext {
    /// Build the GitHub client and pick the merge strategy
    pub fn new(config: Config) -> Result<Self> {
        let request = &config.request;
        let platform = GitHubService::new(
            &config.auth.token,
            request.owner.clone(),
            request.repo.clone(),
            config.api_url.as_ref().map(url::Url::as_str),
        )?;
        let gh = GhCli::new(&config.auth.token, platform.config().clone());
        let strategy = select_strategy(request, Box::new(gh));

        Ok(Self {
            config,
            platform: Box::new(platform),
            strategy,
        })
    }
}
