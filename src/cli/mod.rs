//! Command line entry point

mod context;
mod merge;

pub use merge::run_merge;

use clap::Parser;
use pr_merger::config::Inputs;

/// Merge a pull request in response to a `/merge` comment
#[derive(Parser, Debug)]
#[command(name = "merger", version, about = "Merge pull requests from a /merge comment")]
pub struct Cli {
    /// Action inputs (flags or `INPUT_*` variables)
    #[command(flatten)]
    pub inputs: Inputs,
}
