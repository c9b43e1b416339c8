//! Merge commit message composition
//!
//! Builds the commit subject and body from a [`PullRequestSnapshot`] and the
//! configured trailers. Everything here is pure.
//!
//! The body layout is consumed by release tooling that scrapes the
//! `release-note` block back out of commit messages, so the exact
//! separators matter:
//!
//! ````text
//! Co-authored-by: abema
//!
//! ---
//! Labels:
//!   * bug
//! ---
//! Fix the frobnicator
//! ---
//! ```release-note
//! NONE
//! ```
//! ````

mod release_note;
mod trailer;

pub use release_note::{NO_RELEASE_NOTE, split_release_note};
pub use trailer::{GitTrailer, parse_trailers};

use crate::types::PullRequestSnapshot;

const SEPARATOR: &str = "---";

/// Parsed pieces of a merge commit body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitBody {
    /// PR body with the release-note block removed
    pub description: String,
    /// PR labels, in PR order
    pub labels: Vec<String>,
    /// Release note, or [`NO_RELEASE_NOTE`]
    pub release_note: String,
    /// Trailers, in configured order
    pub trailers: Vec<GitTrailer>,
}

impl CommitBody {
    /// Build the body for `pr` with the raw `Key=Value` trailers
    pub fn new<S: AsRef<str>>(pr: &PullRequestSnapshot, trailers: &[S]) -> Self {
        let (description, release_note) = split_release_note(&pr.body);
        Self {
            description,
            labels: pr.labels.clone(),
            release_note,
            trailers: parse_trailers(trailers),
        }
    }
}

impl std::fmt::Display for CommitBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for trailer in &self.trailers {
            writeln!(f, "{trailer}")?;
        }
        if !self.trailers.is_empty() || self.labels.is_empty() {
            writeln!(f)?;
        }
        if !self.labels.is_empty() {
            writeln!(f, "{SEPARATOR}")?;
            writeln!(f, "Labels:")?;
            for label in &self.labels {
                writeln!(f, "  * {label}")?;
            }
        }
        writeln!(f, "{SEPARATOR}")?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f, "{SEPARATOR}")?;
        write!(f, "```release-note\n{}\n```", self.release_note)
    }
}

/// Render the merge commit body for `pr`
pub fn compose<S: AsRef<str>>(pr: &PullRequestSnapshot, trailers: &[S]) -> String {
    CommitBody::new(pr, trailers).to_string()
}

/// Merge commit subject: `"{title} (#{number})"`
pub fn commit_subject(pr: &PullRequestSnapshot) -> String {
    format!("{} (#{})", pr.title, pr.number)
}
