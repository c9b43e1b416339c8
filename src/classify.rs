//! Failure classification for the result comment
//!
//! GitHub does not return a typed error for some merge gates, so known
//! failures are recognised by their message text. Unknown errors pass
//! through verbatim.

use crate::error::Error;
use regex::Regex;
use std::sync::LazyLock;

/// Comment posted when there is nothing to report
pub const SUCCEEDED: &str = "Succeeded!";

/// `(pattern, template)` pairs; the template may refer to captures as `$1`.
const PATTERNS: &[(&str, &str)] = &[(
    r"At least (\d+) approving review is required by reviewers with write access",
    "Need $1 approving review",
)];

static CLASSIFIERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|(pattern, template)| {
            (
                Regex::new(pattern).expect("classifier pattern is valid"),
                *template,
            )
        })
        .collect()
});

/// Turn an error into the message posted on the PR
pub fn classify(err: Option<&Error>) -> String {
    let Some(err) = err else {
        return SUCCEEDED.to_string();
    };
    classify_message(&err.to_string())
}

/// Classify raw error text
pub fn classify_message(text: &str) -> String {
    for (pattern, template) in CLASSIFIERS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let mut message = String::new();
            caps.expand(template, &mut message);
            return message;
        }
    }
    text.to_string()
}
