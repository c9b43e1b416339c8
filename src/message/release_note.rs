//! Release-note extraction from PR bodies

use regex::Regex;
use std::sync::LazyLock;

/// Release note used when the PR body does not provide one
pub const NO_RELEASE_NOTE: &str = "NONE";

static RELEASE_NOTE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```release-note\r?\n(.*?)\r?\n```").expect("release-note pattern is valid")
});

/// Split a PR body into `(description, release_note)`.
///
/// Only the first fenced `release-note` block is consumed. It is cut out of
/// the description when its trimmed content is non-empty; otherwise the body
/// is returned untouched together with [`NO_RELEASE_NOTE`].
pub fn split_release_note(body: &str) -> (String, String) {
    if let Some(caps) = RELEASE_NOTE_BLOCK.captures(body) {
        let note = caps[1].trim();
        if !note.is_empty() {
            let block = caps.get(0).map_or(0..0, |m| m.range());
            let mut description = String::with_capacity(body.len() - block.len());
            description.push_str(&body[..block.start]);
            description.push_str(&body[block.end..]);
            return (description, note.to_string());
        }
    }
    (body.to_string(), NO_RELEASE_NOTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_block_is_left_in_place() {
        let body = "desc\n```release-note\n   \n```";
        let (description, note) = split_release_note(body);
        assert_eq!(description, body);
        assert_eq!(note, NO_RELEASE_NOTE);
    }

    #[test]
    fn crlf_bodies_are_supported() {
        let (description, note) =
            split_release_note("desc\r\n```release-note\r\nFixed a crash\r\n```\r\nmore");
        assert_eq!(description, "desc\r\n\r\nmore");
        assert_eq!(note, "Fixed a crash");
    }

    #[test]
    fn multi_line_note_is_kept_whole() {
        let (_, note) = split_release_note("```release-note\nline one\nline two\n```");
        assert_eq!(note, "line one\nline two");
    }

    #[test]
    fn only_first_block_is_consumed() {
        let body = "```release-note\nfirst\n```\n```release-note\nsecond\n```";
        let (description, note) = split_release_note(body);
        assert_eq!(note, "first");
        assert_eq!(description, "\n```release-note\nsecond\n```");
    }
}
