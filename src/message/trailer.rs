//! Git trailer parsing

/// A single `Key: Value` commit trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTrailer {
    /// Trailer key, e.g. `Co-authored-by`
    pub key: String,
    /// Trailer value
    pub value: String,
}

impl GitTrailer {
    /// Parse a `Key=Value` entry, splitting on the first `=`.
    ///
    /// Returns `None` when there is no `=`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (key, value) = raw.split_once('=')?;
        Some(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl std::fmt::Display for GitTrailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Parse configured trailers, silently dropping malformed entries
pub fn parse_trailers<S: AsRef<str>>(raw: &[S]) -> Vec<GitTrailer> {
    raw.iter()
        .filter_map(|entry| GitTrailer::parse(entry.as_ref()))
        .collect()
}
