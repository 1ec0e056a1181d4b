use std::fmt;

use url::form_urlencoded;

/// Algolia's Hacker News search endpoint; the term is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Fully composed URL for one search request.
///
/// Only rebuilt on submit, never on keystrokes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTarget(String);

impl RequestTarget {
    /// `endpoint` followed by the form-encoded `term`.
    pub fn compose(endpoint: &str, term: &str) -> Self {
        let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
        Self(format!("{}{}", endpoint, encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
