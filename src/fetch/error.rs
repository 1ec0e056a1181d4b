use thiserror::Error;

/// Why a search request failed.
///
/// The view collapses every variant into the same error flag; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Request to '{target}' failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("Search API returned {status} for '{target}'")]
    Status { target: String, status: u16 },

    /// Body is not a search response.
    #[error("Malformed search response from '{target}': {source}")]
    Malformed {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// Anything else a non-HTTP source wants to report.
    #[error("Search failed: {0}")]
    Other(String),
}
