use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::HttpSettings;
use crate::story::{SearchResponse, Story};

use super::error::FetchError;
use super::target::RequestTarget;

/// Where search results come from.
///
/// [`HttpStorySource`] talks to the real API; tests plug in scripted
/// sources to control when and how each request resolves.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Issue exactly one request against `target`. No retries.
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, FetchError>;
}

/// HTTP GET against the composed request target.
pub struct HttpStorySource {
    client: Client,
}

impl HttpStorySource {
    pub fn new(settings: &HttpSettings) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(concat!("hn-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build search client");

        Self { client }
    }
}

impl Default for HttpStorySource {
    fn default() -> Self {
        Self::new(&HttpSettings::default())
    }
}

#[async_trait]
impl StorySource for HttpStorySource {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, FetchError> {
        let transport = |source| FetchError::Transport {
            target: target.to_string(),
            source,
        };

        let response = self
            .client
            .get(target.as_str())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                target: target.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let parsed = SearchResponse::from_slice(&body).map_err(|source| FetchError::Malformed {
            target: target.to_string(),
            source,
        })?;

        Ok(parsed.hits)
    }
}
