//! Shared test utilities and fake story sources.

#![allow(dead_code, unused_imports)]

pub mod mock_search_api;

use async_trait::async_trait;
use hn_search::config::SearchSettings;
use hn_search::fetch::{FetchError, RequestTarget, StorySource, DEFAULT_ENDPOINT};
use hn_search::story::{Story, StoryId};
use hn_search::ui::stories::StoriesState;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};

pub type Outcome = Result<Vec<Story>, FetchError>;

pub fn story(id: u64, title: &str) -> Story {
    Story {
        id: StoryId::from(id),
        title: title.to_string(),
        url: format!("https://example.com/{}", id),
        author: "someone".to_string(),
        comment_count: id as u32,
        score: id as i64,
    }
}

/// The React and Redux fixture pair.
pub fn react_and_redux() -> Vec<Story> {
    vec![
        Story {
            id: StoryId::from(0),
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            comment_count: 3,
            score: 4,
        },
        Story {
            id: StoryId::from(1),
            title: "Redux".to_string(),
            url: "https://redux.js.org/".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            comment_count: 2,
            score: 5,
        },
    ]
}

pub fn target(term: &str) -> RequestTarget {
    RequestTarget::compose(DEFAULT_ENDPOINT, term)
}

pub fn settings() -> SearchSettings {
    SearchSettings::default()
}

/// Source whose responses are released by the test, one per target.
///
/// A target with no registered responder fails immediately.
#[derive(Default)]
pub struct ScriptedSource {
    pending: Mutex<HashMap<String, oneshot::Receiver<Outcome>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a responder for `target`; send on it to resolve the request.
    pub fn expect(&self, target: &RequestTarget) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(target.as_str().to_string(), rx);
        tx
    }

    /// Targets requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl StorySource for ScriptedSource {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, FetchError> {
        self.requests.lock().push(target.as_str().to_string());
        let responder = self.pending.lock().remove(target.as_str());
        match responder {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Other("responder dropped".to_string()))),
            None => Err(FetchError::Other(format!("unexpected request: {}", target))),
        }
    }
}

/// Source that answers every request immediately with the same stories.
pub struct FixedSource {
    stories: Vec<Story>,
    requests: Mutex<Vec<String>>,
}

impl FixedSource {
    pub fn new(stories: Vec<Story>) -> Arc<Self> {
        Arc::new(Self {
            stories,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl StorySource for FixedSource {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, FetchError> {
        self.requests.lock().push(target.as_str().to_string());
        Ok(self.stories.clone())
    }
}

/// Wait until the view is no longer loading.
pub async fn wait_until_settled(rx: &mut watch::Receiver<StoriesState>) -> StoriesState {
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| !s.is_loading()))
        .await
        .expect("timed out waiting for fetch to settle")
        .expect("store dropped")
        .clone()
}
