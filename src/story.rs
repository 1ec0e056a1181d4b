//! Story records returned by the remote search index.
//!
//! The wire shape follows the Algolia Hacker News API: a top-level object
//! with a `hits` array whose elements carry `objectID`, `title`, `url`,
//! `author`, `num_comments` and `points`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque, stable identifier of a story.
///
/// The live API sends `objectID` as a string while older payloads and
/// fixtures use integers. Both forms map onto the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for StoryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => StoryId(text),
            RawId::Unsigned(n) => StoryId(n.to_string()),
            RawId::Signed(n) => StoryId(n.to_string()),
        })
    }
}

/// A single search result. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: StoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(rename = "num_comments", default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(rename = "points", default, deserialize_with = "null_as_default")]
    pub score: i64,
}

/// Response envelope of the search endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

impl SearchResponse {
    /// Parse a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

// Ask-HN and job posts come back with `"url": null` and friends.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
