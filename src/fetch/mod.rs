//! Issuing search requests and turning their outcome into view events.

mod controller;
mod error;
mod source;
mod target;

pub use controller::FetchController;
pub use error::FetchError;
pub use source::{HttpStorySource, StorySource};
pub use target::{RequestTarget, DEFAULT_ENDPOINT};
