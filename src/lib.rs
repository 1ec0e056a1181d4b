//! Keyword search over a Hacker News style story index.
//!
//! The core is the request lifecycle: a [`store::StoryStore`] owning the
//! results view, a [`fetch::FetchController`] that turns one request into
//! lifecycle events, and a [`search::SearchController`] that keeps the
//! persisted search term apart from the submitted request target.
//! [`session::SearchSession`] is the only surface a presentation layer
//! should touch; [`ui`] contains a terminal one.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;
pub mod story;
pub mod ui;
