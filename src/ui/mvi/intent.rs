//! Marker trait for intents.

/// Something that happened: a user action or the outcome of a request.
///
/// Intents are closed enums so every reducer match is exhaustive.
pub trait Intent: Send + 'static {}
