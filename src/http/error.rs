use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between sending a probe and holding a decoded
/// body. A non-200 status is not an error here.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
