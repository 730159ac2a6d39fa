//! Nexmo call client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallError {
    #[error("Originator must be numeric or a valid UTF-8 string")]
    InvalidOriginator,

    #[error("No HTTP transport available")]
    TransportUnavailable,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty response from Nexmo")]
    EmptyResponse,
}

impl CallError {
    /// True when the service answered but the body could not be used.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CallError::Json(_) | CallError::EmptyResponse)
    }
}
