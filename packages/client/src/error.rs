//! Client error definitions.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors returned by the HTTP client and the room watcher
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Base URL cannot be parsed or cannot carry a path
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Server answered 401
    #[error("Unauthorized: check the auth token")]
    Unauthorized,

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl From<tungstenite::Error> for ClientError {
    fn from(err: tungstenite::Error) -> Self {
        ClientError::WebSocket(Box::new(err))
    }
}
