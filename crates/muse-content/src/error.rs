//! Content client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

/// Errors raised by a content source.
#[derive(Error, Debug)]
pub enum ContentFetchError {
    /// No API token configured.
    #[error("CMS API token is missing")]
    MissingToken,

    /// Transport-level failure.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The CMS answered with GraphQL errors.
    #[error("CMS query failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response did not have the expected structure.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for ContentFetchError {
    fn from(e: serde_json::Error) -> Self {
        ContentFetchError::UnexpectedShape(e.to_string())
    }
}
