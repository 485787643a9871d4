//! Mail error types.

use muse_content::FetchError;
use thiserror::Error;

/// Errors that can occur while validating or sending email.
#[derive(Error, Debug)]
pub enum MailError {
    /// The submitted form is incomplete or malformed.
    #[error("{0}")]
    Validation(String),

    /// No provider API key configured.
    #[error("Mail API key is missing")]
    MissingApiKey,

    /// Transport-level failure.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The provider rejected the message.
    #[error("Mail provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider accepted the message but answered with something unexpected.
    #[error("Unexpected provider response: {0}")]
    UnexpectedResponse(String),
}

impl MailError {
    /// Check if this error came from the submitted input rather than delivery.
    pub fn is_validation(&self) -> bool {
        matches!(self, MailError::Validation(_))
    }
}
