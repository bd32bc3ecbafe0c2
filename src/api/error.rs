//! Errors raised by the request builders

use thiserror::Error;

use crate::api::client::RestError;

/// Errors that can occur while building or sending an IMS request
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was missing or blank; no request was sent
    #[error("Expect Error: {0}")]
    Validation(String),

    /// The REST client failed; passed through unchanged
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ApiError {
    /// Whether the error was raised before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
