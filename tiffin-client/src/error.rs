//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every variant renders as a plain message suitable for direct display; raw
/// errors never cross the view boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure: unreachable backend, timeout, bad transport
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Authentication required or token rejected (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Bad credentials, bad OTP, duplicate signup
    #[error("{0}")]
    Auth(String),

    /// Missing or malformed request fields, client-side precondition failures
    #[error("{0}")]
    Validation(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (409)
    #[error("Already exists: {0}")]
    Conflict(String),

    /// Cart push/pull failure
    #[error("Sync failed: {0}")]
    Sync(String),

    /// Response did not match the expected envelope/shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend-side failure (5xx)
    #[error("Server error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Displayable message string for the view layer
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
