//! API Response types
//!
//! Every backend endpoint answers with the same envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "message": "OK",
//!     "data": { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (absent on errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Create a successful response with a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Message text, or an empty string
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Empty data payload for endpoints that only acknowledge
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Empty {}
