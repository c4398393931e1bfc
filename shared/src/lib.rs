//! Shared types for the Tiffin booking platform
//!
//! Common types used by the client crate and the mock backend: data models,
//! API response envelope and request/response DTOs.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::ApiResponse;
