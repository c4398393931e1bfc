//! User Model

use serde::{Deserialize, Serialize};

/// Registered diner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Emoji or asset key rendered next to the name
    pub avatar: String,
    /// Accent color assigned at signup
    pub color: String,
}

/// Admin panel operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub role: String,
}
