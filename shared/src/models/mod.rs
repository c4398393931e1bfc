//! Data models
//!
//! Shared between the client and the backend (via API). The backend speaks
//! camelCase JSON, so wire-facing structs carry `rename_all = "camelCase"`.

pub mod cart;
pub mod group;
pub mod invite;
pub mod menu;
pub mod order;
pub mod table;
pub mod user;
pub mod weather;

// Re-exports
pub use cart::*;
pub use group::*;
pub use invite::*;
pub use menu::*;
pub use order::*;
pub use table::*;
pub use user::*;
pub use weather::*;
