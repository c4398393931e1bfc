//! Cart Model
//!
//! The cart is the in-progress list of menu selections, partitioned by which
//! member added each item (`added_by`).

use serde::{Deserialize, Serialize};

/// Dietary classification, `"veg"` / `"non-veg"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Veg,
    NonVeg,
}

/// One cart line
///
/// Invariant: `quantity >= 1` while the item is present; a quantity update to
/// zero or below removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Menu item id
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub diet: DietType,
    /// User id of the member who added the line
    pub added_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CartItem {
    /// Line subtotal
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Push payload for a member's portion of the group order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub items: Vec<CartItem>,
    pub user_id: String,
}
