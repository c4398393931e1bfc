//! Order Model
//!
//! Server-derived aggregation of all members' cart items for a group. The
//! backend recomputes it on every fetch; the client never caches it past the
//! sync cooldown window.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// Service charge applied to the item total
pub const SERVICE_CHARGE_RATE: f64 = 0.10;
/// Tax applied to the item total
pub const TAX_RATE: f64 = 0.18;

/// Group order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub group_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub total_amount: f64,
    pub service_charge: f64,
    pub tax: f64,
    pub final_amount: f64,
    pub status: String,
}

impl Order {
    /// Build an order from items, computing charges
    pub fn compute(id: impl Into<String>, group_id: impl Into<String>, items: Vec<CartItem>) -> Self {
        let total_amount: f64 = items.iter().map(CartItem::subtotal).sum();
        let service_charge = total_amount * SERVICE_CHARGE_RATE;
        let tax = total_amount * TAX_RATE;
        Self {
            id: id.into(),
            group_id: group_id.into(),
            items,
            total_amount,
            service_charge,
            tax,
            final_amount: total_amount + service_charge + tax,
            status: "pending".to_string(),
        }
    }

    /// Per-member subtotals, keyed by user id
    pub fn member_subtotals(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for item in &self.items {
            *totals.entry(item.added_by.clone()).or_insert(0.0) += item.subtotal();
        }
        totals
    }
}

/// Order status update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
}
