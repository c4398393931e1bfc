//! Dining Table Model (admin panel)

use serde::{Deserialize, Serialize};

/// Table occupancy state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub status: TableStatus,
    #[serde(default)]
    pub current_guests: u32,
}

/// Table status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatusUpdate {
    pub status: TableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_guests: Option<u32>,
}
