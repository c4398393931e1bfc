//! Group Model
//!
//! A group is a set of users dining together under one reservation, sharing
//! one collective order. Exactly one admin (the creator) per group.

use serde::{Deserialize, Serialize};

/// Dining group entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub group_admin_id: String,
    pub invite_code: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default)]
    pub group_members: Vec<GroupMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Join URL supplied by the backend on creation / invite generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
}

impl Group {
    /// Whether `user_id` is this group's admin
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.group_admin_id == user_id
    }

    /// Look up a member by user id
    pub fn member(&self, user_id: &str) -> Option<&GroupMember> {
        self.group_members.iter().find(|m| m.user_id == user_id)
    }
}

/// Group membership entry
///
/// `has_accepted` flips false -> true only via a backend-confirmed join;
/// clients never set it speculatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub color: String,
    pub is_admin: bool,
    pub has_accepted: bool,
}

/// Create group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreate {
    pub admin_name: String,
    pub admin_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
}

/// Update group payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Group list entry with order stats (for the "my groups" view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    #[serde(flatten)]
    pub group: Group,
    pub member_count: u32,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<GroupOrderSummary>,
}

/// Order stats attached to a group summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOrderSummary {
    pub id: String,
    pub final_amount: f64,
    pub status: String,
    pub item_count: u32,
}
