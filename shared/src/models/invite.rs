//! Invite Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invitation awaiting accept/decline
///
/// Exists between invite send and accept; dropped from the pending list after
/// either action or a notification refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInvite {
    pub group_id: String,
    pub group_name: String,
    /// Name of the inviting member
    pub invited_by: String,
    pub invited_at: DateTime<Utc>,
}

/// Generate-invite-link payload (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCreate {
    pub group_id: String,
    pub admin_id: String,
}

/// Invite-by-phone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteByPhone {
    pub group_id: String,
    pub phone: String,
}

/// Join-by-code payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub invite_code: String,
}
