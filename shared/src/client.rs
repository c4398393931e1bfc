//! Client-related types shared between backend and client
//!
//! Request/response DTOs used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::{AdminUser, DiningTable, Group, Order, PendingInvite, User};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
}

/// Password login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// OTP dispatch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub phone: String,
}

/// OTP login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

/// Successful auth payload: token plus its user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: User,
}

/// Current user payload (`GET /auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserData {
    pub user: User,
}

/// Profile update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: String,
}

/// Phone lookup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUserRequest {
    pub phone: String,
}

/// Phone lookup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchUserData {
    pub user: Option<User>,
}

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Admin login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAuthData {
    pub token: String,
    pub admin: AdminUser,
}

// =============================================================================
// Group / Order / Invite API DTOs
// =============================================================================

/// Group payload wrapper (`create-group`, `GET /groups/:id`, `join`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupData {
    pub group: Group,
}

/// Group order payload wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderData {
    pub order: Option<Order>,
}

/// Invite link payload (`POST /invites/invite-member`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteLinkData {
    pub invite_link: String,
}

/// Invited user payload (`POST /invites/invite-user`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUserData {
    pub invited_user: User,
}

/// Pending invite list payload (`GET /invites/notifications`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsData {
    pub pending_invites: Vec<PendingInvite>,
    pub count: u32,
}

/// Delete-with-authorization body (group delete, order item removal)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: String,
}

// =============================================================================
// Admin API DTOs
// =============================================================================

/// Admin dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub tables: Vec<DiningTable>,
    pub pending_reservations: Vec<Group>,
    pub active_orders: Vec<Order>,
}

/// Table list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesData {
    pub tables: Vec<DiningTable>,
}
