//! Admin panel client
//!
//! Separate identity from the diner session: the admin token lives on its own
//! gateway and credential slot and never mixes with user auth.

use std::sync::{Arc, RwLock};

use shared::client::{AdminAuthData, AdminLoginRequest, DashboardData, GroupData, TablesData};
use shared::models::{AdminUser, Order, OrderStatusUpdate, TableStatus, TableStatusUpdate};
use shared::response::Empty;
use shared::ApiResponse;

use crate::http::{expect_data, HttpClient};
use crate::ClientResult;

/// Admin panel API client
#[derive(Clone)]
pub struct AdminClient {
    http: HttpClient,
    admin: Arc<RwLock<Option<AdminUser>>>,
}

impl AdminClient {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            admin: Arc::new(RwLock::new(None)),
        }
    }

    /// Authenticate an admin panel operator
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AdminUser> {
        let request = AdminLoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let data = self
            .http
            .post::<ApiResponse<AdminAuthData>, _>("/auth/admin-login", &request)
            .await
            .and_then(expect_data)?;

        self.http.set_token(&data.token);
        if let Ok(mut slot) = self.admin.write() {
            *slot = Some(data.admin.clone());
        }
        tracing::info!("Admin authenticated: {}", data.admin.username);
        Ok(data.admin)
    }

    /// Drop the admin session
    pub fn logout(&self) {
        self.http.clear_token();
        if let Ok(mut slot) = self.admin.write() {
            *slot = None;
        }
    }

    /// Currently authenticated operator, if any
    pub fn current_admin(&self) -> Option<AdminUser> {
        self.admin.read().ok().and_then(|a| a.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_admin().is_some()
    }

    // ========== Dashboard ==========

    /// Tables, pending reservations and active orders in one call
    pub async fn dashboard(&self) -> ClientResult<DashboardData> {
        self.http
            .get::<ApiResponse<DashboardData>>("/admin/dashboard")
            .await
            .and_then(expect_data)
    }

    /// Confirm a reservation request
    pub async fn confirm_reservation(&self, group_id: &str) -> ClientResult<()> {
        self.http
            .post_empty::<ApiResponse<GroupData>>(&format!(
                "/admin/reservation/{}/confirm",
                group_id
            ))
            .await
            .and_then(expect_data)?;
        Ok(())
    }

    /// Cancel a reservation request
    pub async fn cancel_reservation(&self, group_id: &str) -> ClientResult<()> {
        self.http
            .post_empty::<ApiResponse<Empty>>(&format!("/admin/reservation/{}/cancel", group_id))
            .await
            .and_then(expect_data)?;
        Ok(())
    }

    // ========== Tables ==========

    /// All dining tables
    pub async fn tables(&self) -> ClientResult<TablesData> {
        self.http
            .get::<ApiResponse<TablesData>>("/admin/tables")
            .await
            .and_then(expect_data)
    }

    /// Move a table through its occupancy lifecycle
    pub async fn update_table_status(
        &self,
        table_id: &str,
        status: TableStatus,
        current_guests: Option<u32>,
    ) -> ClientResult<()> {
        let update = TableStatusUpdate {
            status,
            current_guests,
        };
        self.http
            .put::<ApiResponse<Empty>, _>(&format!("/admin/table/{}/status", table_id), &update)
            .await
            .and_then(expect_data)?;
        Ok(())
    }

    // ========== Orders ==========

    /// Advance an order's fulfillment or payment status
    pub async fn update_order_status(
        &self,
        order_id: &str,
        update: &OrderStatusUpdate,
    ) -> ClientResult<Order> {
        let data = self
            .http
            .put::<ApiResponse<shared::client::OrderData>, _>(
                &format!("/admin/order/{}/status", order_id),
                update,
            )
            .await
            .and_then(expect_data)?;
        data.order.ok_or_else(|| {
            crate::ClientError::InvalidResponse("Missing order in status response".to_string())
        })
    }
}
