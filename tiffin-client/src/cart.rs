//! Cart synchronization engine
//!
//! Keeps one member's local cart edits reconciled with the shared group order
//! without a request per keystroke. Local mutations arm a debounce timer;
//! when it fires, the member's own lines are pushed as a full replace of
//! their portion of the order. Reads pull the whole group order and replace
//! the local cart wholesale. Both directions share a per-group cooldown:
//! attempts inside the window are dropped, never queued, so the next edit or
//! explicit refresh is what retries.
//!
//! There is no background polling; every transition is user-triggered.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use shared::client::OrderData;
use shared::models::{CartItem, MenuItem, Order, OrderUpdate, User};
use shared::ApiResponse;
use tokio_util::sync::CancellationToken;

use crate::config::SyncConfig;
use crate::http::{expect_data, HttpClient};
use crate::{ClientError, ClientResult};

/// Engine state for the active group session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No pending sync, no pending fetch
    Idle,
    /// Local edits since the last push; debounce timer armed
    Editing,
    /// A push of this member's items is in flight
    Syncing,
    /// A pull of the full group order is in flight
    Refreshing,
    /// A read or write finished recently; further attempts are dropped
    Cooldown,
}

/// What became of a sync/refresh attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The request was sent and answered
    Completed,
    /// Suppressed: no group, cooldown active, or a call already in flight
    Dropped,
}

struct CartInner {
    group_id: Option<String>,
    items: Vec<CartItem>,
    state: SyncState,
    last_call: Option<Instant>,
    last_error: Option<String>,
    debounce: Option<CancellationToken>,
    /// Bumped on group switch; in-flight results from an older epoch are stale
    epoch: u64,
}

/// Shared-cart handle; cheap to clone, all clones view the same cart
#[derive(Clone)]
pub struct CartSync {
    http: HttpClient,
    user: User,
    config: SyncConfig,
    inner: Arc<Mutex<CartInner>>,
}

impl CartSync {
    pub fn new(http: HttpClient, user: User, config: SyncConfig) -> Self {
        Self {
            http,
            user,
            config,
            inner: Arc::new(Mutex::new(CartInner {
                group_id: None,
                items: Vec::new(),
                state: SyncState::Idle,
                last_call: None,
                last_error: None,
                debounce: None,
                epoch: 0,
            })),
        }
    }

    // ========== Local mutations ==========

    /// Add one of `item`; an existing line for the same dish gains quantity
    pub async fn add_item(&self, item: &MenuItem) {
        {
            let mut inner = self.lock();
            if let Some(line) = inner.items.iter_mut().find(|l| l.id == item.id) {
                line.quantity += 1;
            } else {
                inner.items.push(CartItem {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    price: item.price,
                    quantity: 1,
                    diet: item.diet,
                    added_by: self.user.id.clone(),
                    special_instructions: None,
                });
            }
        }
        self.mark_edited().await;
    }

    /// Set a line's quantity; zero removes the line
    pub async fn update_quantity(&self, item_id: &str, quantity: u32) {
        {
            let mut inner = self.lock();
            if quantity == 0 {
                inner.items.retain(|l| l.id != item_id);
            } else if let Some(line) = inner.items.iter_mut().find(|l| l.id == item_id) {
                line.quantity = quantity;
            }
        }
        self.mark_edited().await;
    }

    /// Attach special instructions to a line
    pub async fn update_notes(&self, item_id: &str, notes: &str) {
        {
            let mut inner = self.lock();
            if let Some(line) = inner.items.iter_mut().find(|l| l.id == item_id) {
                line.special_instructions = if notes.is_empty() {
                    None
                } else {
                    Some(notes.to_string())
                };
            }
        }
        self.mark_edited().await;
    }

    /// Remove a line entirely
    pub async fn remove_item(&self, item_id: &str) {
        {
            let mut inner = self.lock();
            inner.items.retain(|l| l.id != item_id);
        }
        self.mark_edited().await;
    }

    /// Empty the cart
    pub async fn clear(&self) {
        {
            let mut inner = self.lock();
            inner.items.clear();
        }
        self.mark_edited().await;
    }

    // ========== Group session ==========

    /// Switch the active group
    ///
    /// Cancels any armed debounce, invalidates in-flight results for the old
    /// group and, for a new group, pulls its order (subject to the cooldown
    /// gate like any other read).
    pub async fn set_current_group(&self, group_id: Option<String>) -> ClientResult<SyncOutcome> {
        {
            let mut inner = self.lock();
            if let Some(token) = inner.debounce.take() {
                token.cancel();
            }
            inner.epoch += 1;
            inner.group_id = group_id.clone();
            inner.state = SyncState::Idle;
        }
        match group_id {
            Some(_) => self.refresh().await,
            None => Ok(SyncOutcome::Dropped),
        }
    }

    // ========== Network transitions ==========

    /// Push this member's lines as a full replace of their order portion
    ///
    /// Dropped (not queued, not retried) while another call is in flight or
    /// the cooldown window is open. A failure keeps the local cart and is
    /// stored as a displayable message; the next edit re-arms the debounce.
    pub async fn sync_now(&self) -> ClientResult<SyncOutcome> {
        let (group_id, items, epoch) = {
            let mut inner = self.lock();
            let Some(group_id) = inner.group_id.clone() else {
                return Ok(SyncOutcome::Dropped);
            };
            if !self.admit(&mut inner, "sync") {
                return Ok(SyncOutcome::Dropped);
            }
            inner.state = SyncState::Syncing;
            inner.last_call = Some(Instant::now());
            let items = own_items(&inner.items, &self.user.id);
            (group_id, items, inner.epoch)
        };

        tracing::debug!(
            "Pushing {} items to group {} for {}",
            items.len(),
            group_id,
            self.user.id
        );
        let update = OrderUpdate {
            items,
            user_id: self.user.id.clone(),
        };
        let result = self
            .http
            .post::<ApiResponse<OrderData>, _>(
                &format!("/orders/{}/update-order", group_id),
                &update,
            )
            .await
            .and_then(expect_data);

        let mut inner = self.lock();
        if inner.epoch != epoch {
            // Group switched while the push was in flight; its bookkeeping is stale
            return Ok(SyncOutcome::Completed);
        }
        inner.state = SyncState::Idle;
        match result {
            Ok(_) => {
                inner.last_error = None;
                Ok(SyncOutcome::Completed)
            }
            Err(e) => {
                let message = e.message();
                inner.last_error = Some(message.clone());
                Err(ClientError::Sync(message))
            }
        }
    }

    /// Pull the full group order and replace the local cart wholesale
    ///
    /// Last read wins: local edits that have not been pushed yet are
    /// overwritten by whatever the backend returns.
    pub async fn refresh(&self) -> ClientResult<SyncOutcome> {
        let (group_id, epoch) = {
            let mut inner = self.lock();
            let Some(group_id) = inner.group_id.clone() else {
                return Ok(SyncOutcome::Dropped);
            };
            if !self.admit(&mut inner, "refresh") {
                return Ok(SyncOutcome::Dropped);
            }
            inner.state = SyncState::Refreshing;
            inner.last_call = Some(Instant::now());
            (group_id, inner.epoch)
        };

        tracing::debug!("Loading group order for {}", group_id);
        let result = self
            .http
            .get::<ApiResponse<OrderData>>(&format!("/orders/{}", group_id))
            .await
            .and_then(expect_data);

        let mut inner = self.lock();
        if inner.epoch != epoch {
            return Ok(SyncOutcome::Completed);
        }
        inner.state = SyncState::Idle;
        match result {
            Ok(data) => {
                inner.items = data.order.map(|o| o.items).unwrap_or_default();
                inner.last_error = None;
                tracing::debug!("Group order loaded, {} items", inner.items.len());
                Ok(SyncOutcome::Completed)
            }
            Err(e) => {
                let message = e.message();
                inner.last_error = Some(message.clone());
                Err(ClientError::Sync(message))
            }
        }
    }

    /// Server-computed totals view for the active group
    pub async fn group_order(&self) -> ClientResult<Option<Order>> {
        let Some(group_id) = self.group_id() else {
            return Ok(None);
        };
        let data = self
            .http
            .get::<ApiResponse<OrderData>>(&format!("/orders/{}", group_id))
            .await
            .and_then(expect_data)?;
        Ok(data.order)
    }

    // ========== Accessors ==========

    /// Snapshot of the cart lines
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    /// Sum of line subtotals
    pub fn total_price(&self) -> f64 {
        self.lock().items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of line quantities
    pub fn total_items(&self) -> u32 {
        self.lock().items.iter().map(|l| l.quantity).sum()
    }

    /// Active group id
    pub fn group_id(&self) -> Option<String> {
        self.lock().group_id.clone()
    }

    /// Effective engine state; an elapsed cooldown reads as idle
    pub fn state(&self) -> SyncState {
        let inner = self.lock();
        match inner.state {
            SyncState::Cooldown if !self.in_cooldown(&inner) => SyncState::Idle,
            state => state,
        }
    }

    /// Message of the most recent failed push/pull, if any
    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    // ========== Internals ==========

    fn lock(&self) -> std::sync::MutexGuard<'_, CartInner> {
        // Lock is never held across await points; poisoning would mean a
        // panic mid-mutation, which nothing here recovers from anyway
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn in_cooldown(&self, inner: &CartInner) -> bool {
        inner
            .last_call
            .is_some_and(|last| last.elapsed() < self.config.cooldown)
    }

    /// Gate a read/write attempt; on rejection the attempt is dropped
    fn admit(&self, inner: &mut CartInner, action: &str) -> bool {
        if matches!(inner.state, SyncState::Syncing | SyncState::Refreshing) {
            tracing::debug!("{} skipped - call already in flight", action);
            return false;
        }
        if self.in_cooldown(inner) {
            tracing::debug!("{} skipped - cooldown active", action);
            inner.state = SyncState::Cooldown;
            return false;
        }
        true
    }

    /// Re-arm the debounce timer after a local mutation
    async fn mark_edited(&self) {
        let token = {
            let mut inner = self.lock();
            if let Some(token) = inner.debounce.take() {
                token.cancel();
            }
            // Edits without an active group stay purely local
            if inner.group_id.is_none() {
                return;
            }
            inner.state = SyncState::Editing;
            let token = CancellationToken::new();
            inner.debounce = Some(token.clone());
            token
        };

        let engine = self.clone();
        let debounce = self.config.debounce;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(debounce) => {
                    if let Err(e) = engine.sync_now().await {
                        tracing::debug!("Debounced sync failed: {}", e);
                    }
                }
            }
        });
    }
}

/// The push payload carries only lines owned by `user_id`
fn own_items(items: &[CartItem], user_id: &str) -> Vec<CartItem> {
    items
        .iter()
        .filter(|l| l.added_by == user_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use shared::models::DietType;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            name: id.into(),
            phone: "0".into(),
            avatar: "A".into(),
            color: "#000".into(),
        }
    }

    fn dish(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            price,
            diet: DietType::Veg,
            category: "mains".into(),
        }
    }

    fn engine() -> CartSync {
        // No group session, so mutations never reach the network
        let config = ClientConfig::new("http://127.0.0.1:9");
        CartSync::new(
            HttpClient::new(&config).unwrap(),
            user("u1"),
            config.sync,
        )
    }

    #[tokio::test]
    async fn adding_same_dish_twice_bumps_quantity() {
        let cart = engine();
        let dish = dish("m1", 100.0);
        cart.add_item(&dish).await;
        cart.add_item(&dish).await;

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert!((cart.total_price() - 200.0).abs() < 1e-9);
        assert_eq!(cart.total_items(), 2);
    }

    #[tokio::test]
    async fn quantity_zero_removes_the_line() {
        let cart = engine();
        cart.add_item(&dish("m1", 100.0)).await;
        cart.update_quantity("m1", 0).await;
        assert!(cart.items().is_empty());
    }

    #[tokio::test]
    async fn quantity_update_keeps_other_lines() {
        let cart = engine();
        cart.add_item(&dish("m1", 100.0)).await;
        cart.add_item(&dish("m2", 50.0)).await;
        cart.update_quantity("m1", 3).await;

        let items = cart.items();
        assert_eq!(items.iter().find(|l| l.id == "m1").unwrap().quantity, 3);
        assert_eq!(items.iter().find(|l| l.id == "m2").unwrap().quantity, 1);
        assert!((cart.total_price() - 350.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn notes_attach_and_clear() {
        let cart = engine();
        cart.add_item(&dish("m1", 100.0)).await;
        cart.update_notes("m1", "less spicy").await;
        assert_eq!(
            cart.items()[0].special_instructions.as_deref(),
            Some("less spicy")
        );
        cart.update_notes("m1", "").await;
        assert!(cart.items()[0].special_instructions.is_none());
    }

    #[tokio::test]
    async fn lines_are_owned_by_the_current_user() {
        let cart = engine();
        cart.add_item(&dish("m1", 100.0)).await;
        assert!(cart.items().iter().all(|l| l.added_by == "u1"));
    }

    #[test]
    fn own_items_filters_by_added_by() {
        let mine = CartItem {
            id: "m1".into(),
            name: "m1".into(),
            price: 100.0,
            quantity: 1,
            diet: DietType::Veg,
            added_by: "u1".into(),
            special_instructions: None,
        };
        let theirs = CartItem {
            added_by: "u2".into(),
            ..mine.clone()
        };
        let filtered = own_items(&[mine.clone(), theirs], "u1");
        assert_eq!(filtered, vec![mine]);
    }

    #[tokio::test]
    async fn edits_without_a_group_stay_idle() {
        let cart = engine();
        cart.add_item(&dish("m1", 100.0)).await;
        assert_eq!(cart.state(), SyncState::Idle);
        assert_eq!(cart.sync_now().await.unwrap(), SyncOutcome::Dropped);
    }
}
