//! Mock backend state
//!
//! Everything lives in DashMaps; nothing survives a restart. Per-endpoint
//! call counters let tests assert that a request was (or was not) made.

use std::sync::RwLock;

use chrono::Utc;
use dashmap::DashMap;
use shared::models::{
    CartItem, DietType, DiningTable, Group, MenuData, MenuItem, MenuSection, Order, TableStatus,
    User, WeatherData, WeatherHistoryEntry, WeatherKind,
};

/// Fixed one-time code accepted by `verify-otp`
pub const MOCK_OTP: &str = "123456";
/// Admin panel credentials
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// A registered account with its password
#[derive(Debug, Clone)]
pub struct Account {
    pub user: User,
    pub password: String,
}

/// Shared mock state
pub struct AppState {
    pub jwt_secret: String,
    /// user id -> account
    pub accounts: DashMap<String, Account>,
    /// phone -> user id
    pub phone_index: DashMap<String, String>,
    /// group id -> group
    pub groups: DashMap<String, Group>,
    /// group id -> cart lines of all members
    pub order_items: DashMap<String, Vec<CartItem>>,
    /// group id -> order status
    pub order_status: DashMap<String, String>,
    /// user id -> pending invites
    pub invites: DashMap<String, Vec<shared::models::PendingInvite>>,
    /// table id -> table
    pub tables: DashMap<String, DiningTable>,
    pub menu: MenuData,
    pub weather: RwLock<(WeatherData, Vec<WeatherHistoryEntry>)>,
    /// endpoint counters, see [`AppState::bump`]
    counters: DashMap<String, u64>,
}

impl AppState {
    pub fn new() -> Self {
        let tables = DashMap::new();
        for (i, capacity) in [2u32, 2, 4, 4, 6, 8].into_iter().enumerate() {
            let id = format!("t{}", i + 1);
            tables.insert(
                id.clone(),
                DiningTable {
                    id,
                    name: format!("Table {}", i + 1),
                    capacity,
                    status: TableStatus::Available,
                    current_guests: 0,
                },
            );
        }

        Self {
            jwt_secret: "tiffin-mock-secret".to_string(),
            accounts: DashMap::new(),
            phone_index: DashMap::new(),
            groups: DashMap::new(),
            order_items: DashMap::new(),
            order_status: DashMap::new(),
            invites: DashMap::new(),
            tables,
            menu: default_menu(),
            weather: RwLock::new((
                WeatherData {
                    current: WeatherKind::Sunny,
                    updated_at: Utc::now(),
                },
                Vec::new(),
            )),
            counters: DashMap::new(),
        }
    }

    /// Record one hit against `key`
    pub fn bump(&self, key: impl Into<String>) {
        *self.counters.entry(key.into()).or_insert(0) += 1;
    }

    /// Hits recorded against `key`
    pub fn hits(&self, key: &str) -> u64 {
        self.counters.get(key).map(|v| *v).unwrap_or(0)
    }

    /// Order writes observed for a group
    pub fn order_writes(&self, group_id: &str) -> u64 {
        self.hits(&format!("order-write:{}", group_id))
    }

    /// Order reads observed for a group
    pub fn order_reads(&self, group_id: &str) -> u64 {
        self.hits(&format!("order-read:{}", group_id))
    }

    /// Current server-side order view for a group, if any items exist
    pub fn order_view(&self, group_id: &str) -> Option<Order> {
        let items = self.order_items.get(group_id)?.value().clone();
        if items.is_empty() {
            return None;
        }
        let mut order = Order::compute(format!("order-{}", group_id), group_id, items);
        if let Some(status) = self.order_status.get(group_id) {
            order.status = status.value().clone();
        }
        Some(order)
    }

    pub fn user_by_id(&self, id: &str) -> Option<User> {
        self.accounts.get(id).map(|a| a.user.clone())
    }

    pub fn user_by_phone(&self, phone: &str) -> Option<User> {
        let id = self.phone_index.get(phone)?;
        self.user_by_id(&id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_menu() -> MenuData {
    let item = |id: &str, name: &str, description: &str, price: f64, diet, category: &str| MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        diet,
        category: category.to_string(),
    };

    MenuData {
        data: vec![
            MenuSection {
                title: "Starters".to_string(),
                items: vec![
                    item(
                        "st-01",
                        "Paneer Tikka",
                        "Char-grilled cottage cheese with mint chutney",
                        240.0,
                        DietType::Veg,
                        "tandoor",
                    ),
                    item(
                        "st-02",
                        "Chicken 65",
                        "Crisp fried chicken tossed with curry leaves",
                        280.0,
                        DietType::NonVeg,
                        "fried",
                    ),
                ],
            },
            MenuSection {
                title: "Mains".to_string(),
                items: vec![
                    item(
                        "mn-01",
                        "Dal Makhani",
                        "Black lentils simmered overnight with butter",
                        260.0,
                        DietType::Veg,
                        "curry",
                    ),
                    item(
                        "mn-02",
                        "Butter Chicken",
                        "Tandoori chicken in tomato-cashew gravy",
                        340.0,
                        DietType::NonVeg,
                        "curry",
                    ),
                ],
            },
        ],
    }
}
