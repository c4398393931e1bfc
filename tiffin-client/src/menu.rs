//! Menu catalog loader
//!
//! Two-tier data source behind one interface: the backend menu when
//! reachable, otherwise the bundled dataset so browsing is never fully
//! blocked. The result is tagged with where it came from; remote and bundled
//! data are never mixed.

use shared::models::{MenuData, MenuFilter, MenuItem, MenuSection};
use shared::ApiResponse;

use crate::http::{expect_data, HttpClient};
use crate::{ClientError, ClientResult};

/// Snapshot of the menu shipped with the client
const BUNDLED_MENU: &str = include_str!("menu_data.json");

/// Where a loaded menu came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSource {
    Remote,
    Bundled,
}

/// A loaded menu together with its provenance
#[derive(Debug, Clone)]
pub struct LoadedMenu {
    pub data: MenuData,
    pub source: MenuSource,
}

impl LoadedMenu {
    /// Apply the composed category/diet/search filter
    pub fn filtered(&self, filter: &MenuFilter) -> Vec<MenuSection> {
        self.data.filtered(filter)
    }
}

/// Menu catalog with remote-then-bundled fallback
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    http: HttpClient,
}

impl MenuCatalog {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Load the menu, falling back to the bundled dataset on any failure
    pub async fn get_menu(&self) -> ClientResult<LoadedMenu> {
        match self
            .http
            .get::<ApiResponse<MenuData>>("/menu")
            .await
            .and_then(expect_data)
        {
            Ok(data) => Ok(LoadedMenu {
                data,
                source: MenuSource::Remote,
            }),
            Err(e) => {
                tracing::warn!("Menu fetch failed ({}), using bundled data", e);
                Ok(LoadedMenu {
                    data: bundled_menu()?,
                    source: MenuSource::Bundled,
                })
            }
        }
    }

    /// Fetch a single menu item by id
    pub async fn get_menu_item(&self, item_id: &str) -> ClientResult<MenuItem> {
        self.http
            .get::<ApiResponse<MenuItem>>(&format!("/menu/item/{}", item_id))
            .await
            .and_then(expect_data)
    }
}

/// Parse the embedded dataset
fn bundled_menu() -> ClientResult<MenuData> {
    serde_json::from_str(BUNDLED_MENU)
        .map_err(|e| ClientError::InvalidResponse(format!("Bundled menu corrupt: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DietFilter;

    #[test]
    fn bundled_menu_parses_and_is_nonempty() {
        let menu = bundled_menu().unwrap();
        assert!(!menu.data.is_empty());
        assert!(menu.data.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn bundled_menu_has_both_diets() {
        let menu = bundled_menu().unwrap();
        let veg = menu.filtered(&MenuFilter {
            diet: DietFilter::Veg,
            ..Default::default()
        });
        let non_veg = menu.filtered(&MenuFilter {
            diet: DietFilter::NonVeg,
            ..Default::default()
        });
        assert!(!veg.is_empty());
        assert!(!non_veg.is_empty());
    }
}
