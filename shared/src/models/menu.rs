//! Menu Model
//!
//! Sectioned menu plus the client-side filter predicates. The three predicates
//! (category, diet, free-text search) are ANDed, so applying them in any order
//! yields the same result; sections left without items are dropped.

use serde::{Deserialize, Serialize};

use super::cart::DietType;

/// One dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub diet: DietType,
    pub category: String,
}

/// Titled menu section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Full menu as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuData {
    pub data: Vec<MenuSection>,
}

/// Dietary filter, `all` passing everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietFilter {
    fn matches(&self, diet: DietType) -> bool {
        match self {
            Self::All => true,
            Self::Veg => diet == DietType::Veg,
            Self::NonVeg => diet == DietType::NonVeg,
        }
    }
}

/// Composed menu filter
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Matches the section title or the item category (case-insensitive)
    pub category: Option<String>,
    pub diet: DietFilter,
    /// Case-insensitive search over name, description and section title
    pub search: Option<String>,
}

impl MenuFilter {
    /// Whether `item` inside the section titled `section_title` passes
    pub fn matches(&self, section_title: &str, item: &MenuItem) -> bool {
        if let Some(category) = &self.category {
            let category = category.to_lowercase();
            if !section_title.to_lowercase().contains(&category)
                && !item.category.to_lowercase().contains(&category)
            {
                return false;
            }
        }
        if !self.diet.matches(item.diet) {
            return false;
        }
        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            if !item.name.to_lowercase().contains(&search)
                && !item.description.to_lowercase().contains(&search)
                && !section_title.to_lowercase().contains(&search)
            {
                return false;
            }
        }
        true
    }
}

impl MenuData {
    /// Apply `filter`, dropping sections with no surviving items
    pub fn filtered(&self, filter: &MenuFilter) -> Vec<MenuSection> {
        self.data
            .iter()
            .filter_map(|section| {
                let items: Vec<MenuItem> = section
                    .items
                    .iter()
                    .filter(|item| filter.matches(&section.title, item))
                    .cloned()
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(MenuSection {
                        title: section.title.clone(),
                        items,
                    })
                }
            })
            .collect()
    }

    /// Find an item anywhere on the menu
    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.data
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MenuData {
        let item = |id: &str, name: &str, desc: &str, diet: DietType, category: &str| MenuItem {
            id: id.into(),
            name: name.into(),
            description: desc.into(),
            price: 100.0,
            diet,
            category: category.into(),
        };
        MenuData {
            data: vec![
                MenuSection {
                    title: "Starters".into(),
                    items: vec![
                        item("s1", "Paneer Tikka", "char-grilled cottage cheese", DietType::Veg, "tandoor"),
                        item("s2", "Chicken 65", "fried chicken, curry leaf", DietType::NonVeg, "fried"),
                    ],
                },
                MenuSection {
                    title: "Mains".into(),
                    items: vec![
                        item("m1", "Dal Makhani", "slow-cooked black lentils", DietType::Veg, "curry"),
                        item("m2", "Butter Chicken", "tomato gravy", DietType::NonVeg, "curry"),
                    ],
                },
            ],
        }
    }

    #[test]
    fn diet_filter_drops_empty_sections() {
        let filter = MenuFilter {
            diet: DietFilter::Veg,
            ..Default::default()
        };
        let sections = menu().filtered(&filter);
        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|s| s.items.iter().all(|i| i.diet == DietType::Veg)));

        let filter = MenuFilter {
            category: Some("fried".into()),
            diet: DietFilter::Veg,
            ..Default::default()
        };
        assert!(menu().filtered(&filter).is_empty());
    }

    #[test]
    fn search_matches_name_description_and_section_title() {
        let menu = menu();
        let by = |search: &str| MenuFilter {
            search: Some(search.into()),
            ..Default::default()
        };
        assert_eq!(menu.filtered(&by("tikka"))[0].items[0].id, "s1");
        assert_eq!(menu.filtered(&by("lentils"))[0].items[0].id, "m1");
        // Section-title hit keeps the whole section
        assert_eq!(menu.filtered(&by("starters"))[0].items.len(), 2);
    }

    #[test]
    fn predicates_compose_order_independently() {
        let menu = menu();
        let combined = MenuFilter {
            category: Some("curry".into()),
            diet: DietFilter::NonVeg,
            search: Some("butter".into()),
        };
        let all_at_once = menu.filtered(&combined);

        // Same predicates applied one at a time, in a different order
        let step1 = MenuData {
            data: menu.filtered(&MenuFilter {
                search: Some("butter".into()),
                ..Default::default()
            }),
        };
        let step2 = MenuData {
            data: step1.filtered(&MenuFilter {
                diet: DietFilter::NonVeg,
                ..Default::default()
            }),
        };
        let sequential = step2.filtered(&MenuFilter {
            category: Some("curry".into()),
            ..Default::default()
        });

        assert_eq!(all_at_once, sequential);
        assert_eq!(all_at_once[0].items[0].id, "m2");
    }

    #[test]
    fn find_item_searches_all_sections() {
        assert_eq!(menu().find_item("m2").unwrap().name, "Butter Chicken");
        assert!(menu().find_item("nope").is_none());
    }
}
