//! Catalog - read-only restaurant, menu and table dataset
//!
//! Loaded once at startup, validated, then shared (`Arc<Catalog>`) by every
//! order session. All lookups are linear scans; the dataset is a handful of
//! restaurants.

pub mod loader;
pub mod stars;

pub use loader::CatalogData;
pub use stars::StarRating;

use shared::error::{AppError, AppResult};
use shared::models::{DiningTable, MenuItem, Restaurant};
use std::collections::BTreeMap;
use std::path::Path;

/// Demo dataset bundled with the crate
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: BTreeMap<i64, Vec<MenuItem>>,
    tables: Vec<DiningTable>,
}

impl Catalog {
    /// Validate a dataset and take ownership of it
    pub fn from_data(data: CatalogData) -> AppResult<Self> {
        data.validate()?;

        let item_count: usize = data.menu_items.values().map(Vec::len).sum();
        tracing::debug!(
            restaurants = data.restaurants.len(),
            items = item_count,
            tables = data.tables.len(),
            "Catalog loaded"
        );

        Ok(Self {
            restaurants: data.restaurants,
            menus: data.menu_items,
            tables: data.tables,
        })
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Self::from_data(CatalogData::from_json(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_detail("path", path.display().to_string())
        })?;
        Self::from_json(&json)
    }

    /// The embedded demo dataset
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    // ========== Restaurants ==========

    pub fn list_restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get_restaurant(&self, restaurant_id: i64) -> AppResult<&Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| AppError::restaurant_not_found(restaurant_id))
    }

    /// Restaurants whose name or cuisine contains `query` (case-insensitive).
    /// A blank query returns everything.
    pub fn search_restaurants(&self, query: &str) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.matches_query(query))
            .collect()
    }

    // ========== Menus ==========

    /// Menu of a restaurant; empty when none is registered
    pub fn get_menu(&self, restaurant_id: i64) -> &[MenuItem] {
        self.menus
            .get(&restaurant_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Scan every menu for the item
    pub fn find_item(&self, item_id: i64) -> Option<&MenuItem> {
        self.menus
            .values()
            .flat_map(|items| items.iter())
            .find(|item| item.id == item_id)
    }

    // ========== Tables ==========

    pub fn list_tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn get_table(&self, table_id: i64) -> AppResult<&DiningTable> {
        self.tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))
    }
}
