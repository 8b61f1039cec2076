//! Dataset loading and shape validation
//!
//! The dataset is the JSON fixture the demo ships with:
//!
//! ```text
//! {
//!   "restaurants": [ { "id": 1, "name": ..., "waitingTime": ..., ... } ],
//!   "menuItems":   { "1": [ { "id": 101, "category": "Main Course", ... } ] },
//!   "tables":      [ { "id": 1, "name": "Table 1", "seats": 2, "available": true } ]
//! }
//! ```
//!
//! It is validated once here; lookups afterwards trust it.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, MenuItem, Restaurant};
use std::collections::{BTreeMap, HashSet};

/// Raw dataset as found in the fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    pub restaurants: Vec<Restaurant>,
    /// Menus keyed by restaurant id
    #[serde(default)]
    pub menu_items: BTreeMap<i64, Vec<MenuItem>>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

impl CatalogData {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the invariants lookups rely on
    pub fn validate(&self) -> AppResult<()> {
        let mut restaurant_ids = HashSet::new();
        for restaurant in &self.restaurants {
            if !restaurant_ids.insert(restaurant.id) {
                return Err(duplicate("restaurant", restaurant.id));
            }
            check_rating("restaurant", restaurant.id, restaurant.rating)?;
        }

        let mut item_ids = HashSet::new();
        for (restaurant_id, items) in &self.menu_items {
            if !restaurant_ids.contains(restaurant_id) {
                return Err(invalid(format!(
                    "menu registered for unknown restaurant {}",
                    restaurant_id
                ))
                .with_detail("restaurant_id", *restaurant_id));
            }
            for item in items {
                if !item_ids.insert(item.id) {
                    return Err(duplicate("menu item", item.id));
                }
                if item.price == 0 {
                    return Err(invalid(format!("menu item {} has no price", item.id))
                        .with_detail("item_id", item.id));
                }
                check_rating("menu item", item.id, item.rating)?;
            }
        }

        let mut table_ids = HashSet::new();
        for table in &self.tables {
            if !table_ids.insert(table.id) {
                return Err(duplicate("table", table.id));
            }
            if table.seats == 0 {
                return Err(invalid(format!("table {} has no seats", table.id))
                    .with_detail("table_id", table.id));
            }
        }

        Ok(())
    }
}

fn check_rating(kind: &str, id: i64, rating: f32) -> AppResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(invalid(format!(
            "{} {} has rating {} outside 0-5",
            kind, id, rating
        ))
        .with_detail("id", id));
    }
    Ok(())
}

fn duplicate(kind: &str, id: i64) -> AppError {
    AppError::with_message(ErrorCode::DuplicateId, format!("duplicate {} id {}", kind, id))
        .with_detail("id", id)
}

fn invalid(msg: String) -> AppError {
    AppError::with_message(ErrorCode::CatalogInvalid, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "restaurants": [{
            "id": 1, "name": "Spice Symphony", "cuisine": "North Indian",
            "address": "MG Road", "image": "", "rating": 4.6,
            "waitingTime": "15-20 mins", "parkingAvailable": true, "priceRange": "₹₹"
        }],
        "menuItems": {
            "1": [{
                "id": 101, "name": "Butter Chicken", "category": "Main Course",
                "image": "", "price": 320, "serves": "2-3 people",
                "waitingTime": "25 mins", "isVeg": false, "rating": 4.6,
                "description": "",
                "nutrition": {"calories": 380, "protein": "28g", "carbs": "15g", "fat": "24g"},
                "allergens": ["dairy", "nuts"], "dietaryInfo": ["gluten-free"]
            }]
        },
        "tables": [{"id": 1, "name": "Table 1", "seats": 2, "available": true}]
    }"#;

    #[test]
    fn test_minimal_dataset_is_valid() {
        let data = CatalogData::from_json(MINIMAL).unwrap();
        assert_eq!(data.menu_items[&1].len(), 1);
        data.validate().unwrap();
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let err = CatalogData::from_json("{\"restaurants\": [").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_menu_for_unknown_restaurant() {
        let mut data = CatalogData::from_json(MINIMAL).unwrap();
        let menu = data.menu_items.remove(&1).unwrap();
        data.menu_items.insert(9, menu);

        let err = data.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_item_ids_must_be_globally_unique() {
        let mut data = CatalogData::from_json(MINIMAL).unwrap();
        let mut second = data.restaurants[0].clone();
        second.id = 2;
        data.restaurants.push(second);
        let menu = data.menu_items[&1].clone();
        data.menu_items.insert(2, menu);

        let err = data.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateId);
    }

    #[test]
    fn test_zero_price_and_bad_rating_rejected() {
        let mut data = CatalogData::from_json(MINIMAL).unwrap();
        data.menu_items.get_mut(&1).unwrap()[0].price = 0;
        assert_eq!(data.validate().unwrap_err().code, ErrorCode::CatalogInvalid);

        let mut data = CatalogData::from_json(MINIMAL).unwrap();
        data.restaurants[0].rating = 5.5;
        assert_eq!(data.validate().unwrap_err().code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let mut data = CatalogData::from_json(MINIMAL).unwrap();
        let table = data.tables[0].clone();
        data.tables.push(table);
        assert_eq!(data.validate().unwrap_err().code, ErrorCode::DuplicateId);
    }
}
