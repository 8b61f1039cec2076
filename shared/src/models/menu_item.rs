//! Menu Item Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu section a dish is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Main Course")]
    MainCourse,
    Breads,
    Rice,
    Appetizers,
    Desserts,
    Beverages,
}

impl MenuCategory {
    /// Every category, in menu order
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::MainCourse,
        MenuCategory::Breads,
        MenuCategory::Rice,
        MenuCategory::Appetizers,
        MenuCategory::Desserts,
        MenuCategory::Beverages,
    ];

    /// Display label, identical to the dataset spelling
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Breads => "Breads",
            MenuCategory::Rice => "Rice",
            MenuCategory::Appetizers => "Appetizers",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Beverages => "Beverages",
        }
    }

    /// Parse a display label (exact match)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition facts, informational only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique across all restaurants
    pub id: i64,
    pub name: String,
    pub category: MenuCategory,
    pub image: String,
    /// Unit price in whole currency units
    pub price: u32,
    /// Serving size, e.g. "2-3 people"
    pub serves: String,
    /// Preparation estimate, e.g. "25 mins"
    pub waiting_time: String,
    pub is_veg: bool,
    pub rating: f32,
    pub description: String,
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub dietary_info: Vec<String>,
}

impl MenuItem {
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        self.dietary_info.iter().any(|t| t == tag)
    }
}
