//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    /// Image URL
    pub image: String,
    /// 0.0 - 5.0
    pub rating: f32,
    /// Display estimate, e.g. "15-20 mins"
    pub waiting_time: String,
    pub parking_available: bool,
    /// Currency symbols, one per tier (e.g. "₹₹₹")
    pub price_range: String,
}

impl Restaurant {
    /// Price tier as the number of currency symbols in `price_range`
    pub fn price_tier(&self) -> usize {
        self.price_range.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Case-insensitive match against name or cuisine
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.cuisine.to_lowercase().contains(&query)
    }
}
