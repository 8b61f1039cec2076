//! Quantity picker shown on the dish detail sheet
//!
//! Holds the pending quantity before it is committed to the cart. It never
//! drops below one.

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityPicker {
    pub item_id: i64,
    pub unit_price: u32,
    pub quantity: u32,
}

impl QuantityPicker {
    pub fn new(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// Adjust by `delta`, clamped to a minimum of 1. Returns the new quantity.
    pub fn change(&mut self, delta: i32) -> u32 {
        let target = (i64::from(self.quantity) + i64::from(delta)).max(1);
        self.quantity = u32::try_from(target).unwrap_or(u32::MAX);
        self.quantity
    }

    /// Price shown on the "Add to Cart" button
    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}
