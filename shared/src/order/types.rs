//! Shared types for the order session

use crate::models::{DiningTable, MenuCategory, MenuItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Cart Types
// ============================================================================

/// One cart line per distinct menu item
///
/// Name and price are snapshotted from the catalog when the line is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: i64,
    pub name: String,
    /// Unit price
    pub price: u32,
    /// Always >= 1 while the line exists
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity,
        }
    }

    /// price × quantity
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

/// Money breakdown of the cart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub subtotal: u64,
    pub service_charge: u64,
    pub tax: u64,
    pub total: u64,
}

/// Returned by a successful order placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
    /// Millis since epoch
    pub placed_at: i64,
}

impl OrderConfirmation {
    pub fn message(&self) -> &'static str {
        "Order placed successfully! Your food will be ready soon."
    }
}

// ============================================================================
// Table Selection
// ============================================================================

/// none → tentative → confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TableSelection {
    #[default]
    None,
    Tentative { table: DiningTable },
    Confirmed { table: DiningTable },
}

impl TableSelection {
    /// The selected table, tentative or confirmed
    pub fn table(&self) -> Option<&DiningTable> {
        match self {
            TableSelection::None => None,
            TableSelection::Tentative { table } | TableSelection::Confirmed { table } => {
                Some(table)
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, TableSelection::Confirmed { .. })
    }
}

/// Returned when a tentative table selection is confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfirmation {
    pub table_id: i64,
    pub table_name: String,
    pub seats: u32,
}

impl TableConfirmation {
    pub fn message(&self) -> String {
        format!(
            "{} ({} seats) selected successfully!",
            self.table_name, self.seats
        )
    }
}

// ============================================================================
// Menu Filters
// ============================================================================

/// Single-select category axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(MenuCategory),
}

impl CategoryFilter {
    /// Parse a filter button value: "all" or a category label
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(CategoryFilter::All);
        }
        MenuCategory::from_label(value).map(CategoryFilter::Category)
    }

    pub fn matches(&self, category: MenuCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => *c == category,
        }
    }
}

/// Active menu filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Empty = no dietary filtering
    #[serde(default)]
    pub dietary: BTreeSet<String>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
