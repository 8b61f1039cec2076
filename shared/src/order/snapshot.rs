//! Session snapshot - the read model the UI shell renders from

use super::types::{CartLine, CartSummary, FilterState, TableSelection};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of an order session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Restaurant currently being viewed or booked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<i64>,
    /// Cart lines in insertion order
    pub lines: Vec<CartLine>,
    /// Sum of all line quantities (header badge)
    pub item_count: u64,
    /// Recomputed from `lines` when the snapshot is taken
    pub summary: CartSummary,
    pub table: TableSelection,
    pub filters: FilterState,
}

impl SessionSnapshot {
    pub fn is_cart_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
