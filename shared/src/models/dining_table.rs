//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub seats: u32,
    /// Fixed for the session; no real-time availability
    pub available: bool,
}
