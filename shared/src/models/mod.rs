//! Data models
//!
//! Catalog records are loaded once from the dataset fixture and never
//! mutated. All IDs are `i64`, prices are whole currency units.

pub mod booking;
pub mod dining_table;
pub mod menu_item;
pub mod restaurant;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use menu_item::*;
pub use restaurant::*;
