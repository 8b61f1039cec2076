//! Menu filter engine
//!
//! Visible iff the item passes the category axis AND the dietary axis.
//! The dietary axis is OR within itself: any shared tag is enough, and an
//! empty selection lets everything through. Evaluated over the full menu on
//! every call.

use shared::models::MenuItem;
use shared::order::{CategoryFilter, FilterState};

pub fn item_visible(filters: &FilterState, item: &MenuItem) -> bool {
    filters.category.matches(item.category) && dietary_matches(filters, item)
}

fn dietary_matches(filters: &FilterState, item: &MenuItem) -> bool {
    filters.dietary.is_empty() || filters.dietary.iter().any(|tag| item.has_dietary_tag(tag))
}

/// Items passing the filters, in menu order
pub fn apply_filters<'a>(filters: &FilterState, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| item_visible(filters, item))
        .collect()
}

pub fn set_category(filters: &mut FilterState, category: CategoryFilter) {
    filters.category = category;
}

/// Flip a dietary tag; returns whether it is now active
pub fn toggle_dietary(filters: &mut FilterState, tag: &str) -> bool {
    if filters.dietary.remove(tag) {
        false
    } else {
        filters.dietary.insert(tag.to_string());
        true
    }
}
