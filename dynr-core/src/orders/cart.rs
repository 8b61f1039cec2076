//! Cart state machine
//!
//! Per item: absent, or present with quantity >= 1. Lines keep insertion
//! order, which is also display order.

use shared::error::{AppError, AppResult};
use shared::models::MenuItem;
use shared::order::CartLine;

use crate::core::config::DEFAULT_MAX_ITEM_QUANTITY;
use crate::utils::validation::validate_quantity;

#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    max_quantity: u32,
}

impl Default for Cart {
    fn default() -> Self {
        Self::with_max_quantity(DEFAULT_MAX_ITEM_QUANTITY)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_quantity(max_quantity: u32) -> Self {
        Self {
            lines: Vec::new(),
            max_quantity,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, item_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == item_id)
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Add `quantity` of `item`, merging into an existing line
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> AppResult<&CartLine> {
        validate_quantity(quantity, self.max_quantity)?;

        match self.lines.iter().position(|l| l.item_id == item.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                let merged = line.quantity.saturating_add(quantity);
                validate_quantity(merged, self.max_quantity)?;
                line.quantity = merged;
                Ok(&self.lines[idx])
            }
            None => {
                self.lines.push(CartLine::from_item(item, quantity));
                Ok(&self.lines[self.lines.len() - 1])
            }
        }
    }

    /// Apply `delta` to an existing line; returns the new quantity.
    ///
    /// A result of 0 or below removes the line and returns 0.
    pub fn update_quantity(&mut self, item_id: i64, delta: i32) -> AppResult<u32> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.item_id == item_id)
            .ok_or_else(|| AppError::cart_line_not_found(item_id))?;

        let target = (i64::from(self.lines[idx].quantity) + i64::from(delta)).max(0);
        if target == 0 {
            self.lines.remove(idx);
            return Ok(0);
        }

        let quantity = u32::try_from(target).unwrap_or(u32::MAX);
        validate_quantity(quantity, self.max_quantity)?;
        self.lines[idx].quantity = quantity;
        Ok(quantity)
    }

    /// Remove a line; absent lines are not an error
    pub fn remove(&mut self, item_id: i64) -> Option<CartLine> {
        let idx = self.lines.iter().position(|l| l.item_id == item_id)?;
        Some(self.lines.remove(idx))
    }

    /// Empty the cart in one move, returning what it held
    pub fn take(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}
