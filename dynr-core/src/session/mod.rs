//! Order session - the mutable per-user aggregate
//!
//! One `OrderSession` holds everything a browsing session changes: the
//! restaurant being viewed, the cart, the table selection, the menu filters
//! and the latest confirmation notice. The catalog behind it is shared and
//! read-only.
//!
//! Every operation runs synchronously on `&mut self` and either completes or
//! returns an [`AppError`]; nothing is partially applied. The UI shell
//! re-renders from [`OrderSession::snapshot`].

use std::sync::Arc;

use chrono::NaiveDate;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingConfirmation, BookingForm, MenuItem, Restaurant};
use shared::order::{
    CartLine, CartSummary, CategoryFilter, FilterState, OrderConfirmation, SessionSnapshot,
    TableConfirmation, TableSelection,
};

use crate::booking::package_booking;
use crate::catalog::Catalog;
use crate::core::Config;
use crate::filters;
use crate::notice::Notice;
use crate::orders::{Cart, PricingPolicy, QuantityPicker, compute_summary};
use crate::tables;

const ITEM_ADDED: &str = "Item added to cart!";

#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: Arc<Catalog>,
    pricing: PricingPolicy,
    notice_display_ms: u64,
    current_restaurant: Option<i64>,
    cart: Cart,
    table: TableSelection,
    filters: FilterState,
    notice: Option<Notice>,
}

impl OrderSession {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self {
            catalog,
            pricing: config.pricing(),
            notice_display_ms: config.notice_display_ms,
            current_restaurant: None,
            cart: Cart::with_max_quantity(config.max_item_quantity),
            table: TableSelection::None,
            filters: FilterState::default(),
            notice: None,
        }
    }

    /// Session with the default pricing and limits
    pub fn with_defaults(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, &Config::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========== Restaurant ==========

    /// Open a restaurant's menu page
    ///
    /// Filters are reset so the full menu shows.
    pub fn select_restaurant(&mut self, restaurant_id: i64) -> AppResult<&[MenuItem]> {
        self.catalog.get_restaurant(restaurant_id)?;
        self.current_restaurant = Some(restaurant_id);
        self.filters = FilterState::default();
        tracing::debug!(restaurant_id, "Restaurant opened");
        Ok(self.catalog.get_menu(restaurant_id))
    }

    /// Pick the restaurant to book at, without opening its menu
    pub fn select_restaurant_for_booking(&mut self, restaurant_id: i64) -> AppResult<&Restaurant> {
        let restaurant = self.catalog.get_restaurant(restaurant_id)?;
        self.current_restaurant = Some(restaurant_id);
        Ok(restaurant)
    }

    pub fn current_restaurant(&self) -> Option<&Restaurant> {
        self.current_restaurant
            .and_then(|id| self.catalog.get_restaurant(id).ok())
    }

    // ========== Cart ==========

    /// Add `quantity` of an item; merges into an existing line
    pub fn add_to_cart(&mut self, item_id: i64, quantity: u32) -> AppResult<CartLine> {
        let item = self
            .catalog
            .find_item(item_id)
            .ok_or_else(|| AppError::item_not_found(item_id))?;

        let line = self.cart.add(item, quantity)?.clone();
        tracing::debug!(
            item_id,
            added = quantity,
            quantity = line.quantity,
            cart_items = self.cart.item_count(),
            "Item added to cart"
        );
        self.post_notice(ITEM_ADDED);
        Ok(line)
    }

    /// Start the dish sheet's quantity picker for an item
    pub fn open_dish(&self, item_id: i64) -> AppResult<QuantityPicker> {
        self.catalog
            .find_item(item_id)
            .map(QuantityPicker::new)
            .ok_or_else(|| AppError::item_not_found(item_id))
    }

    /// Commit the picker's quantity to the cart
    pub fn add_picked(&mut self, picker: &QuantityPicker) -> AppResult<CartLine> {
        self.add_to_cart(picker.item_id, picker.quantity)
    }

    /// Apply `delta` to a cart line; a result of 0 or less removes it.
    /// Returns the new quantity (0 when removed).
    pub fn update_quantity(&mut self, item_id: i64, delta: i32) -> AppResult<u32> {
        let quantity = self.cart.update_quantity(item_id, delta)?;
        tracing::debug!(item_id, delta, quantity, "Cart quantity updated");
        Ok(quantity)
    }

    /// Remove a line if present
    pub fn remove_from_cart(&mut self, item_id: i64) -> Option<CartLine> {
        let removed = self.cart.remove(item_id);
        if removed.is_some() {
            tracing::debug!(item_id, "Item removed from cart");
        }
        removed
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of quantities, for the cart badge
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Recomputed from the current lines on every call
    pub fn compute_summary(&self) -> CartSummary {
        compute_summary(self.cart.lines(), &self.pricing)
    }

    /// Place the order: the cart is emptied in one step
    ///
    /// An empty cart is a no-op and yields `None`.
    pub fn place_order(&mut self) -> Option<OrderConfirmation> {
        if self.cart.is_empty() {
            tracing::debug!("Place order ignored: cart is empty");
            return None;
        }

        let summary = self.compute_summary();
        let lines = self.cart.take();
        let confirmation = OrderConfirmation {
            order_id: uuid::Uuid::new_v4().to_string(),
            lines,
            summary,
            placed_at: chrono::Utc::now().timestamp_millis(),
        };

        tracing::info!(
            order_id = %confirmation.order_id,
            lines = confirmation.lines.len(),
            total = confirmation.summary.total,
            "Order placed"
        );
        self.post_notice(confirmation.message());
        Some(confirmation)
    }

    // ========== Tables ==========

    /// Tentatively select a table; unavailable tables are rejected
    pub fn select_table(&mut self, table_id: i64) -> AppResult<()> {
        let table = self.catalog.get_table(table_id)?;
        if let Err(e) = tables::select_table(&mut self.table, table) {
            tracing::warn!(table_id, "Rejected selection of unavailable table");
            return Err(e);
        }
        tracing::debug!(table_id, "Table selected");
        Ok(())
    }

    /// Confirm the tentative table; `None` when nothing is tentative
    pub fn confirm_table(&mut self) -> Option<TableConfirmation> {
        let confirmation = tables::confirm_selection(&mut self.table)?;
        tracing::info!(
            table_id = confirmation.table_id,
            seats = confirmation.seats,
            "Table confirmed"
        );
        self.post_notice(confirmation.message());
        Some(confirmation)
    }

    pub fn table_selection(&self) -> &TableSelection {
        &self.table
    }

    // ========== Filters ==========

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        filters::set_category(&mut self.filters, category);
        tracing::debug!(?category, "Category filter set");
    }

    /// Flip a dietary tag; returns whether it is now active
    pub fn toggle_dietary_filter(&mut self, tag: &str) -> bool {
        let active = filters::toggle_dietary(&mut self.filters, tag);
        tracing::debug!(tag, active, "Dietary filter toggled");
        active
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current restaurant's menu with the filters applied
    pub fn visible_menu(&self) -> Vec<&MenuItem> {
        match self.current_restaurant {
            Some(id) => filters::apply_filters(&self.filters, self.catalog.get_menu(id)),
            None => Vec::new(),
        }
    }

    // ========== Booking ==========

    /// Reserve a table at the current restaurant
    ///
    /// The earliest bookable date is today's UTC date. On success the form is
    /// reset to blank; on failure it is left as is.
    pub fn submit_booking(&mut self, form: &mut BookingForm) -> AppResult<BookingConfirmation> {
        self.submit_booking_on(form, chrono::Utc::now().date_naive())
    }

    /// [`submit_booking`](Self::submit_booking) with an explicit `today`
    pub fn submit_booking_on(
        &mut self,
        form: &mut BookingForm,
        today: NaiveDate,
    ) -> AppResult<BookingConfirmation> {
        let restaurant = self.current_restaurant().ok_or_else(|| {
            tracing::warn!("Booking submitted without a selected restaurant");
            AppError::new(ErrorCode::NoRestaurantSelected)
        })?;

        let confirmation = package_booking(form, restaurant, today)?;

        tracing::info!(
            booking_id = %confirmation.booking_id,
            restaurant_id = confirmation.restaurant_id,
            date = %confirmation.date,
            time = %confirmation.time,
            party_size = confirmation.party_size,
            "Booking submitted"
        );

        *form = BookingForm::default();
        self.post_notice(confirmation.message());
        Ok(confirmation)
    }

    // ========== Notices ==========

    fn post_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::post(message, self.notice_display_ms));
    }

    /// Most recent notice, visible or not
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The notice the banner should show at `now_ms`
    pub fn active_notice(&self, now_ms: i64) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible_at(now_ms))
    }

    // ========== Snapshot ==========

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            restaurant_id: self.current_restaurant,
            lines: self.cart.lines().to_vec(),
            item_count: self.cart.item_count(),
            summary: self.compute_summary(),
            table: self.table.clone(),
            filters: self.filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
