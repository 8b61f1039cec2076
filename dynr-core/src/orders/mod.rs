//! Cart and order placement
//!
//! - [`cart`] - cart line state machine
//! - [`money`] - subtotal, service charge, tax
//! - [`picker`] - pending quantity on the dish sheet

pub mod cart;
pub mod money;
pub mod picker;

pub use cart::Cart;
pub use money::{PricingPolicy, calculate_subtotal, compute_summary};
pub use picker::QuantityPicker;
