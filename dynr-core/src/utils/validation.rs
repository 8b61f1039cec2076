//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! booking form and cart quantities.

use shared::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_optional_text(value, field, max_len)
}

/// Validate that an optional string is within the length limit.
pub fn validate_optional_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a cart quantity: positive and not above `max`.
pub fn validate_quantity(quantity: u32, max: u32) -> AppResult<()> {
    if quantity == 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            "quantity must be positive, got 0",
        ));
    }
    if quantity > max {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("quantity exceeds maximum allowed ({max}), got {quantity}"),
        )
        .with_detail("quantity", quantity));
    }
    Ok(())
}
