//! Error type shared by every Dynr operation

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the single failure type returned by catalog and session
/// operations:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (ids, field names)
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Unknown item/restaurant/table id
    pub fn is_not_found(&self) -> bool {
        self.code.is_not_found()
    }

    /// Session precondition not met
    pub fn is_invalid_state(&self) -> bool {
        self.code.is_invalid_state()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Restaurant id unknown to the catalog
    pub fn restaurant_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::RestaurantNotFound,
            format!("Restaurant {} not found", id),
        )
        .with_detail("restaurant_id", id)
    }

    /// Menu item id unknown to the catalog
    pub fn item_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::MenuItemNotFound,
            format!("Menu item {} not found", id),
        )
        .with_detail("item_id", id)
    }

    /// Table id unknown to the catalog
    pub fn table_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::TableNotFound, format!("Table {} not found", id))
            .with_detail("table_id", id)
    }

    /// No cart line exists for the item
    pub fn cart_line_not_found(item_id: i64) -> Self {
        Self::with_message(
            ErrorCode::CartLineNotFound,
            format!("Item {} is not in the cart", item_id),
        )
        .with_detail("item_id", item_id)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_format(err.to_string()).with_detail("line", err.line())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::TableUnavailable);
        assert_eq!(err.code, ErrorCode::TableUnavailable);
        assert_eq!(err.message, "Table is not available");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "contact_name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "contact_name");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::item_not_found(999);
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert_eq!(err.details.as_ref().unwrap().get("item_id").unwrap(), 999);
        assert!(err.is_not_found());

        let err = AppError::new(ErrorCode::NoRestaurantSelected);
        assert!(err.is_invalid_state());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::TableNotFound, "Table 42 not found");
        assert_eq!(format!("{}", err), "Table 42 not found");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse: Result<Vec<i64>, _> = serde_json::from_str("[1, 2,");
        let err: AppError = parse.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.details.unwrap().contains_key("line"));
    }

    #[test]
    fn test_serialize_skips_empty_details() {
        let json = serde_json::to_string(&AppError::new(ErrorCode::RequiredField)).unwrap();
        assert!(json.contains("\"code\":7"));
        assert!(!json.contains("details"));
    }
}
