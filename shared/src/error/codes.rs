//! Unified error codes for the Dynr core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 5xxx: Booking errors
//! - 6xxx: Catalog errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the UI shell can
/// match on them without string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Cart ====================
    /// No cart line for this item
    CartLineNotFound = 4001,
    /// Quantity must be positive and within limits
    InvalidQuantity = 4002,

    // ==================== 5xxx: Booking ====================
    /// No restaurant is currently selected
    NoRestaurantSelected = 5001,
    /// Booking date lies in the past
    BookingDateInPast = 5002,
    /// Party size must be at least one
    InvalidPartySize = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Restaurant not found
    RestaurantNotFound = 6001,
    /// Menu item not found
    MenuItemNotFound = 6002,
    /// Dataset failed shape validation
    CatalogInvalid = 6003,
    /// Duplicate identifier in dataset
    DuplicateId = 6004,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is not available for selection
    TableUnavailable = 7002,

    // ==================== 9xxx: System ====================
    /// Filesystem read failed
    IoError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Unknown item/restaurant/table/cart line
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::CartLineNotFound
                | ErrorCode::RestaurantNotFound
                | ErrorCode::MenuItemNotFound
                | ErrorCode::TableNotFound
        )
    }

    /// Operation rejected because a precondition on session state is not met
    pub const fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            ErrorCode::NoRestaurantSelected | ErrorCode::TableUnavailable
        )
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Cart
            ErrorCode::CartLineNotFound => "Item is not in the cart",
            ErrorCode::InvalidQuantity => "Invalid quantity",

            // Booking
            ErrorCode::NoRestaurantSelected => "No restaurant selected",
            ErrorCode::BookingDateInPast => "Booking date is in the past",
            ErrorCode::InvalidPartySize => "Party size must be at least one",

            // Catalog
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::CatalogInvalid => "Catalog data is invalid",
            ErrorCode::DuplicateId => "Duplicate identifier",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableUnavailable => "Table is not available",

            // System
            ErrorCode::IoError => "I/O error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Cart
            4001 => Ok(ErrorCode::CartLineNotFound),
            4002 => Ok(ErrorCode::InvalidQuantity),

            // Booking
            5001 => Ok(ErrorCode::NoRestaurantSelected),
            5002 => Ok(ErrorCode::BookingDateInPast),
            5003 => Ok(ErrorCode::InvalidPartySize),

            // Catalog
            6001 => Ok(ErrorCode::RestaurantNotFound),
            6002 => Ok(ErrorCode::MenuItemNotFound),
            6003 => Ok(ErrorCode::CatalogInvalid),
            6004 => Ok(ErrorCode::DuplicateId),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableUnavailable),

            // System
            9002 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
