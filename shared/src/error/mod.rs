//! Unified error system for Dynr
//!
//! This module provides the error handling system shared by the catalog and
//! the order session:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Cart errors
//! - 5xxx: Booking errors
//! - 6xxx: Catalog errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::NoRestaurantSelected);
//! assert!(err.is_invalid_state());
//!
//! let err = AppError::validation("Party size must be at least one")
//!     .with_detail("field", "party_size");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
