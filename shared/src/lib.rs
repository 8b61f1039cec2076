//! Shared types for Dynr
//!
//! Catalog records, order session types and the unified error system,
//! used by `dynr-core` and by whatever UI shell drives it.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
