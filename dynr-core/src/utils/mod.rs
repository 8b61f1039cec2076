//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - text and quantity checks

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
