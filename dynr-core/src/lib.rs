//! Dynr core - restaurant browsing and ordering
//!
//! # Overview
//!
//! Headless state and business rules behind a restaurant discovery UI:
//!
//! - **Catalog** (`catalog`): read-only restaurants, menus and tables
//! - **Cart** (`orders`): cart lines, quantity picker, price summary
//! - **Tables** (`tables`): none → tentative → confirmed selection
//! - **Filters** (`filters`): category and dietary menu filters
//! - **Booking** (`booking`): reservation form checks and packaging
//! - **Session** (`session`): one user's mutable state over a shared catalog
//!
//! # Layout
//!
//! ```text
//! dynr-core/src/
//! ├── core/          # configuration
//! ├── catalog/       # dataset loading and lookups
//! ├── orders/        # cart, money, picker
//! ├── tables/        # table selection
//! ├── filters/       # menu filters
//! ├── booking/       # reservations
//! ├── notice/        # confirmation banners
//! ├── session/       # OrderSession aggregate
//! └── utils/         # logger, validation
//! ```

pub mod booking;
pub mod catalog;
pub mod core;
pub mod filters;
pub mod notice;
pub mod orders;
pub mod session;
pub mod tables;
pub mod utils;

// Re-export public types
pub use catalog::{Catalog, CatalogData, StarRating};
pub use core::Config;
pub use notice::Notice;
pub use orders::{Cart, PricingPolicy, QuantityPicker};
pub use session::OrderSession;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_from_config, init_logger_with_file};
