//! Order session types
//!
//! - Cart lines and the money summary
//! - Table selection state
//! - Menu filter state
//! - Snapshots: the read model handed to the UI shell

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::SessionSnapshot;
pub use types::*;
