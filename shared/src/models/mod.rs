//! Data models
//!
//! Shared between the booking core and its presentation layer.
//! Identifiers are opaque strings handed out by the catalog provider.

pub mod dining_table;
pub mod menu;
pub mod reservation;
pub mod restaurant;
pub mod zone;

// Re-exports
pub use dining_table::*;
pub use menu::*;
pub use reservation::*;
pub use restaurant::*;
pub use zone::*;
