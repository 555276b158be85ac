//! Booking Core - table availability and booking creation for restaurant reservations
//!
//! # Modules
//!
//! - **availability**: deterministic availability oracle for (restaurant, date, time, table)
//! - **catalog**: restaurant, menu and table data provider (mock backend for now)
//! - **booking**: time slots, table selection, booking creation, availability preview
//! - **pricing**: menu subtotal and deposit calculation
//! - **core**: configuration
//! - **utils**: formatting, date/time parsing, validation, logging
//!
//! ```text
//! booking-core/src/
//! ├── availability/  # seed/table hashing, oracle trait
//! ├── catalog/       # CatalogProvider, MockCatalog
//! ├── booking/       # slots, BookingService, preview
//! ├── pricing/       # deposit
//! ├── core/          # Config
//! └── utils/         # format, time, validation, logger
//! ```

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use availability::{AvailabilityOracle, HashOracle, compute_availability};
pub use booking::{BookingService, SlotAvailability, TableSelection};
pub use catalog::{CatalogProvider, MockCatalog};
pub use crate::core::Config;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
