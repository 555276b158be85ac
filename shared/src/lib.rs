//! Shared types for the table booking workspace
//!
//! Models, error types and small utilities used by the booking core
//! and by any presentation layer that renders its results.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Booking, BookingCreate, DiningTable, ReservationContext, Restaurant};
