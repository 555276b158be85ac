//! Utility module - formatting, time parsing, validation and logging
//!
//! - [`AppError`] / [`AppResult`] (from shared::error)
//! - phone, price and deposit-rate formatting
//! - reservation date/time parsing

pub mod format;
pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
