//! Unified error codes for the booking workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way for every consumer of the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Booking ====================
    /// Restaurant not found
    RestaurantNotFound = 4001,
    /// Requested time is not a bookable slot
    BookingTimeUnavailable = 4002,
    /// Party size outside the accepted range
    PartySizeOutOfRange = 4003,
    /// No table selected
    NoTablesSelected = 4004,
    /// Menu item not found
    MenuItemNotFound = 4005,
    /// Guest phone number is invalid
    InvalidPhoneNumber = 4006,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is not available for the requested slot
    TableUnavailable = 7002,
    /// Selected tables cannot seat the party
    TableCapacityInsufficient = 7003,
    /// Zone not found
    ZoneNotFound = 7101,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Booking
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::BookingTimeUnavailable => "Requested time is not bookable",
            ErrorCode::PartySizeOutOfRange => "Party size is out of range",
            ErrorCode::NoTablesSelected => "No table selected",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::InvalidPhoneNumber => "Invalid phone number",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableUnavailable => "Table is not available",
            ErrorCode::TableCapacityInsufficient => "Selected tables cannot seat the party",
            ErrorCode::ZoneNotFound => "Zone not found",

            // System
            ErrorCode::ConfigError => "Configuration error",
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
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Booking
            4001 => Ok(ErrorCode::RestaurantNotFound),
            4002 => Ok(ErrorCode::BookingTimeUnavailable),
            4003 => Ok(ErrorCode::PartySizeOutOfRange),
            4004 => Ok(ErrorCode::NoTablesSelected),
            4005 => Ok(ErrorCode::MenuItemNotFound),
            4006 => Ok(ErrorCode::InvalidPhoneNumber),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableUnavailable),
            7003 => Ok(ErrorCode::TableCapacityInsufficient),
            7101 => Ok(ErrorCode::ZoneNotFound),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
