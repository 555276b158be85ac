//! Reservation context and booking models

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::types::Timestamp;

use super::menu::MenuSelection;

/// Separator placed between the fields of a reservation seed
pub const SEED_SEPARATOR: char = '|';

/// The (restaurant, date, time) triple a booking query is made for
///
/// Plain value type, built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationContext {
    pub restaurant_id: String,
    /// Date (YYYY-MM-DD)
    pub date_ymd: String,
    /// Time slot (HH:mm)
    pub time: String,
}

impl ReservationContext {
    pub fn new(
        restaurant_id: impl Into<String>,
        date_ymd: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            date_ymd: date_ymd.into(),
            time: time.into(),
        }
    }

    /// Seed string: `restaurant_id|date_ymd|time`
    pub fn seed(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.restaurant_id,
            self.date_ymd,
            self.time,
            sep = SEED_SEPARATOR
        )
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking may move from `self` to `next`
    ///
    /// Pending bookings can be confirmed or cancelled, confirmed bookings
    /// can only be cancelled. Cancelled is final.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub restaurant_id: String,
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Time slot (HH:mm)
    pub time: String,
    pub party_size: u32,
    pub table_ids: Vec<String>,
    pub guest_name: String,
    pub guest_phone: String,
    pub note: Option<String>,
    #[serde(default)]
    pub menu: Vec<MenuSelection>,
}

impl BookingCreate {
    /// Reservation context this request targets
    pub fn context(&self) -> ReservationContext {
        ReservationContext::new(&self.restaurant_id, &self.date, &self.time)
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub restaurant_id: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub table_ids: Vec<String>,
    pub guest_name: String,
    /// Normalized (digits only)
    pub guest_phone: String,
    pub note: Option<String>,
    pub menu: Vec<MenuSelection>,
    pub menu_subtotal: f64,
    pub deposit: f64,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl Booking {
    /// Confirm a pending booking
    pub fn confirm(&mut self) -> AppResult<()> {
        self.transition(BookingStatus::Confirmed)
    }

    /// Cancel a pending or confirmed booking
    pub fn cancel(&mut self) -> AppResult<()> {
        self.transition(BookingStatus::Cancelled)
    }

    fn transition(&mut self, next: BookingStatus) -> AppResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!("Booking {} cannot go from {:?} to {:?}", self.id, self.status, next),
            )
            .with_detail("booking_id", self.id)
            .with_detail("status", format!("{:?}", self.status)));
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_joins_fields() {
        let ctx = ReservationContext::new("1", "2025-01-01", "18:00");
        assert_eq!(ctx.seed(), "1|2025-01-01|18:00");
    }

    #[test]
    fn test_seed_with_empty_fields() {
        let ctx = ReservationContext::new("", "", "");
        assert_eq!(ctx.seed(), "||");
    }

    #[test]
    fn test_booking_create_context() {
        let req: BookingCreate = serde_json::from_value(serde_json::json!({
            "restaurant_id": "2",
            "date": "2025-03-14",
            "time": "19:30",
            "party_size": 4,
            "table_ids": ["T1"],
            "guest_name": "Kim",
            "guest_phone": "010-1234-5678",
            "note": null
        }))
        .unwrap();
        assert!(req.menu.is_empty());
        assert_eq!(req.context(), ReservationContext::new("2", "2025-03-14", "19:30"));
    }

    #[test]
    fn test_booking_status_serde() {
        let json = serde_json::to_string(&BookingStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }

    fn pending_booking() -> Booking {
        Booking {
            id: 7,
            restaurant_id: "1".into(),
            date: "2025-01-01".into(),
            time: "18:00".into(),
            party_size: 2,
            table_ids: vec!["A1".into()],
            guest_name: "Kim".into(),
            guest_phone: "01012345678".into(),
            note: None,
            menu: vec![],
            menu_subtotal: 0.0,
            deposit: 0.0,
            status: BookingStatus::Pending,
            created_at: 0,
        }
    }

    #[test]
    fn test_confirm_then_cancel() {
        let mut booking = pending_booking();
        booking.confirm().unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        booking.cancel().unwrap();
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_invalid_status_transitions() {
        let mut booking = pending_booking();
        booking.cancel().unwrap();

        let err = booking.confirm().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(booking.status, BookingStatus::Cancelled);
        assert_eq!(booking.cancel().unwrap_err().code, ErrorCode::InvalidRequest);

        let mut booking = pending_booking();
        booking.confirm().unwrap();
        assert_eq!(booking.confirm().unwrap_err().code, ErrorCode::InvalidRequest);
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }
}
