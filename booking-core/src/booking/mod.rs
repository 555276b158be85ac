//! Table selection and booking creation

pub mod preview;
mod service;
pub mod slots;

pub use preview::{availability_preview, resolve_date};
pub use service::{BookingService, SlotAvailability, TableSelection};
pub use slots::{is_bookable_time, restaurant_slots, time_slots};
