//! Bookable time slots

use chrono::Duration;
use shared::models::Restaurant;

use crate::utils::time::{format_time_hm, parse_time_hm};
use crate::utils::{AppError, AppResult};

/// Slot start times between `open` and `close`
///
/// Slots begin at `open` and step by `interval_minutes`; a slot is offered
/// only when it ends no later than `close`.
pub fn time_slots(open: &str, close: &str, interval_minutes: u32) -> AppResult<Vec<String>> {
    if interval_minutes == 0 {
        return Err(AppError::validation("Slot interval must be at least 1 minute"));
    }
    let open_t = parse_time_hm(open)?;
    let close_t = parse_time_hm(close)?;
    if close_t <= open_t {
        return Err(AppError::validation(format!(
            "Closing time {} must be after opening time {}",
            close, open
        )));
    }

    let step = Duration::minutes(i64::from(interval_minutes));
    let mut slots = Vec::new();
    let mut start = open_t;
    loop {
        let (end, wrapped) = start.overflowing_add_signed(step);
        if wrapped != 0 || end > close_t {
            break;
        }
        slots.push(format_time_hm(start));
        start = end;
    }
    Ok(slots)
}

/// Slots offered by a restaurant
pub fn restaurant_slots(restaurant: &Restaurant, interval_minutes: u32) -> AppResult<Vec<String>> {
    time_slots(&restaurant.open_time, &restaurant.close_time, interval_minutes)
}

/// Whether `time` is one of the restaurant's slot start times
pub fn is_bookable_time(
    restaurant: &Restaurant,
    time: &str,
    interval_minutes: u32,
) -> AppResult<bool> {
    let time = format_time_hm(parse_time_hm(time)?);
    Ok(restaurant_slots(restaurant, interval_minutes)?.contains(&time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DepositPolicy;

    fn restaurant(open: &str, close: &str) -> Restaurant {
        Restaurant {
            id: "1".into(),
            name: "Test".into(),
            cuisine: "Test".into(),
            address: "Nowhere".into(),
            phone: "021234567".into(),
            description: None,
            open_time: open.into(),
            close_time: close.into(),
            deposit: DepositPolicy::None,
            image_url: None,
        }
    }

    #[test]
    fn test_half_hour_slots() {
        let slots = time_slots("17:00", "19:00", 30).unwrap();
        assert_eq!(slots, vec!["17:00", "17:30", "18:00", "18:30"]);
    }

    #[test]
    fn test_last_slot_must_fit() {
        let slots = time_slots("17:00", "18:45", 30).unwrap();
        assert_eq!(slots, vec!["17:00", "17:30", "18:00"]);
    }

    #[test]
    fn test_slot_longer_than_opening_hours() {
        assert!(time_slots("17:00", "17:20", 30).unwrap().is_empty());
    }

    #[test]
    fn test_slots_up_to_midnight() {
        let slots = time_slots("22:00", "23:59", 60).unwrap();
        assert_eq!(slots, vec!["22:00"]);
        let slots = time_slots("00:00", "23:59", 1440).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(time_slots("18:00", "18:00", 30).is_err());
        assert!(time_slots("22:00", "02:00", 30).is_err());
        assert!(time_slots("17:00", "19:00", 0).is_err());
        assert!(time_slots("5pm", "19:00", 30).is_err());
    }

    #[test]
    fn test_is_bookable_time() {
        let r = restaurant("11:30", "22:00");
        assert!(is_bookable_time(&r, "11:30", 30).unwrap());
        assert!(is_bookable_time(&r, "21:30", 30).unwrap());
        assert!(!is_bookable_time(&r, "22:00", 30).unwrap());
        assert!(!is_bookable_time(&r, "11:45", 30).unwrap());
        assert!(!is_bookable_time(&r, "09:00", 30).unwrap());
        assert!(is_bookable_time(&r, "25:00", 30).is_err());
    }

    #[test]
    fn test_restaurant_slots_count() {
        let r = restaurant("11:30", "22:00");
        assert_eq!(restaurant_slots(&r, 30).unwrap().len(), 21);
    }
}
