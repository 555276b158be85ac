//! Date and time helpers for reservation dates (YYYY-MM-DD) and slots (HH:mm)

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::{AppError, AppResult};

/// Wire format for reservation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for slot times
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date_ymd(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| AppError::invalid_format("date", date))
}

/// Parse a slot time (HH:mm, 24h, zero padded)
pub fn parse_time_hm(time: &str) -> AppResult<NaiveTime> {
    // chrono accepts "9:00", " 9:00" and "09: 0"; slots are always written zero padded
    let bytes = time.as_bytes();
    let padded = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !padded {
        return Err(AppError::invalid_format("time", time));
    }
    NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| AppError::invalid_format("time", time))
}

/// Format a date as YYYY-MM-DD
pub fn format_date_ymd(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a time as HH:mm
pub fn format_time_hm(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Display form of a date: `2025.01.01 (Wed)`
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{:04}.{:02}.{:02} ({})",
        date.year(),
        date.month(),
        date.day(),
        date.weekday()
    )
}

/// Display form of a slot time: `18:30` -> `6:30 PM`
pub fn format_display_time(time: &str) -> AppResult<String> {
    let t = parse_time_hm(time)?;
    let (is_pm, hour) = t.hour12();
    Ok(format!(
        "{}:{:02} {}",
        hour,
        t.minute(),
        if is_pm { "PM" } else { "AM" }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_parse_date() {
        let d = parse_date_ymd("2025-01-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(format_date_ymd(d), "2025-01-01");
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        for bad in ["2025/01/01", "2025-13-01", "2025-02-30", "", "tomorrow"] {
            let err = parse_date_ymd(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "{bad}");
        }
    }

    #[test]
    fn test_parse_time() {
        let t = parse_time_hm("18:00").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(format_time_hm(t), "18:00");
        assert_eq!(format_time_hm(parse_time_hm("09:05").unwrap()), "09:05");
    }

    #[test]
    fn test_parse_time_rejects_bad_input() {
        for bad in [
            "9:00", " 8:00", "08: 0", "0 8:00", "+8:00", "24:00", "18:60", "18-00", "",
            "18:00:00", "１8:00",
        ] {
            assert!(parse_time_hm(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_display_date(d), "2025.01.01 (Wed)");
    }

    #[test]
    fn test_display_time() {
        assert_eq!(format_display_time("18:30").unwrap(), "6:30 PM");
        assert_eq!(format_display_time("00:15").unwrap(), "12:15 AM");
        assert_eq!(format_display_time("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_display_time("09:05").unwrap(), "9:05 AM");
        assert!(format_display_time("noon").is_err());
    }
}
