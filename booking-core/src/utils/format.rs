//! Display formatting for phone numbers, prices and deposit rates

use rust_decimal::prelude::*;

use super::{AppError, AppResult};
use shared::ErrorCode;

/// Keep only ASCII digits
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Group a phone number for display
///
/// | digits | rule | example |
/// |---|---|---|
/// | 11 | 3-4-4 | 010-1234-5678 |
/// | 10, leading `02` | 2-4-4 | 02-1234-5678 |
/// | 10 | 3-3-4 | 031-123-4567 |
/// | 9, leading `02` | 2-3-4 | 02-123-4567 |
/// | 8 | 4-4 | 1588-1234 |
///
/// Anything else is returned as bare digits.
pub fn format_phone(raw: &str) -> String {
    let digits = normalize_phone(raw);
    let groups: &[usize] = match digits.len() {
        11 => &[3, 4, 4],
        10 if digits.starts_with("02") => &[2, 4, 4],
        10 => &[3, 3, 4],
        9 if digits.starts_with("02") => &[2, 3, 4],
        8 => &[4, 4],
        _ => return digits,
    };

    let mut parts = Vec::with_capacity(groups.len());
    let mut start = 0;
    for len in groups {
        parts.push(&digits[start..start + len]);
        start += len;
    }
    parts.join("-")
}

/// Validate a guest phone number, returning its normalized digits
pub fn validate_phone(raw: &str, min_digits: usize) -> AppResult<String> {
    let digits = normalize_phone(raw);
    if digits.len() < min_digits || digits.len() > 11 {
        return Err(AppError::with_message(
            ErrorCode::InvalidPhoneNumber,
            format!("Invalid phone number: {}", raw),
        )
        .with_detail("digits", digits.len())
        .with_detail("min_digits", min_digits));
    }
    Ok(digits)
}

/// Whole-unit price with comma grouping: `12000.0` -> `12,000`
pub fn format_price(amount: f64) -> String {
    let rounded = Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Deposit rate as a percentage: `10.0` -> `10%`, `12.5` -> `12.5%`
pub fn format_deposit_rate(percent: f64) -> String {
    let value = Decimal::from_f64(percent)
        .unwrap_or_default()
        .round_dp(2)
        .normalize();
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("010-1234-5678"), "01012345678");
        assert_eq!(normalize_phone(" (02) 123 4567 "), "021234567");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
        assert_eq!(format_phone("0212345678"), "02-1234-5678");
        assert_eq!(format_phone("0311234567"), "031-123-4567");
        assert_eq!(format_phone("021234567"), "02-123-4567");
        assert_eq!(format_phone("15881234"), "1588-1234");
        assert_eq!(format_phone("010-1234-5678"), "010-1234-5678");
    }

    #[test]
    fn test_format_phone_passthrough() {
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone("123456789"), "123456789");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("010-1234-5678", 9).unwrap(), "01012345678");
        assert_eq!(validate_phone("02-123-4567", 9).unwrap(), "021234567");

        let err = validate_phone("1234", 9).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPhoneNumber);
        assert!(validate_phone("010123456789", 9).is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1000.0), "1,000");
        assert_eq!(format_price(12000.0), "12,000");
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(12000.5), "12,001");
        assert_eq!(format_price(-4500.0), "-4,500");
        assert_eq!(format_price(-0.4), "0");
    }

    #[test]
    fn test_format_deposit_rate() {
        assert_eq!(format_deposit_rate(10.0), "10%");
        assert_eq!(format_deposit_rate(12.5), "12.5%");
        assert_eq!(format_deposit_rate(0.0), "0%");
        assert_eq!(format_deposit_rate(33.333), "33.33%");
    }
}
