//! Input validation helpers
//!
//! Centralized text length constants and validation functions for booking
//! requests.

use super::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 100;

/// Booking notes (allergies, occasion, seating wishes)
pub const MAX_NOTE_LEN: usize = 500;

/// Most portions a single menu line may pre-order
pub const MAX_MENU_QUANTITY: u32 = 99;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Kim", "guest_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "guest_name", MAX_NAME_LEN).is_err());
        let long = "a".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "guest_name", MAX_NAME_LEN).unwrap_err();
        assert!(err.message.contains("too long"));
    }

    #[test]
    fn test_required_text_counts_chars() {
        // 100 Hangul syllables are 300 bytes but within the limit
        let name = "김".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "guest_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("window seat".into()), "note", MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "note", MAX_NOTE_LEN).is_err());
    }
}
