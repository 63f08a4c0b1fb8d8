//! Input validation helpers
//!
//! The UI disables actions on bad input, but the manager does not trust that:
//! every command handler validates its own payload with these helpers.

use chrono::NaiveTime;

use crate::floor::traits::FloorError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest (princess) names, cast names
pub const MAX_NAME_LEN: usize = 200;

/// Table numbers as printed on the floor plan
pub const MAX_TABLE_NUMBER_LEN: usize = 32;

/// Plan / help / notes free text
pub const MAX_NOTE_LEN: usize = 500;

/// Client-generated ids
pub const MAX_ID_LEN: usize = 128;

/// Start time format (`21:00`)
pub const START_TIME_FORMAT: &str = "%H:%M";

// ── Validation helpers (floor actions) ──────────────────────────────

/// Validate a required string (non-empty after trim + max length).
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), FloorError> {
    if value.trim().is_empty() {
        return Err(FloorError::InvalidInput(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate a string that may be empty (max length only).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), FloorError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(FloorError::InvalidInput(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate an optional string, if present, against the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), FloorError> {
    match value {
        Some(v) => validate_text_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Trim a table number and reject empty / whitespace-only input.
pub fn normalize_table_number(value: &str) -> Result<String, FloorError> {
    let trimmed = value.trim();
    validate_required_text(trimmed, "table_number", MAX_TABLE_NUMBER_LEN)?;
    Ok(trimmed.to_string())
}

/// Validate a start time: required, `HH:MM`.
pub fn validate_start_time(value: &str) -> Result<(), FloorError> {
    if value.trim().is_empty() {
        return Err(FloorError::InvalidInput("time must not be empty".to_string()));
    }
    NaiveTime::parse_from_str(value, START_TIME_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            FloorError::InvalidInput(format!("Invalid start time: {value} (expected HH:MM)"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_table_number() {
        assert_eq!(normalize_table_number("  T1 ").unwrap(), "T1");
        assert!(normalize_table_number("").is_err());
        assert!(normalize_table_number("   ").is_err());
        assert!(normalize_table_number(&"9".repeat(MAX_TABLE_NUMBER_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_start_time() {
        assert!(validate_start_time("21:00").is_ok());
        assert!(validate_start_time("09:05").is_ok());
        assert!(validate_start_time("").is_err());
        assert!(validate_start_time("25:00").is_err());
        assert!(validate_start_time("9pm").is_err());
    }

    #[test]
    fn test_text_length_counts_chars() {
        // 200 multi-byte chars are within the limit
        let name = "姫".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "princess", MAX_NAME_LEN).is_ok());
        let too_long = "姫".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&too_long, "princess", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        let long_note = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long_note, "note", MAX_NOTE_LEN).is_err());
    }
}
