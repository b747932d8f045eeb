use chrono::NaiveDateTime;

use crate::error::{MeetError, MeetResult};

/// Input format for meeting timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> MeetResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(MeetError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp.
pub fn timestamp(value: &str, field: &str) -> MeetResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        MeetError::InvalidValue {
            field: field.to_string(),
            value: value.trim().to_string(),
        }
    })
}

/// Parses an optional timestamp. Blank input means "not given".
pub fn optional_timestamp(value: &str, field: &str) -> MeetResult<Option<NaiveDateTime>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        timestamp(value, field).map(Some)
    }
}

/// Parses a non-negative count.
pub fn count(value: &str, field: &str) -> MeetResult<usize> {
    value.trim().parse().map_err(|_| MeetError::InvalidValue {
        field: field.to_string(),
        value: value.trim().to_string(),
    })
}
