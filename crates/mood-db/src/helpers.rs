//! Row-to-entity parsing helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed entity structs.
//! These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Convert a SQL `COUNT(*)` into `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for a negative count.
pub fn count_to_u64(n: i64) -> Result<u64, DatabaseError> {
    u64::try_from(n).map_err(|_| DatabaseError::Query(format!("negative count: {n}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::enums::SentimentLabel;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_label_enum() {
        let label: SentimentLabel = parse_enum("Negative").unwrap();
        assert_eq!(label, SentimentLabel::Negative);
        assert!(parse_enum::<SentimentLabel>("negative").is_err());
    }
}
