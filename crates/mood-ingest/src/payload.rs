//! Batch payload parsing and text normalization.
//!
//! A batch is a JSON array of objects, each carrying a string `title`. The
//! top-level shape is checked once; each item is then judged on its own so a
//! bad item never sinks the rest of the batch.

use serde_json::Value;

use mood_core::entities::MAX_TEXT_CHARS;
use mood_core::responses::ItemFailureReason;

use crate::error::IngestError;

/// Decode a request body into a JSON value.
///
/// An empty or unparseable body is reported as [`IngestError::NoData`].
///
/// # Errors
///
/// Returns `IngestError::NoData` if the body is not valid JSON.
pub fn parse_body(body: &[u8]) -> Result<Value, IngestError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "unparseable batch body");
        IngestError::NoData
    })
}

/// Check the top-level shape and return the batch items.
///
/// # Errors
///
/// Returns `IngestError::NoData` for `null` or an empty array and
/// `IngestError::Malformed` for any other non-array value.
pub fn batch_items(payload: &Value) -> Result<&[Value], IngestError> {
    match payload {
        Value::Null => Err(IngestError::NoData),
        Value::Array(items) if items.is_empty() => Err(IngestError::NoData),
        Value::Array(items) => Ok(items),
        other => Err(IngestError::Malformed(json_kind(other))),
    }
}

/// Pull the `title` string out of one batch item.
///
/// # Errors
///
/// Returns the failure reason and a short detail when the item is not an
/// object, has no `title`, or has a non-string `title`.
pub fn extract_title(item: &Value) -> Result<&str, (ItemFailureReason, String)> {
    let Value::Object(fields) = item else {
        return Err((
            ItemFailureReason::NotAnObject,
            format!("expected an object, found {}", json_kind(item)),
        ));
    };
    match fields.get("title") {
        None | Some(Value::Null) => Err((
            ItemFailureReason::MissingTitle,
            "item has no title field".to_string(),
        )),
        Some(Value::String(title)) => Ok(title),
        Some(other) => Err((
            ItemFailureReason::InvalidTitle,
            format!("title must be a string, found {}", json_kind(other)),
        )),
    }
}

/// Truncate to [`MAX_TEXT_CHARS`] characters, then trim.
///
/// Returns `None` when nothing but whitespace remains.
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let truncated = match raw.char_indices().nth(MAX_TEXT_CHARS) {
        Some((cut, _)) => &raw[..cut],
        None => raw,
    };
    let trimmed = truncated.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
