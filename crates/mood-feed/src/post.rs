//! The post shape delivered to the ingestion endpoint and written to backups.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Title length kept from upstream, in characters.
pub const MAX_TITLE_CHARS: usize = 300;

/// Body length kept from upstream, in characters.
pub const MAX_BODY_CHARS: usize = 1000;

/// Timestamp layout of [`FeedPost::created_utc`].
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One collected post. `title` is what ingestion classifies; the other fields
/// travel along for the backup and are ignored by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    pub post_id: String,
    pub title: String,
    pub text: String,
    pub author: String,
    pub score: i64,
    pub num_comments: u64,
    pub url: String,
    pub created_utc: String,
    pub subreddit: String,
}

/// First `max` characters of `s`.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Render a Unix timestamp (seconds, possibly fractional) in UTC.
///
/// Out-of-range values render as an empty string.
#[must_use]
pub fn format_created(unix_secs: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let secs = unix_secs.floor() as i64;
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format(CREATED_FORMAT).to_string())
        .unwrap_or_default()
}
