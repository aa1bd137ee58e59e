//! External feed collector configuration.

use serde::{Deserialize, Serialize};

fn default_subreddit() -> String {
    "technology".to_string()
}

const fn default_fetch_limit() -> u32 {
    20
}

const fn default_fetch_interval_secs() -> u64 {
    60
}

const fn default_save_local() -> bool {
    true
}

fn default_backup_path() -> String {
    "reddit_data.jsonl".to_string()
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8081/ingest".to_string()
}

fn default_user_agent() -> String {
    "mood-feed/0.1".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    10
}

/// Largest listing page the upstream API serves.
pub const MAX_FETCH_LIMIT: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Subreddit to poll for new posts.
    #[serde(default = "default_subreddit")]
    pub subreddit: String,

    /// Posts requested per cycle. Clamped to `1..=100` by [`Self::effective_fetch_limit`].
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: u32,

    /// Seconds between fetch cycles.
    #[serde(default = "default_fetch_interval_secs")]
    pub fetch_interval_secs: u64,

    /// Whether to append each fetched batch to a local JSONL backup.
    #[serde(default = "default_save_local")]
    pub save_local: bool,

    #[serde(default = "default_backup_path")]
    pub backup_path: String,

    /// Ingestion endpoint batches are POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout for both fetch and delivery.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            subreddit: default_subreddit(),
            fetch_limit: default_fetch_limit(),
            fetch_interval_secs: default_fetch_interval_secs(),
            save_local: default_save_local(),
            backup_path: default_backup_path(),
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FeedConfig {
    pub fn effective_fetch_limit(&self) -> u32 {
        self.fetch_limit.clamp(1, MAX_FETCH_LIMIT)
    }
}
