//! Feed collector error types.

use thiserror::Error;

/// Errors from fetching, backing up, or delivering posts.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream or ingestion endpoint returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Upstream returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Backup file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
