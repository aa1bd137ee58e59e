//! Shared HTTP response checks for the Reddit client and batch delivery.

use crate::error::FeedError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. A 429 becomes
/// [`FeedError::RateLimited`] (honoring `Retry-After`, 60 s if absent); any
/// other non-success status becomes [`FeedError::Api`] with the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FeedError> {
    if resp.status() == 429 {
        return Err(FeedError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(FeedError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
