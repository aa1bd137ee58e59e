//! Batch delivery to the ingestion endpoint.

use mood_core::responses::IngestResponse;

use crate::error::FeedError;
use crate::http::check_response;
use crate::post::FeedPost;

/// POST `posts` as a JSON array to `endpoint` and decode the reply.
///
/// # Errors
///
/// Returns `FeedError::Api` on a non-success status (including the
/// endpoint's own "No data received" 400), `FeedError::Http` on transport
/// failure, and `FeedError::Parse` if the reply is not an ingestion response.
pub async fn send_batch(
    http: &reqwest::Client,
    endpoint: &str,
    posts: &[FeedPost],
) -> Result<IngestResponse, FeedError> {
    let resp = check_response(http.post(endpoint).json(posts).send().await?).await?;
    let body = resp.text().await?;
    let reply: IngestResponse = serde_json::from_str(&body)
        .map_err(|e| FeedError::Parse(format!("ingestion response: {e}")))?;
    tracing::info!(
        endpoint,
        sent = posts.len(),
        inserted = reply.inserted,
        skipped = reply.skipped,
        failed = reply.failed,
        "delivered batch"
    );
    Ok(reply)
}
