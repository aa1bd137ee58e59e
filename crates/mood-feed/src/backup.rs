//! Local JSONL backup of fetched posts.
//!
//! One JSON object per line, appended per cycle with
//! `serde_jsonlines::append_json_lines`. The file is only ever appended to.

use std::path::Path;

use crate::error::FeedError;
use crate::post::FeedPost;

/// Append `posts` to the backup file at `path`, creating it (and its parent
/// directory) if needed.
///
/// # Errors
///
/// Returns `FeedError::Io` if the directory or file cannot be written.
pub fn append_posts(path: &Path, posts: &[FeedPost]) -> Result<(), FeedError> {
    if posts.is_empty() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    serde_jsonlines::append_json_lines(path, posts)?;
    tracing::debug!(path = %path.display(), count = posts.len(), "appended backup");
    Ok(())
}
