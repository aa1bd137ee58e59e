//! Reddit listing client.
//!
//! Reads the public `/r/{subreddit}/new.json` listing and maps each child to a
//! [`FeedPost`]. No authentication; Reddit only asks for a descriptive
//! user agent.

use std::time::Duration;

use serde::Deserialize;

use crate::error::FeedError;
use crate::http::check_response;
use crate::post::{FeedPost, MAX_BODY_CHARS, MAX_TITLE_CHARS, format_created, truncate_chars};

const REDDIT_BASE_URL: &str = "https://www.reddit.com";

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Deserialize)]
struct Child {
    data: RedditPost,
}

#[derive(Deserialize)]
struct RedditPost {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    author: Option<String>,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: u64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    subreddit: String,
}

impl From<RedditPost> for FeedPost {
    fn from(p: RedditPost) -> Self {
        Self {
            post_id: p.id,
            title: truncate_chars(&p.title, MAX_TITLE_CHARS),
            text: truncate_chars(&p.selftext, MAX_BODY_CHARS),
            author: p.author.unwrap_or_else(|| "None".to_string()),
            score: p.score,
            num_comments: p.num_comments,
            url: p.url,
            created_utc: format_created(p.created_utc),
            subreddit: p.subreddit,
        }
    }
}

/// HTTP client for Reddit listings.
pub struct RedditClient {
    http: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Build a client with the given user agent and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Http` if the underlying client cannot be built.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: REDDIT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another host serving the same listing API.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The shared HTTP client, also used for batch delivery.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fetch the newest `limit` posts of `subreddit`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the request fails, Reddit returns a
    /// non-success status, or the listing cannot be decoded.
    pub async fn fetch_new(&self, subreddit: &str, limit: u32) -> Result<Vec<FeedPost>, FeedError> {
        let url = format!(
            "{}/r/{}/new.json?limit={limit}",
            self.base_url,
            urlencoding::encode(subreddit)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let posts = parse_listing(&body)?;
        tracing::debug!(subreddit, count = posts.len(), "fetched listing");
        Ok(posts)
    }
}

fn parse_listing(body: &str) -> Result<Vec<FeedPost>, FeedError> {
    let listing: Listing =
        serde_json::from_str(body).map_err(|e| FeedError::Parse(format!("reddit listing: {e}")))?;
    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| FeedPost::from(child.data))
        .collect())
}
