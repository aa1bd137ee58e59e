//! The timed collection loop.
//!
//! Each cycle fetches new posts, optionally appends them to the local backup,
//! and delivers them to the ingestion endpoint. A failing cycle is logged and
//! the loop carries on at the next tick.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use mood_config::FeedConfig;
use mood_core::responses::IngestResponse;
use serde::Serialize;

use crate::backup;
use crate::delivery::send_batch;
use crate::error::FeedError;
use crate::reddit::RedditClient;

/// Outcome of one collection cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub fetched: usize,
    /// Endpoint reply, or `None` when nothing was fetched and nothing sent.
    pub delivered: Option<IngestResponse>,
}

pub struct Collector {
    client: RedditClient,
    subreddit: String,
    fetch_limit: u32,
    interval: Duration,
    backup_path: Option<PathBuf>,
    endpoint: String,
}

impl Collector {
    /// Build a collector from feed settings.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = RedditClient::new(
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_client(client, config))
    }

    /// Build a collector around an existing client.
    #[must_use]
    pub fn with_client(client: RedditClient, config: &FeedConfig) -> Self {
        Self {
            client,
            subreddit: config.subreddit.clone(),
            fetch_limit: config.effective_fetch_limit(),
            interval: Duration::from_secs(config.fetch_interval_secs.max(1)),
            backup_path: config
                .save_local
                .then(|| PathBuf::from(&config.backup_path)),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Run a single fetch, backup, deliver cycle.
    ///
    /// # Errors
    ///
    /// Returns the first [`FeedError`] hit. A failed backup stops the cycle
    /// before delivery so nothing is sent that was not saved.
    pub async fn run_once(&self) -> Result<CycleReport, FeedError> {
        let posts = self
            .client
            .fetch_new(&self.subreddit, self.fetch_limit)
            .await?;

        if posts.is_empty() {
            tracing::info!(subreddit = %self.subreddit, "no posts fetched");
            return Ok(CycleReport {
                fetched: 0,
                delivered: None,
            });
        }

        if let Some(path) = &self.backup_path {
            backup::append_posts(path, &posts)?;
        }

        let reply = send_batch(self.client.http(), &self.endpoint, &posts).await?;
        Ok(CycleReport {
            fetched: posts.len(),
            delivered: Some(reply),
        })
    }

    /// Repeat [`Self::run_once`] every interval until `shutdown` resolves.
    ///
    /// The first cycle starts immediately.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) {
        tracing::info!(
            subreddit = %self.subreddit,
            every_secs = self.interval.as_secs(),
            endpoint = %self.endpoint,
            "collector started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {
                    match self.run_once().await {
                        Ok(report) => tracing::debug!(fetched = report.fetched, "cycle done"),
                        Err(e) => tracing::warn!(error = %e, "collection cycle failed"),
                    }
                }
            }
        }
        tracing::info!("collector stopped");
    }
}
