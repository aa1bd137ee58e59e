//! # mood-feed
//!
//! The external producer: polls a subreddit's newest posts on a timer, keeps
//! an optional JSONL backup, and POSTs each batch to the Mood ingestion
//! endpoint. It shares no storage with the pipeline; the HTTP contract in
//! `mood_core::responses` is the only coupling.

pub mod backup;
pub mod collector;
pub mod delivery;
mod error;
mod http;
pub mod post;
pub mod reddit;

pub use collector::{Collector, CycleReport};
pub use error::FeedError;
pub use post::FeedPost;
pub use reddit::RedditClient;
