//! # mood-core
//!
//! Core types and error types for Mood.
//!
//! This crate provides the foundational types shared across all Mood crates:
//! - Sentiment labels and their decision thresholds
//! - Owner identities (registered users vs. the reserved external feed)
//! - The persisted `SentimentRecord` and the derived `AggregateSummary`
//! - Batch ingestion reports and the JSON shapes of the ingestion boundary
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;
