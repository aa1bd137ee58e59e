//! # mood-ingest
//!
//! The ingestion pipeline: text comes in through interactive submission or as
//! a batch of external posts, gets classified, and is appended to the record
//! store under its owner. [`server`] exposes the batch path and the read
//! queries over HTTP.

pub mod error;
pub mod payload;
pub mod pipeline;
pub mod server;

pub use error::IngestError;
pub use pipeline::Ingestor;
pub use server::IngestServer;
