//! Error types for the ingestion pipeline.

use mood_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Batch payload absent, unparseable, `null`, or an empty array.
    #[error("No data received")]
    NoData,

    /// Batch payload parsed but is not a JSON array.
    #[error("Malformed payload: expected a JSON array, found {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// The HTTP listener could not start or stopped unexpectedly.
    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
