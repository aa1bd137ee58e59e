//! Batch ingestion reports and the JSON shapes of the ingestion boundary.
//!
//! [`BatchReport`] is the full per-item outcome of one batch, including
//! failure details for logging. [`IngestResponse`] is what goes over the
//! wire: counts and status only, never internal error text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a single batch item could not be ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemFailureReason {
    NotAnObject,
    MissingTitle,
    InvalidTitle,
    Storage,
}

/// A batch item that was dropped because of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemFailure {
    /// Zero-based position in the submitted batch.
    pub index: usize,
    pub reason: ItemFailureReason,
    pub detail: String,
}

/// Outcome of one batch ingestion.
///
/// `inserted + skipped + failures.len()` equals the batch length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchReport {
    pub inserted: usize,
    /// Items whose title was blank after truncation and trimming.
    pub skipped: usize,
    pub failures: Vec<ItemFailure>,
}

impl BatchReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.inserted + self.skipped + self.failed()
    }
}

/// Top-level status field of every ingestion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Success body of `POST /ingest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IngestResponse {
    pub status: ResponseStatus,
    pub inserted: usize,
    #[serde(default)]
    pub skipped: usize,
    #[serde(default)]
    pub failed: usize,
}

impl From<&BatchReport> for IngestResponse {
    fn from(report: &BatchReport) -> Self {
        Self {
            status: ResponseStatus::Success,
            inserted: report.inserted,
            skipped: report.skipped,
            failed: report.failed(),
        }
    }
}

/// Error body of the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}
