//! Cross-cutting error types for Mood.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `IngestError`) are defined
//! in their respective crates. The `mood` binary converges them via `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Mood crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A reserved system identity was used where a user identity is required.
    #[error("'{0}' is a reserved identity and cannot be used as a username")]
    ReservedIdentity(String),
}
