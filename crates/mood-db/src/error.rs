//! Database error types for mood-db.

use mood_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Signup with a username that already has a credential record.
    #[error("Username '{0}' already exists")]
    DuplicateUser(String),

    /// Login with an unknown username or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Input rejected before reaching SQL.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
