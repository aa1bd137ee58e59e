//! # mood-db
//!
//! libSQL storage for Mood.
//!
//! Holds two tables: the append-only `sentiments` log (one row per classified
//! text, keyed by owner) and the `users` credential store. Every write is a
//! single autocommitted statement; the embedded engine serializes writers, so
//! no extra locking happens here.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: a libSQL database plus one connection.
pub struct MoodDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl MoodDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Creates missing tables on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let mood_db = Self { db, conn };
        mood_db.run_migrations().await?;
        tracing::debug!(path, "opened record store");
        Ok(mood_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> MoodDb {
        MoodDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["users", "sentiments"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Second run is a no-op
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn label_check_constraint() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO sentiments (owner, text, label, score, created_at)
                 VALUES ('alice', 'x', 'Ecstatic', 0.5, '2026-01-01 00:00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown label should be rejected");
    }

    #[tokio::test]
    async fn score_range_constraint() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO sentiments (owner, text, label, score, created_at)
                 VALUES ('alice', 'x', 'Positive', 1.5, '2026-01-01 00:00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "score outside [-1, 1] should be rejected");
    }

    #[tokio::test]
    async fn file_backed_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood.db");
        let path = path.to_string_lossy();

        {
            let db = MoodDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO users (username, password_hash, created_at)
                     VALUES ('alice', 'h', '2026-01-01 00:00:00')",
                    (),
                )
                .await
                .unwrap();
        }

        let reopened = MoodDb::open_local(&path).await.unwrap();
        let mut rows = reopened
            .conn()
            .query("SELECT COUNT(*) FROM users", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
