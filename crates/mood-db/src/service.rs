//! Service layer wrapping the database handle.
//!
//! `MoodService` owns a `MoodDb`; all repo methods are implemented as
//! `impl MoodService` blocks under [`crate::repos`].

use crate::MoodDb;
use crate::error::DatabaseError;

pub struct MoodService {
    db: MoodDb,
}

impl MoodService {
    /// Create a new service over a local database file or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MoodDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MoodDb`.
    #[must_use]
    pub const fn from_db(db: MoodDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MoodDb {
        &self.db
    }
}
