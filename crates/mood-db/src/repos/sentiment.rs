//! Sentiment record repository.
//!
//! Append, recent history, and per-label aggregation over the `sentiments`
//! table. Records are never updated or deleted.

use chrono::Utc;

use mood_core::entities::{AggregateSummary, SentimentRecord};
use mood_core::enums::SentimentLabel;
use mood_core::identity::Owner;
use mood_sentiment::Classification;

use crate::error::DatabaseError;
use crate::helpers::{count_to_u64, parse_datetime, parse_enum};
use crate::service::MoodService;

impl MoodService {
    /// Append one classified text under `owner`.
    ///
    /// The caller has already trimmed and truncated `text`; this writes it as
    /// given in a single autocommitted statement.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn insert_record(
        &self,
        owner: &Owner,
        text: &str,
        classification: &Classification,
    ) -> Result<SentimentRecord, DatabaseError> {
        let now = Utc::now();
        let label = classification.label();
        let score = classification.score();

        self.db()
            .conn()
            .execute(
                "INSERT INTO sentiments (owner, text, label, score, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    owner.storage_key(),
                    text,
                    label.as_str(),
                    score,
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::debug!(id, %owner, %label, score, "stored sentiment record");

        Ok(SentimentRecord {
            id,
            owner: owner.clone(),
            text: text.to_string(),
            label,
            score,
            created_at: now,
        })
    }

    /// The `limit` most recent records for `owner`, newest first.
    ///
    /// Ordering is by insertion id, so it stays stable even when two records
    /// share a timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn history(
        &self,
        owner: &Owner,
        limit: u32,
    ) -> Result<Vec<SentimentRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, owner, text, label, score, created_at FROM sentiments
                 WHERE owner = ?1 ORDER BY id DESC LIMIT ?2",
                libsql::params![owner.storage_key(), i64::from(limit)],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// Per-label counts over every record of `owner`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or an unknown label is stored.
    pub async fn summary(&self, owner: &Owner) -> Result<AggregateSummary, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT label, COUNT(*) FROM sentiments WHERE owner = ?1 GROUP BY label",
                [owner.storage_key()],
            )
            .await?;

        let mut summary = AggregateSummary::default();
        while let Some(row) = rows.next().await? {
            let label: SentimentLabel = parse_enum(&row.get::<String>(0)?)?;
            let count = count_to_u64(row.get::<i64>(1)?)?;
            summary.add(label, count);
        }
        Ok(summary)
    }

    /// Total number of records filed under `owner`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_records(&self, owner: &Owner) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM sentiments WHERE owner = ?1",
                [owner.storage_key()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        count_to_u64(row.get::<i64>(0)?)
    }
}

fn row_to_record(row: &libsql::Row) -> Result<SentimentRecord, DatabaseError> {
    Ok(SentimentRecord {
        id: row.get::<i64>(0)?,
        owner: Owner::from_storage_key(&row.get::<String>(1)?)?,
        text: row.get::<String>(2)?,
        label: parse_enum(&row.get::<String>(3)?)?,
        score: row.get::<f64>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}
