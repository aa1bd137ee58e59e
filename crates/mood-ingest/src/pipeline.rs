//! The ingestion pipeline: normalize, classify, persist.
//!
//! Both entry points share one write path. Interactive submission propagates
//! storage errors; batch ingestion turns every per-item problem into an
//! [`ItemFailure`] and keeps going.

use serde_json::Value;

use mood_core::entities::{AggregateSummary, SentimentRecord};
use mood_core::identity::Owner;
use mood_core::responses::{BatchReport, ItemFailure, ItemFailureReason};
use mood_db::service::MoodService;
use mood_sentiment::{Classifier, LexiconScorer, PolarityScorer};

use crate::error::IngestError;
use crate::payload::{batch_items, extract_title, normalize_text, parse_body};

pub struct Ingestor<S = LexiconScorer> {
    service: MoodService,
    classifier: Classifier<S>,
}

impl Ingestor {
    /// Pipeline over `service` using the bundled lexicon classifier.
    #[must_use]
    pub fn new(service: MoodService) -> Self {
        Self::with_classifier(service, Classifier::new())
    }
}

impl<S: PolarityScorer> Ingestor<S> {
    pub const fn with_classifier(service: MoodService, classifier: Classifier<S>) -> Self {
        Self {
            service,
            classifier,
        }
    }

    #[must_use]
    pub const fn service(&self) -> &MoodService {
        &self.service
    }

    /// Classify and store one piece of text for `owner`.
    ///
    /// Blank text is a no-op and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Database` if the insert fails.
    pub async fn submit(
        &self,
        owner: &Owner,
        raw: &str,
    ) -> Result<Option<SentimentRecord>, IngestError> {
        let Some(text) = normalize_text(raw) else {
            tracing::debug!(%owner, "blank submission ignored");
            return Ok(None);
        };
        let record = self.store(owner, &text).await?;
        Ok(Some(record))
    }

    /// Ingest a batch payload under the external feed identity.
    ///
    /// Items are processed in order; inserts already committed stay committed
    /// whatever happens to later items.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::NoData` or `IngestError::Malformed` if the
    /// payload itself is unusable. Nothing is inserted in that case.
    pub async fn ingest_batch(&self, payload: &Value) -> Result<BatchReport, IngestError> {
        let items = batch_items(payload)?;
        let owner = Owner::ExternalFeed;
        let mut report = BatchReport::default();

        for (index, item) in items.iter().enumerate() {
            let title = match extract_title(item) {
                Ok(title) => title,
                Err((reason, detail)) => {
                    tracing::warn!(index, ?reason, %detail, "skipping batch item");
                    report.failures.push(ItemFailure {
                        index,
                        reason,
                        detail,
                    });
                    continue;
                }
            };

            let Some(text) = normalize_text(title) else {
                report.skipped += 1;
                continue;
            };

            match self.store(&owner, &text).await {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    tracing::warn!(index, error = %e, "failed to store batch item");
                    report.failures.push(ItemFailure {
                        index,
                        reason: ItemFailureReason::Storage,
                        detail: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped,
            failed = report.failed(),
            "batch ingested"
        );
        Ok(report)
    }

    /// Parse a raw request body and ingest it as a batch.
    ///
    /// # Errors
    ///
    /// See [`Self::ingest_batch`]; an unparseable body is `IngestError::NoData`.
    pub async fn ingest_json(&self, body: &[u8]) -> Result<BatchReport, IngestError> {
        let payload = parse_body(body)?;
        self.ingest_batch(&payload).await
    }

    /// Most recent records for `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Database` if the query fails.
    pub async fn history(
        &self,
        owner: &Owner,
        limit: u32,
    ) -> Result<Vec<SentimentRecord>, IngestError> {
        Ok(self.service.history(owner, limit).await?)
    }

    /// Per-label counts over all of `owner`'s records.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Database` if the query fails.
    pub async fn summary(&self, owner: &Owner) -> Result<AggregateSummary, IngestError> {
        Ok(self.service.summary(owner).await?)
    }

    async fn store(&self, owner: &Owner, text: &str) -> Result<SentimentRecord, IngestError> {
        let classification = self.classifier.classify(text);
        Ok(self
            .service
            .insert_record(owner, text, &classification)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::enums::SentimentLabel;
    use mood_core::identity::Username;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn ingestor() -> Ingestor {
        Ingestor::new(MoodService::new_local(":memory:").await.unwrap())
    }

    fn alice() -> Owner {
        Owner::from(Username::parse("alice").unwrap())
    }

    #[tokio::test]
    async fn submit_stores_trimmed_text() {
        let ing = ingestor().await;
        let record = ing
            .submit(&alice(), "  I don't hate this product \n")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.text, "I don't hate this product");
        assert_eq!(record.label, SentimentLabel::Negative);
        assert!((record.score + 0.8).abs() < f64::EPSILON);
        assert_eq!(ing.history(&alice(), 10).await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn blank_submit_is_a_noop() {
        let ing = ingestor().await;
        assert!(ing.submit(&alice(), "").await.unwrap().is_none());
        assert!(ing.submit(&alice(), "   ").await.unwrap().is_none());
        assert_eq!(ing.service().count_records(&alice()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn batch_counts_inserted_skipped_and_failed() {
        let ing = ingestor().await;
        let payload = json!([
            {"title": "This is amazing!"},
            {"title": "   "},
            {"text": "no title here"},
            {"title": "It is a table."},
            42,
            {"title": ""},
        ]);

        let report = ing.ingest_batch(&payload).await.unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.processed(), 6);

        let reasons: Vec<_> = report.failures.iter().map(|f| (f.index, f.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (2, ItemFailureReason::MissingTitle),
                (4, ItemFailureReason::NotAnObject)
            ]
        );

        let feed = ing.history(&Owner::ExternalFeed, 10).await.unwrap();
        let texts: Vec<&str> = feed.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["It is a table.", "This is amazing!"]);
        assert!(ing.history(&alice(), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn structural_errors_insert_nothing() {
        let ing = ingestor().await;
        assert!(matches!(
            ing.ingest_batch(&Value::Null).await,
            Err(IngestError::NoData)
        ));
        assert!(matches!(
            ing.ingest_batch(&json!({"title": "x"})).await,
            Err(IngestError::Malformed(_))
        ));
        assert!(matches!(ing.ingest_json(b"{oops").await, Err(IngestError::NoData)));
        assert_eq!(
            ing.service()
                .count_records(&Owner::ExternalFeed)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn all_blank_batch_succeeds_with_zero() {
        let ing = ingestor().await;
        let report = ing
            .ingest_json(br#"[{"title": " "}, {"title": "\t"}]"#)
            .await
            .unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, 2);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn summary_matches_history_for_feed() {
        let ing = ingestor().await;
        let payload = json!([
            {"title": "great"},
            {"title": "terrible"},
            {"title": "I never hate Mondays"},
            {"title": "It is a table."}
        ]);
        ing.ingest_batch(&payload).await.unwrap();

        let summary = ing.summary(&Owner::ExternalFeed).await.unwrap();
        assert_eq!(summary.count(SentimentLabel::Positive), 1);
        assert_eq!(summary.count(SentimentLabel::Negative), 2);
        assert_eq!(summary.count(SentimentLabel::Neutral), 1);
        assert_eq!(summary.total(), 4);
    }
}
