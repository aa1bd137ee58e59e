use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SentimentLabel;

/// Per-label counts over one owner's records. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AggregateSummary {
    #[serde(rename = "Positive")]
    pub positive: u64,
    #[serde(rename = "Negative")]
    pub negative: u64,
    #[serde(rename = "Neutral")]
    pub neutral: u64,
}

impl AggregateSummary {
    /// Count one more record with `label`.
    pub const fn record(&mut self, label: SentimentLabel) {
        self.add(label, 1);
    }

    /// Count `n` more records with `label`.
    pub const fn add(&mut self, label: SentimentLabel, n: u64) {
        match label {
            SentimentLabel::Positive => self.positive += n,
            SentimentLabel::Negative => self.negative += n,
            SentimentLabel::Neutral => self.neutral += n,
        }
    }

    #[must_use]
    pub const fn count(&self, label: SentimentLabel) -> u64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

impl FromIterator<SentimentLabel> for AggregateSummary {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut summary = Self::default();
        for label in iter {
            summary.record(label);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_summary_has_all_buckets() {
        let json = serde_json::to_value(AggregateSummary::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Positive": 0, "Negative": 0, "Neutral": 0})
        );
    }

    #[test]
    fn counts_sum_to_total() {
        let labels = [
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
        ];
        let summary: AggregateSummary = labels.into_iter().collect();
        assert_eq!(summary.count(SentimentLabel::Positive), 2);
        assert_eq!(summary.total(), labels.len() as u64);
    }
}
