//! Sentiment label enum and its thresholding rule.
//!
//! Labels serialize with their variant names (`"Positive"`, `"Negative"`,
//! `"Neutral"`), which is also the representation stored in SQL and the key
//! used by summary JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound scores at or above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

// ---------------------------------------------------------------------------
// SentimentLabel
// ---------------------------------------------------------------------------

/// Polarity bucket assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels, in summary display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Bucket a compound score. Both thresholds are inclusive.
    #[must_use]
    pub fn from_compound(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
