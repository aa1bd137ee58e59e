//! # mood-sentiment
//!
//! Sentiment classification for Mood.
//!
//! [`Classifier::classify`] maps arbitrary text to a [`Classification`]: a
//! [`SentimentLabel`] plus a compound polarity score in [-1, 1]. The score
//! comes from a [`PolarityScorer`] (by default the VADER-backed
//! [`LexiconScorer`]), then one narrow correction runs on top of it: text containing a negation
//! marker together with "hate" is forced to `Negative` at `-0.8`.
//!
//! Classification never fails and has no side effects.

pub mod scorer;

use serde::Serialize;

use mood_core::enums::SentimentLabel;

pub use scorer::{LexiconScorer, PolarityScorer};

/// Substrings (of the lowercased text) that count as negation for the override.
pub const NEGATION_MARKERS: [&str; 4] = ["no ", "not ", "never ", "n't "];

/// Keyword that must co-occur with a negation marker to trigger the override.
pub const OVERRIDE_KEYWORD: &str = "hate";

/// Score assigned when the negated-hate override fires.
pub const OVERRIDE_SCORE: f64 = -0.8;

/// A label and the score it was derived from.
///
/// Only [`Classifier::classify`] constructs these, so the label always agrees
/// with the score under the classifier's decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    label: SentimentLabel,
    score: f64,
}

impl Classification {
    #[must_use]
    pub const fn label(&self) -> SentimentLabel {
        self.label
    }

    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

/// Scores text and applies the negated-hate override.
#[derive(Debug, Clone)]
pub struct Classifier<S = LexiconScorer> {
    scorer: S,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Classifier backed by the VADER lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scorer(LexiconScorer::default())
    }
}

impl<S: PolarityScorer> Classifier<S> {
    pub const fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify `text`. Blank input is the caller's concern; it scores neutral.
    pub fn classify(&self, text: &str) -> Classification {
        if is_negated_hate(text) {
            tracing::trace!("negated-hate override applied");
            return Classification {
                label: SentimentLabel::Negative,
                score: OVERRIDE_SCORE,
            };
        }

        let raw = self.scorer.compound(text);
        // NaN from a misbehaving scorer is treated as no signal.
        let score = if raw.is_nan() { 0.0 } else { raw.clamp(-1.0, 1.0) };
        Classification {
            label: SentimentLabel::from_compound(score),
            score,
        }
    }
}

/// The literal override condition: any negation marker and "hate" appear in
/// the lowercased text.
#[must_use]
pub fn is_negated_hate(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains(OVERRIDE_KEYWORD) && NEGATION_MARKERS.iter().any(|m| lower.contains(m))
}
