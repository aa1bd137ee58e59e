//! Compound polarity scoring.
//!
//! The default scorer is VADER (`vader_sentiment`), which ships the full
//! rated word and emoticon lexicon along with its negation, booster, caps and
//! punctuation rules. Compound scores are rounded to four decimals.

use std::sync::OnceLock;

use vader_sentiment::SentimentIntensityAnalyzer;

static ANALYZER: OnceLock<SentimentIntensityAnalyzer<'static>> = OnceLock::new();

fn analyzer() -> &'static SentimentIntensityAnalyzer<'static> {
    ANALYZER.get_or_init(SentimentIntensityAnalyzer::new)
}

/// Anything that maps text to a compound score in [-1, 1].
pub trait PolarityScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// VADER-backed implementation of [`PolarityScorer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = analyzer().polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        round4(compound)
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
