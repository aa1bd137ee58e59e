//! Behavioural properties of `Classifier::classify`.
//!
//! A fixed-output scorer isolates the thresholding and override rules from
//! the lexicon, and the VADER scorer covers a few reference phrases.

use mood_core::enums::SentimentLabel;
use mood_sentiment::{Classifier, OVERRIDE_SCORE, PolarityScorer};
use pretty_assertions::assert_eq;
use rstest::rstest;

struct Fixed(f64);

impl PolarityScorer for Fixed {
    fn compound(&self, _text: &str) -> f64 {
        self.0
    }
}

#[rstest]
#[case("I don't hate this product")]
#[case("i DON'T HATE mondays")]
#[case("There is no hate here")]
#[case("I would never hate you")]
#[case("It's not about hate")]
fn negated_hate_is_always_negative(#[case] text: &str) {
    // Even a scorer that says "very positive" is overridden.
    let result = Classifier::with_scorer(Fixed(0.95)).classify(text);
    assert_eq!(result.label(), SentimentLabel::Negative);
    assert!((result.score() - OVERRIDE_SCORE).abs() < f64::EPSILON);
}

#[rstest]
#[case(0.05, SentimentLabel::Positive)]
#[case(0.7, SentimentLabel::Positive)]
#[case(0.04, SentimentLabel::Neutral)]
#[case(-0.04, SentimentLabel::Neutral)]
#[case(-0.05, SentimentLabel::Negative)]
#[case(-0.6, SentimentLabel::Negative)]
fn thresholds_without_override(#[case] score: f64, #[case] expected: SentimentLabel) {
    let result = Classifier::with_scorer(Fixed(score)).classify("plain words");
    assert_eq!(result.label(), expected);
    assert!((result.score() - score).abs() < f64::EPSILON);
}

#[test]
fn hate_without_negation_uses_scorer() {
    let result = Classifier::with_scorer(Fixed(-0.57)).classify("I hate this");
    assert_eq!(result.label(), SentimentLabel::Negative);
    assert!((result.score() + 0.57).abs() < f64::EPSILON);
}

#[test]
fn out_of_range_scorer_output_is_clamped() {
    let high = Classifier::with_scorer(Fixed(3.0)).classify("x");
    assert!((high.score() - 1.0).abs() < f64::EPSILON);
    assert_eq!(high.label(), SentimentLabel::Positive);

    let nan = Classifier::with_scorer(Fixed(f64::NAN)).classify("x");
    assert_eq!(nan.label(), SentimentLabel::Neutral);
    assert!(nan.score().abs() < f64::EPSILON);
}

#[test]
fn reference_phrases() {
    let classifier = Classifier::new();

    let negated = classifier.classify("I don't hate this product");
    assert_eq!(negated.label(), SentimentLabel::Negative);
    assert!((negated.score() + 0.8).abs() < f64::EPSILON);

    let amazing = classifier.classify("This is amazing!");
    assert_eq!(amazing.label(), SentimentLabel::Positive);
    assert!(amazing.score() >= 0.05);

    let table = classifier.classify("It is a table.");
    assert_eq!(table.label(), SentimentLabel::Neutral);
    assert!(table.score() > -0.05 && table.score() < 0.05);
}

#[rstest]
#[case("lol", SentimentLabel::Positive, 0.4215)]
#[case(":)", SentimentLabel::Positive, 0.4588)]
#[case("wtf", SentimentLabel::Negative, -0.5859)]
#[case("Today SUX!", SentimentLabel::Negative, -0.5461)]
fn slang_and_emoticons_carry_polarity(
    #[case] text: &str,
    #[case] label: SentimentLabel,
    #[case] compound: f64,
) {
    let result = Classifier::new().classify(text);
    assert_eq!(result.label(), label);
    assert!((result.score() - compound).abs() < 1e-3, "{text} -> {}", result.score());
}

#[test]
fn classification_is_deterministic() {
    let classifier = Classifier::new();
    let texts = [
        "The update is great but the battery life is AWFUL!!",
        "meh",
        "Never so happy with a purchase",
        "",
    ];
    for text in texts {
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }
}

#[test]
fn arbitrary_unicode_does_not_panic() {
    let classifier = Classifier::new();
    for text in ["🙂🙂🙂", "ÄÖÜ!!!", "???!!!???", "n't"] {
        let result = classifier.classify(text);
        assert!((-1.0..=1.0).contains(&result.score()));
    }
}
