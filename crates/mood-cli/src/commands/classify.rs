use mood_sentiment::{Classification, Classifier};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::output::output;

pub fn handle(args: &ClassifyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    match classify_text(&args.text) {
        Some(classification) => output(&classification, flags.format),
        None => output(&json!({"status": "skipped"}), flags.format),
    }
}

/// Blank text is never handed to the classifier.
fn classify_text(text: &str) -> Option<Classification> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Classifier::new().classify(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::enums::SentimentLabel;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_text_is_skipped() {
        assert_eq!(classify_text(""), None);
        assert_eq!(classify_text(" \t\n "), None);
    }

    #[test]
    fn text_is_trimmed_before_classifying() {
        let padded = classify_text("  I don't hate this product  ").unwrap();
        assert_eq!(padded.label(), SentimentLabel::Negative);
        assert_eq!(classify_text("lol"), Some(Classifier::new().classify("lol")));
    }
}
