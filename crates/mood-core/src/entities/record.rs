use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SentimentLabel;
use crate::identity::Owner;

/// Upper bound on stored text, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

/// One classified piece of text filed under an owner. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SentimentRecord {
    pub id: i64,
    #[schemars(with = "String")]
    pub owner: Owner,
    pub text: String,
    pub label: SentimentLabel,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}
