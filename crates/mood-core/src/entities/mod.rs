//! Entity structs for the Mood domain.

mod record;
mod summary;

pub use record::{MAX_TEXT_CHARS, SentimentRecord};
pub use summary::AggregateSummary;
