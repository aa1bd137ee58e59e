//! Shared test utilities for mood-db unit tests.

use mood_core::identity::{Owner, Username};

use crate::MoodDb;
use crate::service::MoodService;

/// Create an in-memory `MoodService`.
pub async fn test_service() -> MoodService {
    let db = MoodDb::open_local(":memory:").await.unwrap();
    MoodService::from_db(db)
}

/// Owner for a registered user, bypassing signup.
pub fn user(name: &str) -> Owner {
    Owner::from(Username::parse(name).unwrap())
}
