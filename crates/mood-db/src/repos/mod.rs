//! Repository modules for Mood storage.
//!
//! Each module adds methods to `MoodService` via `impl MoodService` blocks.

pub mod account;
pub mod sentiment;
