//! # mood-config
//!
//! Layered configuration loading for Mood using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MOOD_*` prefix, `__` as separator)
//! 2. Project-level `.mood/config.toml`
//! 3. User-level `~/.config/mood/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MOOD_DB__PATH` -> `db.path`, `MOOD_FEED__SUBREDDIT` -> `feed.subreddit`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mood_config::MoodConfig;
//!
//! let config = MoodConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("records live in {}", config.db.path);
//! ```

mod db;
mod error;
mod feed;
mod general;
mod server;

pub use db::DbConfig;
pub use error::ConfigError;
pub use feed::{FeedConfig, MAX_FETCH_LIMIT};
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MoodConfig {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MoodConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mood/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MOOD_").split("__"))
    }

    /// Reject values that would make the collector or server unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db.path.trim().is_empty() {
            return Err(invalid("db.path", "must not be empty"));
        }
        if self.feed.subreddit.trim().is_empty() {
            return Err(invalid("feed.subreddit", "must not be empty"));
        }
        if self.feed.endpoint.trim().is_empty() {
            return Err(invalid("feed.endpoint", "must not be empty"));
        }
        if self.feed.fetch_interval_secs == 0 {
            return Err(invalid("feed.fetch_interval_secs", "must be at least 1"));
        }
        if self.server.max_body_bytes == 0 {
            return Err(invalid("server.max_body_bytes", "must be at least 1"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mood").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
