//! Record store location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "mood.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DbConfig {
    /// Path to the libSQL database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DbConfig {
    /// Whether records vanish when the process exits.
    pub fn is_ephemeral(&self) -> bool {
        self.path == ":memory:"
    }
}
