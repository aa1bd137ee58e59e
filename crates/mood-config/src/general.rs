//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default number of records returned by history queries.
const fn default_history_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default limit for `history` when none is given.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}
