//! HTTP ingestion server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    "127.0.0.1:8081".to_string()
}

/// Default request body cap: 1 MiB.
const fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Requests with a larger body are rejected with 413.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}
