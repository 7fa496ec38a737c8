//! Generation-service configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:1234/v1".to_string()
}

fn default_api_key() -> String {
    "not-needed".to_string()
}

fn default_model() -> String {
    "local-model".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

/// Per-call timeout; a stuck service call fails the call (and the engine
/// substitutes empty text) instead of blocking the pipeline forever.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// OpenAI-compatible endpoint base, e.g. `http://localhost:1234/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token. Local servers typically ignore it.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Model identifier passed through to the service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
