//! # gloss-config
//!
//! Layered configuration loading for gloss using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GLOSS_*` prefix, `__` as separator)
//! 2. Project-level `.gloss/config.toml`
//! 3. User-level `~/.config/gloss/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GLOSS_LLM__MODEL` -> `llm.model`,
//! `GLOSS_LLM__BASE_URL` -> `llm.base_url`, and so on; the `__` (double
//! underscore) separates nested config sections.

mod error;
mod llm;

pub use error::ConfigError;
pub use llm::LlmConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlossConfig {
    #[serde(default)]
    pub llm: LlmConfig,
}

impl GlossConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables). Does NOT call `dotenvy`; use [`Self::load_with_dotenv`]
    /// if `.env` file loading is needed.
    ///
    /// # Errors
    /// `ConfigError::Figment` if any layer fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. The typical entry
    /// point for the CLI and tests.
    ///
    /// # Errors
    /// `ConfigError::Figment` if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".gloss/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GLOSS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gloss").join("config.toml"))
    }
}
