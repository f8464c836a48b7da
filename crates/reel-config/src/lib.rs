//! # reel-config
//!
//! Layered configuration loading for reel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REEL_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (e.g. `reel --config path.toml`)
//! 3. Project-level `.reel/config.toml`
//! 4. User-level `~/.config/reel/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REEL_SERVICE__API_KEY` -> `service.api_key`,
//! `REEL_POLLING__MAX_ATTEMPTS` -> `polling.max_attempts`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use reel_config::ReelConfig;
//!
//! let config = ReelConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if !config.service.is_configured() {
//!     eprintln!("no API key; every video will be summarized from the fallback catalog");
//! }
//! ```

mod error;
mod polling;
mod search;
mod service;

pub use error::ConfigError;
pub use polling::PollingConfig;
pub use search::SearchConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReelConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl ReelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(None).extract().map_err(ConfigError::from)
    }

    /// Load configuration with an extra TOML file layered above the
    /// project-level config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, or
    /// [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        Self::figment(Some(path)).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".reel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("REEL_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()?;
        self.polling.validate()?;
        self.search.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reel").join("config.toml"))
    }
}
