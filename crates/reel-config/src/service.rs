//! Remote video-intelligence service configuration.

use reel_core::IndexModel;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "https://api.twelvelabs.io/v1.3".to_string()
}

fn default_index_name() -> String {
    "reel_compliance_index".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Default per-request timeout in seconds.
const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Static API credential sent as `x-api-key`.
    #[serde(default)]
    pub api_key: String,

    /// API root, including the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the index videos are submitted to. Created on first use.
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Language hint sent with each task submission.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Model capabilities a newly created index is configured with.
    #[serde(default = "IndexModel::default_pair")]
    pub models: Vec<IndexModel>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            index_name: default_index_name(),
            language: default_language(),
            request_timeout_secs: default_request_timeout_secs(),
            models: IndexModel::default_pair(),
        }
    }
}

impl ServiceConfig {
    /// Check if a credential is available for live calls.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The API key with all but the last four characters hidden.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let tail: String = self.api_key.chars().skip(count - 4).collect();
        format!("{}{tail}", "*".repeat(count - 4))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "service.base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }
        if self.index_name.trim().is_empty() {
            return Err(ConfigError::invalid("service.index_name", "must not be empty"));
        }
        if self.models.is_empty() {
            return Err(ConfigError::invalid(
                "service.models",
                "at least one model is required",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "service.request_timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
