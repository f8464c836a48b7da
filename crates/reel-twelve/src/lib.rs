//! # reel-twelve
//!
//! HTTP client for the Twelve Labs video-intelligence API (v1.3).
//!
//! Covers the calls the compliance and question-answering pipelines need:
//! - index listing and creation (`/indexes`)
//! - task submission and status (`/tasks`)
//! - summarization (`/summarize`)
//! - semantic search (`/search`)
//! - streamed open-ended analysis (`/analyze`)
//!
//! Every call goes through the [`AnalysisService`] trait so drivers can be
//! exercised against an in-memory fake.

pub mod analyze;
pub mod indexes;
pub mod search;
pub mod summarize;
pub mod tasks;

mod error;
mod http;
mod service;

pub use error::ServiceError;
pub use search::{SearchHit, SearchQuery};
pub use service::AnalysisService;

use reel_config::ServiceConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

/// Header carrying the static API credential.
const API_KEY_HEADER: &str = "x-api-key";

/// Body returned by the create endpoints.
#[derive(Debug, Deserialize)]
struct Created {
    #[serde(rename = "_id", default)]
    id: String,
}

impl Created {
    fn into_id(self, what: &str) -> Result<String, ServiceError> {
        if self.id.is_empty() {
            return Err(ServiceError::Parse(format!("{what} created without an _id")));
        }
        Ok(self.id)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one API root and credential.
pub struct TwelveClient {
    http: reqwest::Client,
    base_url: String,
}

impl TwelveClient {
    /// Build a client from service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Credential`] if the API key is not a valid
    /// header value, or [`ServiceError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ServiceError::Credential(e.to_string()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .user_agent(concat!("reel/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
