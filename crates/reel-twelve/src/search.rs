//! Semantic search over an index.

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::{TwelveClient, error::ServiceError, http};

/// One natural-language search against an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub index_id: String,
    pub query_text: String,
    /// How `options` combine (`or` / `and`).
    pub operator: String,
    /// Modalities to search (`visual`, `transcription`, ...).
    pub options: Vec<String>,
}

/// A matching clip, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchHit>,
}

impl SearchQuery {
    /// Multipart body; each search option is sent as its own repeated field.
    fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("query_text", self.query_text)
            .text("index_id", self.index_id)
            .text("operator", self.operator);
        for option in self.options {
            form = form.text("search_options", option);
        }
        form
    }
}

impl TwelveClient {
    /// Run a semantic search and return hits in service ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails, the service answers
    /// with anything but 200, or the body cannot be decoded.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ServiceError> {
        let resp = self
            .http
            .post(self.url("/search"))
            .multipart(query.clone().into_form())
            .send()
            .await?;
        let resp = http::check_response(resp, http::OK).await?;
        let data: SearchResponse = resp.json().await?;
        Ok(data.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "search_pool": {"total_count": 1, "total_duration": 117, "index_id": "idx-1"},
        "data": [
            {"score": 84.2, "start": 12.5, "end": 20.0, "video_id": "vid-9", "confidence": "high", "rank": 1},
            {"score": 61.0, "start": 40.0, "end": 44.0, "video_id": "vid-9", "confidence": "medium", "rank": 2}
        ],
        "page_info": {"limit_per_page": 10, "total_results": 2}
    }"#;

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.data.len(), 2);
        assert_eq!(data.data[0].video_id.as_deref(), Some("vid-9"));
        assert_eq!(data.data[0].start, Some(12.5));
    }

    #[test]
    fn hit_without_video_id_still_parses() {
        let hit: SearchHit = serde_json::from_str(r#"{"score": 10.0}"#).unwrap();
        assert!(hit.video_id.is_none());
    }

    #[test]
    fn form_boundary_is_set() {
        let query = SearchQuery {
            index_id: "idx-1".into(),
            query_text: "What is the man searching for?".into(),
            operator: "or".into(),
            options: vec!["visual".into(), "transcription".into()],
        };
        let form = query.into_form();
        assert!(!form.boundary().is_empty());
    }
}
