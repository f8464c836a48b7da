//! Video summarization.

use serde::{Deserialize, Serialize};

use crate::{TwelveClient, error::ServiceError, http};

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    video_id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    summary: String,
}

impl TwelveClient {
    /// Ask the summarization model for a prose summary of an indexed video.
    ///
    /// Only a 200 answer counts as success. A 200 without a `summary` field
    /// yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] for any other status, or
    /// [`ServiceError::Http`] for transport and decoding failures.
    pub async fn summarize(&self, video_id: &str) -> Result<String, ServiceError> {
        let body = SummarizeRequest {
            video_id,
            kind: "summary",
        };
        let resp = self
            .http
            .post(self.url("/summarize"))
            .json(&body)
            .send()
            .await?;
        let resp = http::check_response(resp, http::OK).await?;
        let data: SummarizeResponse = resp.json().await?;
        Ok(data.summary)
    }
}
