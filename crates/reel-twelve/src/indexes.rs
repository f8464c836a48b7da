//! Index listing and creation.

use reel_core::{AnalysisIndex, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{Created, TwelveClient, error::ServiceError, http};

#[derive(Deserialize)]
struct IndexList {
    #[serde(default)]
    data: Vec<AnalysisIndex>,
}

#[derive(Serialize)]
struct CreateIndex<'a> {
    index_name: &'a str,
    models: &'a [IndexModel],
}

impl TwelveClient {
    /// List indexes whose name matches `name`.
    ///
    /// The service filters by name, but callers should still compare names
    /// exactly; only the first page is read.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails, the service answers
    /// with anything but 200, or the body cannot be decoded.
    pub async fn list_indexes(&self, name: &str) -> Result<Vec<AnalysisIndex>, ServiceError> {
        let url = self.url(&format!("/indexes?index_name={}", urlencoding::encode(name)));
        let resp = self.http.get(&url).send().await?;
        let resp = http::check_response(resp, http::OK).await?;
        let list: IndexList = resp.json().await?;
        Ok(list.data)
    }

    /// Create an index configured with `models` and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails, the service answers
    /// with anything but 200/201, or the body has no `_id`.
    pub async fn create_index(
        &self,
        name: &str,
        models: &[IndexModel],
    ) -> Result<String, ServiceError> {
        let body = CreateIndex {
            index_name: name,
            models,
        };
        let resp = self
            .http
            .post(self.url("/indexes"))
            .json(&body)
            .send()
            .await?;
        let resp = http::check_response(resp, http::OK_OR_CREATED).await?;
        let created: Created = resp.json().await?;
        created.into_id("index")
    }
}
