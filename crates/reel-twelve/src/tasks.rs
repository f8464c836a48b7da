//! Task submission and status.

use reel_core::AnalysisTask;
use reqwest::multipart::Form;

use crate::{Created, TwelveClient, error::ServiceError, http};

impl TwelveClient {
    /// Submit a video URL for indexing and return the task id.
    ///
    /// The endpoint takes `multipart/form-data`, not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails, the service answers
    /// with anything but 200/201, or the body has no `_id`.
    pub async fn create_task(
        &self,
        index_id: &str,
        video_url: &str,
        language: &str,
    ) -> Result<String, ServiceError> {
        let form = Form::new()
            .text("index_id", index_id.to_string())
            .text("video_url", video_url.to_string())
            .text("language", language.to_string());

        let resp = self
            .http
            .post(self.url("/tasks"))
            .multipart(form)
            .send()
            .await?;
        let resp = http::check_response(resp, http::OK_OR_CREATED).await?;
        let created: Created = resp.json().await?;
        created.into_id("task")
    }

    /// Fetch the current state of a task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the request fails, the service answers
    /// with anything but 200, or the body cannot be decoded.
    pub async fn get_task(&self, task_id: &str) -> Result<AnalysisTask, ServiceError> {
        let url = self.url(&format!("/tasks/{}", urlencoding::encode(task_id)));
        let resp = self.http.get(&url).send().await?;
        let resp = http::check_response(resp, http::OK).await?;
        let mut task: AnalysisTask = resp.json().await?;
        if task.id.is_empty() {
            task.id = task_id.to_string();
        }
        Ok(task)
    }
}
