//! The seam between drivers and the remote service.

use std::future::Future;

use reel_core::{AnalysisIndex, AnalysisTask, IndexModel};

use crate::{SearchHit, SearchQuery, TwelveClient, error::ServiceError};

/// Remote operations the pipelines depend on.
///
/// [`TwelveClient`] is the live implementation; tests substitute an
/// in-memory fake.
pub trait AnalysisService: Send + Sync {
    /// List indexes named `name`.
    fn list_indexes(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<AnalysisIndex>, ServiceError>> + Send;

    /// Create an index and return its id.
    fn create_index(
        &self,
        name: &str,
        models: &[IndexModel],
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Submit a video and return the task id.
    fn create_task(
        &self,
        index_id: &str,
        video_url: &str,
        language: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Observe a task's current status.
    fn get_task(
        &self,
        task_id: &str,
    ) -> impl Future<Output = Result<AnalysisTask, ServiceError>> + Send;

    /// Summarize an indexed video.
    fn summarize(&self, video_id: &str)
    -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Semantic search, best hit first.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<SearchHit>, ServiceError>> + Send;

    /// Open-ended generation over a video; streamed chunks concatenated.
    fn analyze(
        &self,
        video_id: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;
}

impl AnalysisService for TwelveClient {
    fn list_indexes(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<AnalysisIndex>, ServiceError>> + Send {
        Self::list_indexes(self, name)
    }

    fn create_index(
        &self,
        name: &str,
        models: &[IndexModel],
    ) -> impl Future<Output = Result<String, ServiceError>> + Send {
        Self::create_index(self, name, models)
    }

    fn create_task(
        &self,
        index_id: &str,
        video_url: &str,
        language: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send {
        Self::create_task(self, index_id, video_url, language)
    }

    fn get_task(
        &self,
        task_id: &str,
    ) -> impl Future<Output = Result<AnalysisTask, ServiceError>> + Send {
        Self::get_task(self, task_id)
    }

    fn summarize(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send {
        Self::summarize(self, video_id)
    }

    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<SearchHit>, ServiceError>> + Send {
        Self::search(self, query)
    }

    fn analyze(
        &self,
        video_id: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send {
        Self::analyze(self, video_id, prompt)
    }
}
