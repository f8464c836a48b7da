//! Ingestion error types.

use reel_twelve::ServiceError;
use thiserror::Error;

/// Why a video did not reach the `ready` state with a usable id.
///
/// Every variant is a handled outcome: the compliance driver turns any of
/// them into a fallback report.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The index could neither be found nor created.
    #[error("no index available for {index_name}")]
    NoIndex { index_name: String },

    /// The service rejected (or never received) the task submission.
    #[error("task submission failed: {0}")]
    Submission(#[source] ServiceError),

    /// The task reached `failed` or `error`.
    #[error("task {task_id} ended with status {status}")]
    TaskFailed { task_id: String, status: String },

    /// A status check itself failed.
    #[error("status check for task {task_id} failed: {source}")]
    StatusCheck {
        task_id: String,
        source: ServiceError,
    },

    /// The task is `ready` but carries no video id.
    #[error("task {task_id} is ready but has no video id")]
    MissingVideoId { task_id: String },

    /// The attempt budget ran out while the task was still processing.
    #[error("task {task_id} still processing after {attempts} status checks")]
    TimedOut { task_id: String, attempts: u32 },
}

impl IngestError {
    /// Short machine-friendly label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoIndex { .. } => "no_index",
            Self::Submission(_) => "submission",
            Self::TaskFailed { .. } => "task_failed",
            Self::StatusCheck { .. } => "status_check",
            Self::MissingVideoId { .. } => "missing_video_id",
            Self::TimedOut { .. } => "timed_out",
        }
    }
}
