//! Question answering: semantic search, then streamed generation over the
//! best-matching video.

use std::fmt;

use reel_twelve::{AnalysisService, SearchHit, SearchQuery, ServiceError};
use serde::Serialize;

use crate::{Driver, Sleeper};

/// Outcome of [`Driver::answer`]. `Display` renders the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    NoMatch,
    MissingVideoId,
    GenerationFailed { status: u16, message: String },
    /// The generation call never got a status back.
    Unreachable { message: String },
    Empty,
    Answered { text: String },
}

impl Answer {
    /// Whether the model produced text.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str(
                "Error: No matching video found in the index. Make sure the video has been indexed.",
            ),
            Self::MissingVideoId => f.write_str("Error: Video ID not found in search results."),
            Self::GenerationFailed { status, message } => {
                write!(f, "Pegasus Error ({status}): {message}")
            }
            Self::Unreachable { message } => write!(f, "Pegasus Error: {message}"),
            Self::Empty => f.write_str("No answer provided."),
            Self::Answered { text } => f.write_str(text),
        }
    }
}

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    /// Best hit for `query_text` in the configured index.
    ///
    /// Search errors are logged and reported as no hit.
    pub async fn search(&self, query_text: &str) -> Option<SearchHit> {
        let index_id = self.resolve_index().await?;
        let query = SearchQuery {
            index_id,
            query_text: query_text.to_string(),
            operator: self.settings.search.operator.clone(),
            options: self.settings.search.options.clone(),
        };

        match self.service.search(&query).await {
            Ok(hits) => {
                tracing::debug!(hits = hits.len(), query = query_text, "search finished");
                hits.into_iter().next()
            }
            Err(error) => {
                tracing::warn!(%error, query = query_text, "search failed");
                None
            }
        }
    }

    /// Answer a question about the best-matching video.
    pub async fn answer(&self, question: &str) -> Answer {
        let Some(hit) = self.search(question).await else {
            return Answer::NoMatch;
        };
        let Some(video_id) = hit.video_id.filter(|id| !id.is_empty()) else {
            return Answer::MissingVideoId;
        };

        match self.service.analyze(&video_id, question).await {
            Ok(text) if text.is_empty() => Answer::Empty,
            Ok(text) => Answer::Answered { text },
            Err(ServiceError::Api { status, message }) => {
                tracing::warn!(status, %video_id, "generation rejected");
                Answer::GenerationFailed { status, message }
            }
            Err(error @ ServiceError::RateLimited { .. }) => Answer::GenerationFailed {
                status: 429,
                message: error.to_string(),
            },
            Err(error) => {
                tracing::error!(%error, %video_id, "generation request failed");
                Answer::Unreachable {
                    message: error.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn answer_texts() {
        assert_eq!(
            Answer::NoMatch.to_string(),
            "Error: No matching video found in the index. Make sure the video has been indexed."
        );
        assert_eq!(
            Answer::MissingVideoId.to_string(),
            "Error: Video ID not found in search results."
        );
        assert_eq!(
            Answer::GenerationFailed {
                status: 400,
                message: "bad prompt".into()
            }
            .to_string(),
            "Pegasus Error (400): bad prompt"
        );
        assert_eq!(Answer::Empty.to_string(), "No answer provided.");
        assert_eq!(
            Answer::Answered {
                text: "A job.".into()
            }
            .to_string(),
            "A job."
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Answer::GenerationFailed {
            status: 500,
            message: "boom".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "generation_failed");
        assert_eq!(json["status"], 500);
    }
}
