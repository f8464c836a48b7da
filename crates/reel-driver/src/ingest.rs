//! Semantic indexing with placeholder embeddings.
//!
//! No embedding model runs locally. A successfully indexed video gets a
//! random vector, a failed one gets the zero vector, so downstream storage
//! can tell the two apart without a separate status column.

use reel_twelve::AnalysisService;
use serde::Serialize;

use crate::{Driver, Sleeper};

/// Width of every vector this module produces.
pub const EMBEDDING_DIM: usize = 1024;

/// Result of indexing one video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    pub video_id: Option<String>,
    pub embedding: Vec<f32>,
}

impl IngestOutcome {
    fn failed() -> Self {
        Self {
            video_id: None,
            embedding: vec![0.0; EMBEDDING_DIM],
        }
    }

    /// Whether the embedding is the failure marker.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.embedding.iter().all(|v| *v == 0.0)
    }
}

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    /// Index `video_url` and return its placeholder embedding.
    pub async fn index_and_embed(&self, video_url: &str) -> IngestOutcome {
        match self.ingest(video_url).await {
            Ok(video_id) => IngestOutcome {
                video_id: Some(video_id),
                embedding: random_vector(),
            },
            Err(error) => {
                tracing::warn!(%error, kind = error.kind(), video_url, "indexing failed; returning zero embedding");
                IngestOutcome::failed()
            }
        }
    }
}

/// Placeholder text embedding with the same width as video embeddings.
#[must_use]
pub fn text_embed(text: &str) -> Vec<f32> {
    tracing::debug!(chars = text.chars().count(), "placeholder text embedding");
    random_vector()
}

/// Uniform values in `[0, 1)`.
fn random_vector() -> Vec<f32> {
    let mut bytes = vec![0u8; EMBEDDING_DIM * 2];
    if let Err(error) = getrandom::fill(&mut bytes) {
        tracing::warn!(%error, "random source unavailable; returning zero embedding");
        return vec![0.0; EMBEDDING_DIM];
    }
    bytes
        .chunks_exact(2)
        .map(|pair| f32::from(u16::from_le_bytes([pair[0], pair[1]])) / 65_536.0)
        .collect()
}
