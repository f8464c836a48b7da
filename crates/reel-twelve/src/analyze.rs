//! Streamed open-ended analysis (`/analyze`).
//!
//! The service answers with newline-delimited JSON. Text arrives in one of
//! three shapes, checked in order:
//! - `{"data": "..."}`
//! - `{"text": "..."}` (e.g. `{"event_type": "text_generation", "text": "..."}`)
//! - a bare JSON string
//!
//! Other objects (`stream_start`, `stream_end`, ...) contribute nothing, and
//! lines that are not valid JSON are logged and skipped.

use futures::StreamExt;
use serde::Serialize;
use serde_json::Value;

use crate::{TwelveClient, error::ServiceError, http};

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    video_id: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Incremental NDJSON reader that concatenates text chunks.
#[derive(Debug, Default)]
pub struct AnswerAccumulator {
    pending: Vec<u8>,
    answer: String,
    skipped: usize,
}

impl AnswerAccumulator {
    /// Feed raw bytes; complete lines are parsed immediately.
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.consume_line(&line);
        }
    }

    /// Flush a trailing line without a newline and return the answer.
    #[must_use]
    pub fn finish(mut self) -> String {
        let rest = std::mem::take(&mut self.pending);
        self.consume_line(&rest);
        self.answer
    }

    /// Lines that were not valid JSON so far.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    fn consume_line(&mut self, raw: &[u8]) {
        let line = String::from_utf8_lossy(raw);
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        tracing::trace!(line = %truncate(line, 100), "analyze chunk received");
        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                if let Some(text) = chunk_text(&value) {
                    self.answer.push_str(text);
                }
            }
            Err(error) => {
                self.skipped += 1;
                tracing::warn!(%error, line = %truncate(line, 100), "skipping unparseable analyze chunk");
            }
        }
    }
}

/// Text carried by one parsed chunk, if any.
fn chunk_text(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => map
            .get("data")
            .map_or_else(|| map.get("text").and_then(Value::as_str), Value::as_str),
        Value::String(text) => Some(text),
        _ => None,
    }
}

fn truncate(line: &str, max_chars: usize) -> String {
    line.chars().take(max_chars).collect()
}

/// Drain a streamed analyze response into one answer string.
///
/// # Errors
///
/// Returns [`ServiceError::Http`] if the body stream breaks mid-way.
pub async fn collect_answer(resp: reqwest::Response) -> Result<String, ServiceError> {
    let mut stream = resp.bytes_stream();
    let mut acc = AnswerAccumulator::default();
    while let Some(chunk) = stream.next().await {
        acc.push(&chunk?);
    }
    Ok(acc.finish())
}

impl TwelveClient {
    /// Ask the generation model an open-ended question about a video.
    ///
    /// Returns the concatenated streamed text (possibly empty).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Api`] if the service answers with anything
    /// but 200, or [`ServiceError::Http`] for transport failures.
    pub async fn analyze(&self, video_id: &str, prompt: &str) -> Result<String, ServiceError> {
        let body = AnalyzeRequest {
            video_id,
            prompt,
            stream: true,
        };
        let resp = self
            .http
            .post(self.url("/analyze"))
            .json(&body)
            .send()
            .await?;
        let resp = http::check_response(resp, http::OK).await?;
        collect_answer(resp).await
    }
}
