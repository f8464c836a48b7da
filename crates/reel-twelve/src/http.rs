//! Shared HTTP response helpers for API calls.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, unaccepted status → [`ServiceError::Api`]) so the endpoint
//! modules stay focused on request construction and response mapping.

use crate::error::ServiceError;

/// Statuses a plain read or action call accepts.
pub const OK: &[u16] = &[200];

/// Statuses a create call accepts.
pub const OK_OR_CREATED: &[u16] = &[200, 201];

/// Check an HTTP response against the statuses the call accepts.
///
/// Returns the response unchanged when its status is in `accepted`. Handles:
/// - **429 Too Many Requests** → [`ServiceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Any other status** → [`ServiceError::Api`] with status code and
///   response body.
pub async fn check_response(
    resp: reqwest::Response,
    accepted: &[u16],
) -> Result<reqwest::Response, ServiceError> {
    let status = resp.status().as_u16();
    if accepted.contains(&status) {
        return Ok(resp);
    }
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ServiceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    Err(ServiceError::Api {
        status,
        message: resp.text().await.unwrap_or_default(),
    })
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
