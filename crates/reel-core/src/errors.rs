//! Cross-cutting error types for reel.
//!
//! Domain-specific errors (e.g., `ServiceError`, `ConfigError`) are defined in
//! their respective crates. Everything converges on `anyhow` in `reel-cli`.

use thiserror::Error;

/// Errors that can be raised by any reel crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A decision string did not name a known decision.
    #[error("Unknown decision: {0}")]
    UnknownDecision(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
