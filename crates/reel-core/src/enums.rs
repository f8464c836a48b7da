//! Decision, engine, and task status enums.
//!
//! `Decision` serializes upper-case (`APPROVE`), `Engine` serializes as its
//! human-readable label, and `TaskStatus` round-trips through the raw status
//! string reported by the remote service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Compliance decision attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Approve,
    Review,
    Block,
}

impl Decision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "APPROVE",
            Self::Review => "REVIEW",
            Self::Block => "BLOCK",
        }
    }

    /// Whether the asset passed without any finding.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approve)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "APPROVE" => Ok(Self::Approve),
            "REVIEW" => Ok(Self::Review),
            "BLOCK" => Ok(Self::Block),
            _ => Err(CoreError::UnknownDecision(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Which degradation tier produced a report's summary.
///
/// ```text
/// system_error → ingest_only → full_dual_model
///              ↘ circuit_breaker
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Engine {
    /// Ingestion and the dedicated summarization call both succeeded.
    #[serde(rename = "Twelve Labs (Marengo 3.0 + Pegasus 1.2)")]
    FullDualModel,
    /// Ingestion succeeded but summarization never produced a result.
    #[serde(rename = "Twelve Labs (Marengo 3.0)")]
    IngestOnly,
    /// A static fallback description replaced the live summary.
    #[serde(rename = "Twelve Labs (Circuit Breaker Mode)")]
    CircuitBreaker,
    /// Nothing completed; the report still carries its initial defaults.
    #[serde(rename = "System Error")]
    SystemError,
}

impl Engine {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullDualModel => "Twelve Labs (Marengo 3.0 + Pegasus 1.2)",
            Self::IngestOnly => "Twelve Labs (Marengo 3.0)",
            Self::CircuitBreaker => "Twelve Labs (Circuit Breaker Mode)",
            Self::SystemError => "System Error",
        }
    }

    /// Whether the summary came from a fallback or error path.
    #[must_use]
    pub const fn is_degraded(self) -> bool {
        !matches!(self, Self::FullDualModel)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a remote analysis task.
///
/// ```text
/// <anything else> → ready
///                 → failed
///                 → error
/// ```
///
/// Only `ready`, `failed` and `error` are recognized; every other value the
/// service reports (`pending`, `indexing`, `validating`, ...) is kept verbatim
/// as [`TaskStatus::Processing`]. A missing or `null` status is processing
/// with an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TaskStatus {
    Ready,
    Failed,
    Error,
    Processing(String),
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Processing(String::new())
    }
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::Failed => "failed",
            Self::Error => "error",
            Self::Processing(raw) => raw,
        }
    }

    /// Whether no further status change will occur.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing(_))
    }

    /// Whether this is a terminal failure (`failed` or `error`).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::Error)
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ready" => Self::Ready,
            "failed" => Self::Failed,
            "error" => Self::Error,
            _ => Self::Processing(raw),
        }
    }
}

impl From<Option<String>> for TaskStatus {
    fn from(raw: Option<String>) -> Self {
        match raw {
            Some(raw) => Self::from(raw),
            None => Self::default(),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Processing(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
