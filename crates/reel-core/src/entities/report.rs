use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Decision, Engine};

/// Marker stored in [`ComplianceReport::video_id`] when no video was resolved.
pub const VIDEO_ID_NOT_AVAILABLE: &str = "N/A";

/// Structured policy findings attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PolicyChecks {
    /// Human-readable finding for the final decision.
    pub status: String,
    /// Names of every rule that matched, in evaluation order.
    #[serde(default)]
    pub matched_rules: Vec<String>,
}

impl PolicyChecks {
    /// Findings that describe an actual violation, skipping pass/clean notes.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        [("status", &self.status)]
            .into_iter()
            .filter(|(_, value)| !value.contains("Clean") && !value.contains("Pass"))
            .map(|(key, value)| format!("{key}: {value}"))
            .collect()
    }
}

/// The output record of one video submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceReport {
    pub summary: String,
    #[serde(rename = "tl_engine")]
    pub engine: Engine,
    pub decision: Decision,
    pub policy_checks: PolicyChecks,
    /// Resolved video id, or [`VIDEO_ID_NOT_AVAILABLE`].
    pub video_id: String,
}

impl ComplianceReport {
    /// Whether the report references a video that exists on the service.
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_id != VIDEO_ID_NOT_AVAILABLE
    }
}

impl Default for ComplianceReport {
    /// The state a report starts in before any pipeline stage succeeds.
    fn default() -> Self {
        Self {
            summary: "Analysis failed.".to_string(),
            engine: Engine::SystemError,
            decision: Decision::Block,
            policy_checks: PolicyChecks {
                status: "Pipeline Error".to_string(),
                matched_rules: Vec::new(),
            },
            video_id: VIDEO_ID_NOT_AVAILABLE.to_string(),
        }
    }
}
