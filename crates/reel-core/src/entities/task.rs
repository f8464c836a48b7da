use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// One in-flight submission of a video to an index, as last observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisTask {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub index_id: Option<String>,
    /// Absent or `null` on the wire reads as still processing.
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub video_id: Option<String>,
}
