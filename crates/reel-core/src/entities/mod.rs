mod index;
mod report;
mod task;

pub use index::{AnalysisIndex, IndexModel};
pub use report::{ComplianceReport, PolicyChecks, VIDEO_ID_NOT_AVAILABLE};
pub use task::AnalysisTask;
