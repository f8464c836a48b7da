//! The compliance pipeline: ingest, summarize, degrade, decide.
//!
//! ```text
//! ingest ok ── summarize 200 ──────────► live summary      (FullDualModel)
//!    │      └─ summarize non-200 ──────► fallback summary  (CircuitBreaker)
//!    │      └─ transport/parse error ──► unchanged         (IngestOnly)
//!    └─ any ingest failure ────────────► fallback summary  (CircuitBreaker)
//!
//! then: policy engine over the final summary → decision + policy_checks
//! ```

use reel_core::{ComplianceReport, Engine};
use reel_twelve::AnalysisService;
use serde::{Deserialize, Serialize};

use crate::{Driver, Sleeper};

/// One video to audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub video_url: String,
    /// Creator handle, used as a second fallback-catalog key.
    #[serde(default)]
    pub creator: Option<String>,
}

impl Submission {
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
            creator: None,
        }
    }

    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }
}

/// The five showcase submissions audited when none are given.
#[must_use]
pub fn demo_submissions() -> Vec<Submission> {
    [
        ("https://www.youtube.com/watch?v=icD8IxqxBD4", "@RaeMorris_Pro"),
        ("https://www.youtube.com/watch?v=4PNRGaD_NhQ", "@SmithaDeepak"),
        ("https://www.youtube.com/watch?v=RvQpoT9iD54", "@SpainOnAFork"),
        ("https://www.youtube.com/watch?v=mdL-GkCmvb4", "@RicardoGorski"),
        ("https://www.youtube.com/watch?v=Oz01bOgkQ7Y", "@DoctorEyeHealth"),
    ]
    .into_iter()
    .map(|(url, creator)| Submission::new(url).with_creator(creator))
    .collect()
}

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    /// Audit a bare video locator.
    pub async fn analyze(&self, video_url: &str) -> ComplianceReport {
        self.analyze_submission(&Submission::new(video_url)).await
    }

    /// Audit one submission. Never fails: every failure mode degrades to a
    /// fully populated report.
    pub async fn analyze_submission(&self, submission: &Submission) -> ComplianceReport {
        let mut report = ComplianceReport::default();
        let video_url = submission.video_url.as_str();

        match self.ingest(video_url).await {
            Ok(video_id) => {
                report.video_id.clone_from(&video_id);
                report.engine = Engine::IngestOnly;

                match self.service.summarize(&video_id).await {
                    Ok(summary) => {
                        report.summary = summary;
                        report.engine = Engine::FullDualModel;
                    }
                    Err(error) if error.is_http_status() => {
                        tracing::warn!(%error, %video_id, "summarization rejected; using fallback description");
                        report.summary = self.fallback_for(submission);
                        report.engine = Engine::CircuitBreaker;
                    }
                    Err(error) => {
                        tracing::error!(%error, %video_id, "summarization failed unexpectedly; keeping last state");
                    }
                }
            }
            Err(error) => {
                tracing::warn!(%error, kind = error.kind(), video_url, "ingestion failed; using fallback description");
                report.summary = self.fallback_for(submission);
                report.engine = Engine::CircuitBreaker;
            }
        }

        let (decision, checks) = self.policy.evaluate(&report.summary).into_checks();
        report.decision = decision;
        report.policy_checks = checks;

        tracing::info!(
            video_url,
            engine = %report.engine,
            decision = %report.decision,
            video_id = %report.video_id,
            "compliance report ready"
        );
        report
    }

    /// Audit submissions one after another.
    pub async fn analyze_all(&self, submissions: &[Submission]) -> Vec<ComplianceReport> {
        let mut reports = Vec::with_capacity(submissions.len());
        for submission in submissions {
            reports.push(self.analyze_submission(submission).await);
        }
        reports
    }

    fn fallback_for(&self, submission: &Submission) -> String {
        self.catalog
            .describe_submission(&submission.video_url, submission.creator.as_deref())
            .to_string()
    }
}
