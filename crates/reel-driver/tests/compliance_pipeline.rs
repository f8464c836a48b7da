//! Compliance pipeline against an in-memory service.
//!
//! Covers every degradation tier, every ingestion failure mode, the polling
//! budget, index idempotence, and the demo submissions end to end.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;

use common::{FakeService, Reply, State, driver, task};
use reel_core::{ComplianceReport, Decision, Engine, VIDEO_ID_NOT_AVAILABLE};
use reel_driver::{PollPolicy, Submission, demo_submissions};

const SPAIN: &str = "https://cdn.example.com/Spain_on_a_fork.mp4";
const RICARDO: &str = "https://cdn.example.com/Ricardo_vlog.mp4";

// ---------------------------------------------------------------------------
// Summary tiers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_summary_uses_full_dual_model() {
    let driver = driver(FakeService::with(|s| {
        s.summarize = Reply::Ok("Close-up of a sharp pencil near the eye.".into());
    }));

    let report = driver.analyze(SPAIN).await;

    assert_eq!(report.summary, "Close-up of a sharp pencil near the eye.");
    assert_eq!(report.engine, Engine::FullDualModel);
    assert_eq!(report.video_id, "vid-1");
    assert_eq!(report.decision, Decision::Review);
    assert_eq!(
        report.policy_checks.status,
        "Visual Warning: Sharp tool near eye area."
    );
    assert_eq!(driver.sleeper().slept(), vec![Duration::from_secs(5)]);
}

#[tokio::test]
async fn rejected_summary_falls_back_but_keeps_video_id() {
    let driver = driver(FakeService::with(|s| s.summarize = Reply::Status(500)));

    let report = driver.analyze(RICARDO).await;

    assert_eq!(report.engine, Engine::CircuitBreaker);
    assert_eq!(report.video_id, "vid-1");
    assert!(report.summary.contains("miracle cure"));
    assert_eq!(report.decision, Decision::Block);
    assert!(report.policy_checks.status.contains("Prohibited medical claims"));
}

#[tokio::test]
async fn rate_limited_summary_counts_as_rejected() {
    let driver = driver(FakeService::with(|s| s.summarize = Reply::Status(429)));
    let report = driver.analyze(SPAIN).await;
    assert_eq!(report.engine, Engine::CircuitBreaker);
    assert!(report.summary.contains("Spanish pasta"));
}

#[tokio::test]
async fn unexpected_summary_error_keeps_last_state() {
    let driver = driver(FakeService::with(|s| s.summarize = Reply::Broken));

    let report = driver.analyze(RICARDO).await;

    assert_eq!(report.summary, "Analysis failed.");
    assert_eq!(report.engine, Engine::IngestOnly);
    assert_eq!(report.video_id, "vid-1");
    // Policy still runs over the untouched summary.
    assert_eq!(report.decision, Decision::Approve);
    assert_eq!(report.policy_checks.status, "Brand Safety Pass.");
}

// ---------------------------------------------------------------------------
// Ingestion failures
// ---------------------------------------------------------------------------

fn no_index(s: &mut State) {
    s.list = Reply::Status(500);
    s.create_index = Reply::Status(500);
}

fn submission_rejected(s: &mut State) {
    s.create_task = Reply::Status(400);
}

fn task_failed(s: &mut State) {
    s.statuses = vec![Reply::Ok(task("pending", None)), Reply::Ok(task("failed", None))];
}

fn task_error(s: &mut State) {
    s.statuses = vec![Reply::Ok(task("error", None))];
}

fn status_check_rejected(s: &mut State) {
    s.statuses = vec![Reply::Ok(task("indexing", None)), Reply::Status(503)];
}

fn ready_without_video(s: &mut State) {
    s.statuses = vec![Reply::Ok(task("ready", None))];
}

fn never_ready(s: &mut State) {
    s.statuses = vec![Reply::Ok(task("indexing", None))];
}

#[rstest]
#[case::no_index(no_index)]
#[case::submission_rejected(submission_rejected)]
#[case::task_failed(task_failed)]
#[case::task_error(task_error)]
#[case::status_check_rejected(status_check_rejected)]
#[case::ready_without_video(ready_without_video)]
#[case::never_ready(never_ready)]
#[tokio::test]
async fn ingestion_failure_uses_fallback(#[case] failure: fn(&mut State)) {
    let driver = driver(FakeService::with(failure));

    let report = driver.analyze(SPAIN).await;

    assert_eq!(report.engine, Engine::CircuitBreaker);
    assert_eq!(report.video_id, VIDEO_ID_NOT_AVAILABLE);
    assert_eq!(
        report.summary,
        "Culinary demonstration of a Spanish pasta dish involving boiling water."
    );
    assert_eq!(report.decision, Decision::Block);
    assert_eq!(
        report.policy_checks.status,
        "Policy Violation: Asset is off-brief (Culinary)."
    );
    assert_eq!(driver.service().calls().summarize, 0);
}

#[tokio::test]
async fn terminal_failure_stops_polling_immediately() {
    let driver = driver(FakeService::with(task_failed));
    let _ = driver.analyze(SPAIN).await;
    assert_eq!(driver.service().calls().get_task, 2);
    assert_eq!(driver.sleeper().slept().len(), 1);
}

#[tokio::test]
async fn submission_is_not_retried() {
    let driver = driver(FakeService::with(submission_rejected));
    let _ = driver.analyze(SPAIN).await;
    let calls = driver.service().calls();
    assert_eq!(calls.create_task, 1);
    assert_eq!(calls.get_task, 0);
}

// ---------------------------------------------------------------------------
// Polling budget
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_checks_120_times_and_sleeps_119_times() {
    let driver = driver(FakeService::with(never_ready));

    let report = driver.analyze(RICARDO).await;

    assert_eq!(driver.service().calls().get_task, 120);
    let slept = driver.sleeper().slept();
    assert_eq!(slept.len(), 119);
    assert!(slept.iter().all(|d| *d == Duration::from_secs(5)));
    assert_eq!(report.engine, Engine::CircuitBreaker);
    assert!(report.policy_checks.status.contains("Prohibited medical claims"));
}

#[tokio::test]
async fn statusless_observation_keeps_polling() {
    let statusless: reel_core::AnalysisTask =
        serde_json::from_str(r#"{"_id": "task-1", "status": null}"#).unwrap();
    let driver = driver(FakeService::with(|s| {
        s.statuses = vec![
            Reply::Ok(statusless),
            Reply::Ok(task("ready", Some("vid-7"))),
        ];
    }));

    let report = driver.analyze(SPAIN).await;

    assert_eq!(driver.service().calls().get_task, 2);
    assert_eq!(driver.sleeper().slept().len(), 1);
    assert_eq!(report.video_id, "vid-7");
    assert_eq!(report.engine, Engine::FullDualModel);
}

#[tokio::test]
async fn backoff_policy_grows_sleeps() {
    let driver = driver(FakeService::with(never_ready)).with_poll_policy(PollPolicy {
        interval: Duration::from_secs(2),
        max_attempts: 5,
        backoff_multiplier: 2.0,
        max_interval: Duration::from_secs(10),
    });

    let _ = driver.analyze(SPAIN).await;

    assert_eq!(
        driver.sleeper().slept(),
        [2, 4, 8, 10].map(Duration::from_secs).to_vec()
    );
}

#[tokio::test]
async fn wait_for_task_reports_timeout_attempts() {
    let driver = driver(FakeService::with(never_ready))
        .with_poll_policy(PollPolicy::fixed(Duration::from_secs(1), 3));

    let error = driver.wait_for_task("task-1").await.unwrap_err();

    assert_eq!(error.kind(), "timed_out");
    assert_eq!(
        error.to_string(),
        "task task-1 still processing after 3 status checks"
    );
}

// ---------------------------------------------------------------------------
// Index resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_is_created_once_across_items() {
    let driver = driver(FakeService::default());

    let first = driver.resolve_index().await;
    let second = driver.resolve_index().await;

    assert_eq!(first.as_deref(), Some("idx-1"));
    assert_eq!(first, second);
    let calls = driver.service().calls();
    assert_eq!(calls.create_index, 1);
    assert_eq!(calls.list_indexes, 2);
}

#[tokio::test]
async fn existing_index_is_reused() {
    let driver = driver(FakeService::with(|s| {
        s.indexes.push(reel_core::AnalysisIndex {
            id: "idx-existing".into(),
            name: "reel_compliance_index".into(),
        });
    }));

    assert_eq!(driver.resolve_index().await.as_deref(), Some("idx-existing"));
    assert_eq!(driver.service().calls().create_index, 0);
}

#[tokio::test]
async fn similar_index_name_is_not_a_match() {
    let driver = driver(FakeService::with(|s| {
        s.indexes.push(reel_core::AnalysisIndex {
            id: "idx-old".into(),
            name: "reel_compliance_index_v0".into(),
        });
    }));

    assert_eq!(driver.resolve_index().await.as_deref(), Some("idx-1"));
    assert_eq!(driver.service().calls().create_index, 1);
}

#[tokio::test]
async fn listing_failure_still_creates() {
    let driver = driver(FakeService::with(|s| s.list = Reply::Broken));

    let report = driver.analyze(SPAIN).await;

    assert_eq!(driver.service().calls().create_index, 1);
    assert_eq!(report.engine, Engine::FullDualModel);
}

#[tokio::test]
async fn configured_language_is_sent() {
    let driver = driver(FakeService::default());
    let _ = driver.analyze(SPAIN).await;
    assert_eq!(driver.service().calls().last_language.as_deref(), Some("en"));
}

// ---------------------------------------------------------------------------
// Demo submissions without a live service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_submissions_offline() {
    let driver = driver(FakeService::offline());

    let reports = driver.analyze_all(&demo_submissions()).await;

    let decisions: Vec<_> = reports.iter().map(|r| r.decision).collect();
    assert_eq!(
        decisions,
        vec![
            Decision::Approve,
            Decision::Review,
            Decision::Block,
            Decision::Block,
            Decision::Block,
        ]
    );
    assert!(reports[1].policy_checks.status.contains("Sharp tool near eye area"));
    assert!(reports[2].policy_checks.status.contains("off-brief (Culinary)"));
    assert!(reports[3].policy_checks.status.contains("Prohibited medical claims"));
    assert!(reports[4].policy_checks.status.contains("High-risk chemical"));
    assert_eq!(reports[0].summary, "Content analysis pending manual review.");

    for report in &reports {
        assert_eq!(report.engine, Engine::CircuitBreaker);
        assert!(!report.has_video());
        assert_fully_populated(report);
    }
}

#[tokio::test]
async fn creator_only_submission_uses_creator_hint() {
    let driver = driver(FakeService::offline());
    let submission =
        Submission::new("https://www.youtube.com/watch?v=Oz01bOgkQ7Y").with_creator("@DoctorEyeHealth");

    let report = driver.analyze_submission(&submission).await;

    assert!(report.summary.contains("perm chemicals"));
    assert_eq!(report.decision, Decision::Block);
}

fn assert_fully_populated(report: &ComplianceReport) {
    let json = serde_json::to_value(report).unwrap();
    for key in ["summary", "tl_engine", "decision", "policy_checks", "video_id"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(!report.summary.is_empty());
    assert!(!report.policy_checks.status.is_empty());
}
