use reel_config::ReelConfig;
use reel_core::ComplianceReport;
use reel_driver::Submission;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::root_commands::AuditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::AuditProgress;

const HEADERS: [&str; 6] = ["creator", "decision", "engine", "summary", "evidence", "video_id"];

#[derive(Debug, Serialize)]
struct AuditEntry {
    creator: Option<String>,
    video_url: String,
    #[serde(flatten)]
    report: ComplianceReport,
}

/// Handle `reel audit`.
pub async fn handle(
    args: &AuditArgs,
    config: &ReelConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let submissions = args.submissions()?;
    let driver = bootstrap::driver(config)?;

    let mut progress = AuditProgress::start(submissions.len());
    let mut entries = Vec::with_capacity(submissions.len());
    for submission in submissions {
        progress.begin(&submission);
        let report = driver.analyze_submission(&submission).await;
        progress.record(&report);
        entries.push(entry(submission, report));
    }
    let tally = progress.finish();
    tracing::info!(%tally, "audit finished");

    match flags.format {
        OutputFormat::Table => {
            let rows = entries.iter().map(table_row).collect::<Vec<_>>();
            output::print_table(&HEADERS, &rows);
            Ok(())
        }
        format => output::output(&entries, format),
    }
}

fn entry(submission: Submission, report: ComplianceReport) -> AuditEntry {
    AuditEntry {
        creator: submission.creator,
        video_url: submission.video_url,
        report,
    }
}

fn table_row(entry: &AuditEntry) -> Vec<String> {
    let report = &entry.report;
    let violations = report.policy_checks.violations();
    let evidence = if violations.is_empty() {
        report.policy_checks.status.clone()
    } else {
        violations.join("; ")
    };

    vec![
        entry.creator.clone().unwrap_or_else(|| entry.video_url.clone()),
        report.decision.to_string(),
        report.engine.to_string(),
        report.summary.clone(),
        evidence,
        report.video_id.clone(),
    ]
}
