//! stderr progress for long-running service calls.
//!
//! Everything here is a no-op unless [`ui::prefs`] enables progress, so
//! callers never branch on output mode themselves.

use std::fmt;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reel_core::{ComplianceReport, Decision};
use reel_driver::Submission;

use crate::ui;

fn bar_template(columns: Option<usize>) -> &'static str {
    match columns {
        Some(cols) if cols >= 110 => "{bar:30.cyan/blue} {pos}/{len} {elapsed_precise} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {pos}/{len}",
    }
}

/// Spinner shown while a single remote pipeline runs.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {elapsed} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Running count of decisions across an audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub approve: usize,
    pub review: usize,
    pub block: usize,
    /// Reports whose summary did not come from the live model.
    pub degraded: usize,
}

impl Tally {
    pub fn record(&mut self, report: &ComplianceReport) {
        match report.decision {
            Decision::Approve => self.approve += 1,
            Decision::Review => self.review += 1,
            Decision::Block => self.block += 1,
        }
        if report.engine.is_degraded() {
            self.degraded += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} approve, {} review, {} block",
            self.approve, self.review, self.block
        )?;
        if self.degraded > 0 {
            write!(f, " ({} degraded)", self.degraded)?;
        }
        Ok(())
    }
}

/// Per-submission bar for `reel audit`; the message carries the current
/// creator and the decisions so far.
pub struct AuditProgress {
    bar: Option<ProgressBar>,
    tally: Tally,
}

impl AuditProgress {
    #[must_use]
    pub fn start(total: usize) -> Self {
        let prefs = ui::prefs();
        let bar = prefs.progress.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::with_template(bar_template(prefs.term_width))
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        });
        Self {
            bar,
            tally: Tally::default(),
        }
    }

    pub fn begin(&self, submission: &Submission) {
        if let Some(bar) = &self.bar {
            bar.set_message(status_line(submission, &self.tally));
        }
    }

    pub fn record(&mut self, report: &ComplianceReport) {
        self.tally.record(report);
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar and hand back the final counts.
    pub fn finish(self) -> Tally {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        self.tally
    }
}

fn status_line(submission: &Submission, tally: &Tally) -> String {
    let label = submission
        .creator
        .as_deref()
        .unwrap_or(submission.video_url.as_str());
    format!("{label} [{tally}]")
}
