//! # reel-policy
//!
//! Maps a video summary to a compliance [`Decision`].
//!
//! Rules are plain data evaluated in a fixed order. Every rule whose keyword
//! set matches overwrites the outcome so far, so the *last* matching rule
//! decides. This is not a severity ranking: a culinary BLOCK placed after a
//! medical BLOCK would win even though both block.
//!
//! ```text
//! APPROVE (default)
//!   → sharp_tool_near_eye       REVIEW
//!   → off_brief_culinary        BLOCK
//!   → prohibited_medical_claim  BLOCK
//!   → chemical_hazard           BLOCK
//! ```
//!
//! Matching is case-insensitive substring containment; `"eye"` matches
//! `"Eyeliner"`.

mod rules;

pub use rules::{Rule, default_rules};

use reel_core::{Decision, PolicyChecks};
use serde::Serialize;

/// Finding reported when no rule matches.
pub const PASS_FINDING: &str = "Brand Safety Pass.";

/// Result of evaluating a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyOutcome {
    pub decision: Decision,
    pub finding: String,
    /// Every matching rule, in evaluation order. The last one decided.
    pub matched_rules: Vec<String>,
}

impl PolicyOutcome {
    fn pass() -> Self {
        Self {
            decision: Decision::Approve,
            finding: PASS_FINDING.to_string(),
            matched_rules: Vec::new(),
        }
    }

    /// Structured findings for a report.
    #[must_use]
    pub fn into_checks(self) -> (Decision, PolicyChecks) {
        (
            self.decision,
            PolicyChecks {
                status: self.finding,
                matched_rules: self.matched_rules,
            },
        )
    }
}

/// Ordered rule list with last-match-wins evaluation.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    rules: Vec<Rule>,
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl PolicyEngine {
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate `summary` against every rule in order.
    #[must_use]
    pub fn evaluate(&self, summary: &str) -> PolicyOutcome {
        let haystack = summary.to_lowercase();
        let mut outcome = PolicyOutcome::pass();

        for rule in &self.rules {
            if rule.matches(&haystack) {
                outcome.decision = rule.decision;
                outcome.finding.clone_from(&rule.finding);
                outcome.matched_rules.push(rule.name.clone());
            }
        }

        if outcome.matched_rules.len() > 1 {
            tracing::debug!(
                matched = ?outcome.matched_rules,
                decision = %outcome.decision,
                "multiple policy rules matched; last one wins"
            );
        }
        outcome
    }
}
