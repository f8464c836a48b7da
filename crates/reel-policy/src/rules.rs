use reel_core::Decision;
use serde::Serialize;

/// One keyword rule. Matches when any keyword occurs in the lower-cased
/// summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    /// Lower-case keywords.
    pub keywords: Vec<String>,
    pub decision: Decision,
    pub finding: String,
}

impl Rule {
    #[must_use]
    pub fn new(name: &str, keywords: &[&str], decision: Decision, finding: &str) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            decision,
            finding: finding.to_string(),
        }
    }

    /// `haystack` must already be lower-cased.
    pub(crate) fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

/// The brand-safety rule set, in evaluation order.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "sharp_tool_near_eye",
            &["sharp", "pencil", "stamping", "eye"],
            Decision::Review,
            "Visual Warning: Sharp tool near eye area.",
        ),
        Rule::new(
            "off_brief_culinary",
            &["food", "pasta", "kitchen", "cooking"],
            Decision::Block,
            "Policy Violation: Asset is off-brief (Culinary).",
        ),
        Rule::new(
            "prohibited_medical_claim",
            &["cure", "acne", "heal", "medical", "miracle"],
            Decision::Block,
            "Policy Violation: Prohibited medical claims ('Cure').",
        ),
        Rule::new(
            "chemical_hazard",
            &["chemical", "burn", "perm", "danger"],
            Decision::Block,
            "Safety Violation: High-risk chemical application.",
        ),
    ]
}
