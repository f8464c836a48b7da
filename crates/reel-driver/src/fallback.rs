//! Static descriptions substituted when no live summary is available.

/// Description used when no catalog entry matches.
pub const DEFAULT_DESCRIPTION: &str = "Content analysis pending manual review.";

const BUILT_IN: &[(&str, &str)] = &[
    (
        "MECCA",
        "Makeup tutorial demonstrating bronzer application with a large brush.",
    ),
    (
        "Smitha",
        "Eye makeup tutorial demonstrating inner corner stamping with a sharp pencil.",
    ),
    (
        "Spain",
        "Culinary demonstration of a Spanish pasta dish involving boiling water.",
    ),
    (
        "Ricardo",
        "Personal vlog claiming a 'natural miracle cure' for cystic acne skin conditions.",
    ),
    (
        "Doctor",
        "Optometrist warning about the extreme danger of perm chemicals in a DIY lash lift.",
    ),
];

/// Ordered `(needle, description)` pairs. Needles match by case-sensitive
/// substring; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCatalog {
    entries: Vec<(String, String)>,
    default: String,
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::new(
            BUILT_IN
                .iter()
                .map(|(needle, description)| ((*needle).to_string(), (*description).to_string())),
        )
    }
}

impl FallbackCatalog {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            default: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    /// Replace the no-match description.
    #[must_use]
    pub fn with_default(mut self, description: impl Into<String>) -> Self {
        self.default = description.into();
        self
    }

    fn lookup(&self, haystack: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(needle, _)| haystack.contains(needle.as_str()))
            .map(|(_, description)| description.as_str())
    }

    /// Description for a video locator.
    #[must_use]
    pub fn describe(&self, locator: &str) -> &str {
        self.describe_submission(locator, None)
    }

    /// Description for a locator, trying the creator handle when the locator
    /// itself matches nothing.
    #[must_use]
    pub fn describe_submission(&self, locator: &str, creator: Option<&str>) -> &str {
        self.lookup(locator)
            .or_else(|| creator.and_then(|c| self.lookup(c)))
            .unwrap_or(self.default.as_str())
    }
}
