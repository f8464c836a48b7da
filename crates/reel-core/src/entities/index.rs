use serde::{Deserialize, Serialize};

/// A named collection on the remote analysis service.
///
/// The service reports the identifier as `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisIndex {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "index_name")]
    pub name: String,
}

/// One model capability an index is created with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexModel {
    pub model_name: String,
    pub model_options: Vec<String>,
}

impl IndexModel {
    #[must_use]
    pub fn new(model_name: impl Into<String>, model_options: &[&str]) -> Self {
        Self {
            model_name: model_name.into(),
            model_options: model_options.iter().map(ToString::to_string).collect(),
        }
    }

    /// The visual+audio understanding model and the visual+audio
    /// summarization model every reel index is configured with.
    #[must_use]
    pub fn default_pair() -> Vec<Self> {
        vec![
            Self::new("marengo3.0", &["visual", "audio"]),
            Self::new("pegasus1.2", &["visual", "audio"]),
        ]
    }
}
