//! Semantic search options.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_operator() -> String {
    "or".to_string()
}

fn default_options() -> Vec<String> {
    vec!["visual".to_string(), "transcription".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// How multiple search options are combined (`or` / `and`).
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Modalities searched (`visual`, `audio`, `transcription`).
    #[serde(default = "default_options")]
    pub options: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            operator: default_operator(),
            options: default_options(),
        }
    }
}

impl SearchConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.operator.as_str(), "or" | "and") {
            return Err(ConfigError::invalid(
                "search.operator",
                format!("'{}' is neither 'or' nor 'and'", self.operator),
            ));
        }
        if self.options.is_empty() {
            return Err(ConfigError::invalid(
                "search.options",
                "at least one search option is required",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SearchConfig::default();
        assert_eq!(config.operator, "or");
        assert_eq!(config.options, vec!["visual", "transcription"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_operator() {
        let config = SearchConfig {
            operator: "xor".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
