// Hyphenator list configuration.
//
// A JSON file of the form
//
//     {"hyphenators": [{"name": "Corrected", "dictionary": "is_1985_corrected"}]}
//
// where `left` and `right` may be given per hyphenator (defaults 1 and 2).

use std::path::Path;

use serde::{Deserialize, Serialize};
use skipta_core::HyphenatorConfig;

use crate::EvalError;

/// The hyphenators to evaluate, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub hyphenators: Vec<HyphenatorConfig>,
}

impl EvaluationConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, EvalError> {
        let json = std::fs::read_to_string(path).map_err(|source| EvalError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| EvalError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            hyphenators = config.hyphenators.len(),
            "loaded evaluation config"
        );
        Ok(config)
    }

    /// The Icelandic pattern sets compared by default, oldest first.
    pub fn icelandic_defaults() -> Self {
        let hyphenators = [
            ("J. Pind\u{2019}s 1988 patterns", "is_JPind_1988"),
            ("Original Skipta patterns (1985)", "is"),
            ("New patterns from 1985 list", "is_1985_unchanged_list"),
            ("Corrected", "is_1985_corrected"),
            ("Corrected with additions", "is_2020_alpha"),
            ("Corrected with more additions", "is_2020_alpha2_extra"),
        ]
        .into_iter()
        .map(|(name, dictionary)| HyphenatorConfig::new(name, dictionary))
        .collect();
        Self { hyphenators }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::icelandic_defaults()
    }
}
