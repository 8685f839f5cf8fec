//! Matcher configuration.
//!
//! Read from YAML; every field falls back to its default when absent:
//!
//! ```yaml
//! default_count: 4
//! weights:
//!   tag: 2
//!   title: 3
//!   description: 1
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatcherError, Result};
use crate::ranking::ScoreWeights;

/// Number of items returned for a blank query.
pub const DEFAULT_PICKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Items returned for a blank query
    pub default_count: usize,

    /// Field weights for scoring
    pub weights: ScoreWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_PICKS,
            weights: ScoreWeights::default(),
        }
    }
}

impl MatcherConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MatcherError::io(path, e))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            "Loaded config from {} (default_count={}, weights={:?})",
            path.display(),
            config.default_count,
            config.weights
        );
        Ok(config)
    }

    /// Build from a flat key/value map, falling back to defaults.
    ///
    /// Recognized keys: `default_count`, `tag_weight`, `title_weight`,
    /// `description_weight`.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use ungaa_engine::MatcherConfig;
    ///
    /// let mut overrides = HashMap::new();
    /// overrides.insert("title_weight".to_string(), 5);
    ///
    /// let config = MatcherConfig::from_overrides(&overrides);
    /// assert_eq!(config.weights.title, 5);
    /// assert_eq!(config.weights.tag, 2);
    /// assert_eq!(config.default_count, 4);
    /// ```
    pub fn from_overrides(overrides: &HashMap<String, u32>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, fallback: u32| overrides.get(key).copied().unwrap_or(fallback);

        Self {
            default_count: overrides
                .get("default_count")
                .map(|&n| n as usize)
                .unwrap_or(defaults.default_count),
            weights: ScoreWeights {
                tag: get("tag_weight", defaults.weights.tag),
                title: get("title_weight", defaults.weights.title),
                description: get("description_weight", defaults.weights.description),
            },
        }
    }

    pub fn with_default_count(mut self, default_count: usize) -> Self {
        self.default_count = default_count;
        self
    }

    /// Reject weights that would make every scored query come back empty.
    pub fn validate(&self) -> Result<()> {
        if self.weights.is_zero() {
            return Err(MatcherError::InvalidConfig(
                "at least one of weights.tag, weights.title, weights.description must be > 0"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
