use std::path::PathBuf;

use thiserror::Error;

/// Main error type for catalog, synonym and config loading.
///
/// Ranking itself is total and never produces one of these.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization errors (catalog, synonyms)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization errors (config)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two catalog items share the same id
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItemId(u32),

    /// Config values that would make ranking meaningless
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl MatcherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatcherError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatcherError::DuplicateItemId(7);
        assert_eq!(err.to_string(), "Duplicate item id in catalog: 7");

        let err = MatcherError::InvalidConfig("weights".to_string());
        assert_eq!(err.to_string(), "Invalid config: weights");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MatcherError::io("catalog.json", source);
        assert!(err.to_string().contains("catalog.json"));
    }
}
