//! Error types for rule-file loading.

use thiserror::Error;

/// Rule-file loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File read error
    #[error("failed to read rule file: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("unknown rule file type: {0}")]
    UnknownFileType(String),
}
