//! Error types for ranking and ranking configuration.
//!
//! Data problems (missing fields, malformed listings) are never errors here;
//! they are skipped. Only caller or configuration defects surface.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    /// A scoring weight was NaN, infinite or negative
    #[error("Invalid weight {name}: {value} (must be finite and non-negative)")]
    InvalidWeight { name: &'static str, value: f32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while loading a ranking configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] RankError),
}

pub type Result<T> = std::result::Result<T, RankError>;
