//! Ranking configuration.
//!
//! Scoring weights and tokenizer options are policy, not constants baked
//! into the scorer. Everything here has a default and can be overridden
//! from a JSON file:
//!
//! ```json
//! {
//!   "weights": { "description_weight": 1.5, "location_bonus": 2.0, "title_weight": 1.0 },
//!   "tokenizer": { "min_token_length": 3 },
//!   "max_pool_size": 500,
//!   "default_limit": 20
//! }
//! ```

use crate::error::{ConfigError, RankError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Multiplier applied to the frequency-weighted description overlap.
pub const DEFAULT_DESCRIPTION_WEIGHT: f32 = 1.5;

/// Flat bonus when the candidate's location is one the user liked before.
pub const DEFAULT_LOCATION_BONUS: f32 = 2.0;

/// Multiplier applied to the number of shared title terms.
pub const DEFAULT_TITLE_WEIGHT: f32 = 1.0;

/// Tokens shorter than this many characters are dropped.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 1;

/// Weights of the three score components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitWeights {
    pub description_weight: f32,
    pub location_bonus: f32,
    pub title_weight: f32,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            location_bonus: DEFAULT_LOCATION_BONUS,
            title_weight: DEFAULT_TITLE_WEIGHT,
        }
    }
}

impl FitWeights {
    /// Reject NaN, infinite and negative weights.
    ///
    /// A negative weight would let a candidate with shared terms reach a
    /// score of zero or below and vanish from the feed.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("description_weight", self.description_weight),
            ("location_bonus", self.location_bonus),
            ("title_weight", self.title_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(RankError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Minimum token length in characters
    pub min_token_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

/// Full configuration for a ranking pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub weights: FitWeights,
    pub tokenizer: TokenizerConfig,
    /// Upper bound on candidates handed to the ranker (None = unbounded)
    pub max_pool_size: Option<usize>,
    /// Result cap used when the caller doesn't supply one (None = unbounded)
    pub default_limit: Option<usize>,
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.max_pool_size == Some(0) {
            return Err(RankError::InvalidConfig(
                "max_pool_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> std::result::Result<Self, ConfigError> {
        let config: RankingConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: RankingConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}
