//! Recommender configuration.
//!
//! Uses Figment to merge built-in defaults, an optional TOML file and
//! `SKILL_MATCH_*` environment variables (nested keys split on `__`,
//! e.g. `SKILL_MATCH_THRESHOLDS__GOOD=0.55`).
use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default config file looked up in the working directory by [`RecommenderConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "skill-match.toml";
pub const ENV_PREFIX: &str = "SKILL_MATCH_";

/// Score boundaries for the confidence labels.
/// Each bound is inclusive at the lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            excellent: 0.7,
            good: 0.5,
            fair: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Upper bound on vocabulary size
    pub max_features: usize,
    /// Number of results returned by `rank`
    pub top_n: usize,
    /// Inclusive (min, max) n-gram lengths
    pub ngram_range: (usize, usize),
    /// Tokens shorter than this (in chars) are dropped
    pub min_token_len: usize,
    pub thresholds: ConfidenceThresholds,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            top_n: 20,
            ngram_range: (1, 2),
            min_token_len: 1,
            thresholds: ConfidenceThresholds::default(),
        }
    }
}

impl RecommenderConfig {
    /// Load `skill-match.toml` (if present) and the environment over the defaults.
    pub fn load() -> Result<Self> {
        Self::from_file(DEFAULT_CONFIG_FILE)
    }

    /// Load the given TOML file (if present) and the environment over the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = Self::figment(path.as_ref()).extract()?;
        config.validate()?;
        tracing::debug!(?config, "loaded recommender config");
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(Error::InvalidConfig("max_features must be at least 1".into()));
        }
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".into()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::InvalidConfig(format!(
                "ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max"
            )));
        }
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig("min_token_len must be at least 1".into()));
        }
        let t = &self.thresholds;
        let ordered = t.excellent <= 1.0 && t.excellent > t.good && t.good > t.fair && t.fair > 0.0;
        if !ordered {
            return Err(Error::InvalidConfig(format!(
                "thresholds must satisfy 1 >= excellent > good > fair > 0, got {} / {} / {}",
                t.excellent, t.good, t.fair
            )));
        }
        Ok(())
    }
}
