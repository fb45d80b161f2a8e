//! Comparison run configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_LOW_THRESHOLD: u8 = 60;
pub const DEFAULT_HIGH_THRESHOLD: u8 = 90;
pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("top_k must be at least 1")]
    TopKZero,

    #[error("threshold {name}={value} is outside 0..=100")]
    ThresholdRange { name: &'static str, value: u8 },

    #[error("low_threshold ({low}) must be below high_threshold ({high})")]
    ThresholdOrder { low: u8, high: u8 },

    #[error("adjudication model identifier is empty")]
    EmptyModel,

    #[error("max_tokens must be at least 1")]
    MaxTokensZero,

    #[error("timeout_secs must be at least 1")]
    TimeoutZero,
}

/// Similarity thresholds for the decision gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub low: u8,
    pub high: u8,
}

/// Settings for one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Candidates kept per reference field.
    pub top_k: usize,
    pub low_threshold: u8,
    pub high_threshold: u8,
    /// Adjudication model identifier.
    pub model: String,
    /// Output-token budget for each adjudication call.
    pub max_tokens: u32,
    /// Per-call timeout for the adjudication service.
    pub timeout_secs: u64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CompareConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            low: self.low_threshold,
            high: self.high_threshold,
        }
    }

    /// Check every field before a run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::TopKZero);
        }
        for (name, value) in [
            ("low_threshold", self.low_threshold),
            ("high_threshold", self.high_threshold),
        ] {
            if value > 100 {
                return Err(ConfigError::ThresholdRange { name, value });
            }
        }
        if self.low_threshold >= self.high_threshold {
            return Err(ConfigError::ThresholdOrder {
                low: self.low_threshold,
                high: self.high_threshold,
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::MaxTokensZero);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::TimeoutZero);
        }
        Ok(())
    }
}
