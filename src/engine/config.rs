//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse engine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Which variant of the engine to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Voter identity, vote retraction and restarts
    #[default]
    Full,
    /// Every vote counts once; no voter identity and no restart
    Anonymous,
}

/// Engine configuration.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
///
/// # Example
///
/// ```rust
/// use versus::engine::{EngineConfig, EngineMode};
///
/// let config = EngineConfig::from_json(r#"{ "mode": "anonymous", "history_limit": 50 }"#).unwrap();
/// assert_eq!(config.mode, EngineMode::Anonymous);
/// assert_eq!(config.history_limit, Some(50));
///
/// assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub mode: EngineMode,
    /// Maximum number of history steps kept; unbounded when absent.
    ///
    /// Each step holds the full snapshot it replaced, so memory and
    /// checkpoint size grow with steps times tournament size. Long-running
    /// tournaments should set a limit; undo reaches back at most this far.
    pub history_limit: Option<usize>,
}

impl EngineConfig {
    pub fn anonymous() -> Self {
        Self {
            mode: EngineMode::Anonymous,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.history_limit {
            Some(0) => Err(ConfigError::ZeroHistoryLimit),
            _ => Ok(()),
        }
    }
}
