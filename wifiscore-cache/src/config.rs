//! Tunables for [`ScoreCache`](crate::ScoreCache).
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime configuration for a score cache.
///
/// Missing fields fall back to their defaults; unknown fields are rejected so
/// that typos surface instead of silently doing nothing.
///
/// # Examples
///
/// ```
/// use wifiscore_cache::ScoreCacheConfig;
///
/// let config = ScoreCacheConfig::from_json_str(r#"{"log_lookups": true}"#)?;
/// assert!(config.log_lookups);
/// assert_eq!(config.initial_capacity, 0);
/// # Ok::<(), wifiscore_cache::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreCacheConfig {
    /// Log every cache hit at `debug` level with its key, score, and RSSI.
    pub log_lookups: bool,
    /// Capacity hint for the backing table.
    pub initial_capacity: usize,
}

impl ScoreCacheConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is malformed or
    /// names an unknown field.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Enable or disable per-lookup logging, consuming `self`.
    #[must_use]
    pub const fn with_lookup_logging(mut self, enabled: bool) -> Self {
        self.log_lookups = enabled;
        self
    }

    /// Set the table capacity hint, consuming `self`.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_document_yields_defaults() {
        let config = ScoreCacheConfig::from_json_str("{}").expect("parse config");
        assert_eq!(config, ScoreCacheConfig::default());
    }

    #[rstest]
    fn reads_every_field() {
        let config =
            ScoreCacheConfig::from_json_str(r#"{"log_lookups":true,"initial_capacity":64}"#)
                .expect("parse config");
        assert_eq!(
            config,
            ScoreCacheConfig::default()
                .with_lookup_logging(true)
                .with_initial_capacity(64)
        );
    }

    #[rstest]
    #[case(r#"{"log_lookup":true}"#)]
    #[case(r#"{"initial_capacity":-1}"#)]
    #[case("not json")]
    fn rejects_invalid_documents(#[case] json: &str) {
        let err = ScoreCacheConfig::from_json_str(json).expect_err("invalid config");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
