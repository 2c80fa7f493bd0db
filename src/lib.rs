//! Facade crate for the Wi-Fi network score cache.
//!
//! This crate re-exports the core domain types and the cache so callers can
//! depend on a single crate. Test doubles are available behind the
//! `test-support` feature.

#![forbid(unsafe_code)]

pub use wifiscore_core::{
    CacheKey, DumpAuthority, NO_SCORE, NetworkKey, NetworkScoreSink, NetworkScoreSource,
    NetworkType, RssiCurve, RssiCurveError, ScanResult, ScanResultSource, ScanSourceError,
    ScoreCurve, ScoredNetwork, WifiKey,
};

pub use wifiscore_cache::{ConfigError, DumpError, ScoreCache, ScoreCacheConfig, ScoreCacheStats};

#[cfg(feature = "test-support")]
pub use wifiscore_core::{ConstantCurve, FixedScanSource, StaticAuthority};
