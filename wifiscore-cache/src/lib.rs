//! In-memory cache of externally supplied Wi-Fi network scores.
//!
//! A remote scoring authority pushes batches of
//! [`ScoredNetwork`](wifiscore_core::ScoredNetwork) records into a
//! [`ScoreCache`] or wipes it. Network-selection callers then ask the cache
//! for the score of each observed
//! [`ScanResult`](wifiscore_core::ScanResult) instead of making a network
//! round-trip per query. The cache stores the curve supplied for each
//! network and evaluates it at the observed signal strength; it never
//! computes scores itself.
//!
//! The crate provides:
//! - [`ScoreCache`], implementing both
//!   [`NetworkScoreSink`](wifiscore_core::NetworkScoreSink) and
//!   [`NetworkScoreSource`](wifiscore_core::NetworkScoreSource) over one
//!   lock-guarded table.
//! - [`ScoreCacheConfig`], loadable from JSON.
//! - [`ScoreCacheStats`], counters for applied and skipped records and for
//!   lookup hits and misses.
//! - An access-controlled diagnostic dump ([`ScoreCache::dump`]).
//!
//! Diagnostics go through the [`log`] facade; the host picks the logger.

#![forbid(unsafe_code)]

mod cache;
mod config;
mod dump;
mod error;
mod stats;

pub use cache::ScoreCache;
pub use config::ScoreCacheConfig;
pub use error::{ConfigError, DumpError};
pub use stats::ScoreCacheStats;
