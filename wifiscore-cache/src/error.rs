//! Error types raised by the cache's administrative surfaces.
#![forbid(unsafe_code)]

use std::fmt;

use thiserror::Error;
use wifiscore_core::ScanSourceError;

/// Errors raised while rendering the diagnostic dump.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The caller is not allowed to read the cache contents.
    #[error("permission denied: caller may not dump the network score cache")]
    PermissionDenied,
    /// Current scan results could not be read.
    #[error("failed to read current scan results")]
    ScanSource(#[from] ScanSourceError),
    /// Writing to the output sink failed.
    #[error("failed to write dump output")]
    Write(#[from] fmt::Error),
}

/// Errors raised while loading [`ScoreCacheConfig`](crate::ScoreCacheConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for the schema.
    #[error("failed to parse score cache configuration")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
