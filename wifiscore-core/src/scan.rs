//! Observed access points reported by the wireless scan subsystem.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One access point seen during a scan.
///
/// # Examples
///
/// ```
/// use wifiscore_core::ScanResult;
///
/// let scan = ScanResult::new("Cafe", Some("aa:bb:cc:dd:ee:ff"), -67);
/// assert_eq!(scan.level, -67);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanResult {
    /// Network name, when broadcast.
    pub ssid: Option<String>,
    /// Access-point hardware address.
    pub bssid: Option<String>,
    /// Received signal strength in dBm.
    pub level: i32,
}

impl ScanResult {
    /// Build a scan result for a named network.
    #[must_use]
    pub fn new(ssid: impl Into<String>, bssid: Option<&str>, level: i32) -> Self {
        Self {
            ssid: Some(ssid.into()),
            bssid: bssid.map(str::to_owned),
            level,
        }
    }
}

/// Error raised when the scan subsystem cannot report its results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("scan results unavailable: {message}")]
pub struct ScanSourceError {
    /// Description supplied by the scan backend.
    pub message: String,
}

impl ScanSourceError {
    /// Wrap a backend failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port to the platform's most recent scan results.
///
/// The diagnostic dump cross-references these against the cache.
pub trait ScanResultSource: Send + Sync {
    /// Return the access points currently visible.
    ///
    /// # Errors
    /// Returns [`ScanSourceError`] when the backend cannot produce results.
    fn scan_results(&self) -> Result<Vec<ScanResult>, ScanSourceError>;
}
