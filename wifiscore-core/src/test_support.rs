//! Test doubles for the cache's collaborators, used by unit and behaviour
//! tests.

use std::fmt;

use crate::{DumpAuthority, ScanResult, ScanResultSource, ScanSourceError, ScoreCurve};

/// Curve returning the same score for every RSSI.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConstantCurve(pub i32);

impl ScoreCurve for ConstantCurve {
    fn lookup_score(&self, _rssi: i32) -> i32 {
        self.0
    }
}

impl fmt::Display for ConstantCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantCurve[{}]", self.0)
    }
}

/// Scan source returning a fixed list, or a fixed failure.
#[derive(Debug, Clone, Default)]
pub struct FixedScanSource {
    results: Vec<ScanResult>,
    failure: Option<String>,
}

impl FixedScanSource {
    /// Create a source reporting `results`.
    pub fn with_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ScanResult>,
    {
        Self {
            results: results.into_iter().collect(),
            failure: None,
        }
    }

    /// Create a source whose every scan fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl ScanResultSource for FixedScanSource {
    fn scan_results(&self) -> Result<Vec<ScanResult>, ScanSourceError> {
        match &self.failure {
            Some(message) => Err(ScanSourceError::new(message.as_str())),
            None => Ok(self.results.clone()),
        }
    }
}

/// Authority granting or refusing every dump request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StaticAuthority(pub bool);

impl DumpAuthority for StaticAuthority {
    fn permits_dump(&self) -> bool {
        self.0
    }
}
