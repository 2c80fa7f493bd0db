//! Core domain types for the Wi-Fi network score cache.
//!
//! The crate defines the records pushed by a remote scoring authority
//! ([`ScoredNetwork`]), the observations produced by the scan subsystem
//! ([`ScanResult`]), the score curves that turn signal strength into a score
//! ([`ScoreCurve`], [`RssiCurve`]), and the single key-derivation rule
//! ([`CacheKey`]) shared by both input shapes. The traits in [`service`] are
//! the seams between the cache and its collaborators.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod curve;
pub mod key;
pub mod network;
pub mod scan;
pub mod service;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use curve::{RssiCurve, RssiCurveError, ScoreCurve};
pub use key::CacheKey;
pub use network::{NetworkKey, NetworkType, ScoredNetwork, WifiKey};
pub use scan::{ScanResult, ScanResultSource, ScanSourceError};
pub use service::{DumpAuthority, NO_SCORE, NetworkScoreSink, NetworkScoreSource};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{ConstantCurve, FixedScanSource, StaticAuthority};
