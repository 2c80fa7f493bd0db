//! Identity and score records pushed by the scoring authority.
//!
//! A [`ScoredNetwork`] pairs an optional [`NetworkKey`] with an optional
//! score curve. Every identifying field is optional because records arrive
//! from a remote binding that may omit any of them; the cache decides which
//! records are usable when it derives a [`CacheKey`](crate::CacheKey).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of network a [`NetworkKey`] identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkType {
    /// Wireless local area network.
    Wifi,
    /// Any other network type. Records of this type are never cached.
    Other,
}

/// Wireless-specific identity: network name plus access-point address.
///
/// # Examples
///
/// ```
/// use wifiscore_core::WifiKey;
///
/// let key = WifiKey::new("Cafe", Some("aa:bb:cc:dd:ee:ff"));
/// assert_eq!(key.ssid.as_deref(), Some("Cafe"));
/// assert_eq!(key.bssid.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WifiKey {
    /// Network name.
    pub ssid: Option<String>,
    /// Access-point hardware address.
    pub bssid: Option<String>,
}

impl WifiKey {
    /// Build a key from an SSID and an optional BSSID.
    #[must_use]
    pub fn new(ssid: impl Into<String>, bssid: Option<&str>) -> Self {
        Self {
            ssid: Some(ssid.into()),
            bssid: bssid.map(str::to_owned),
        }
    }
}

/// Identity of a scored network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkKey {
    /// Kind of network identified.
    pub network_type: NetworkType,
    /// Wireless sub-key; only meaningful for [`NetworkType::Wifi`].
    pub wifi_key: Option<WifiKey>,
}

impl NetworkKey {
    /// Build a Wi-Fi network key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wifiscore_core::{NetworkKey, NetworkType, WifiKey};
    ///
    /// let key = NetworkKey::wifi(WifiKey::new("Cafe", None));
    /// assert_eq!(key.network_type, NetworkType::Wifi);
    /// ```
    #[must_use]
    pub const fn wifi(wifi_key: WifiKey) -> Self {
        Self {
            network_type: NetworkType::Wifi,
            wifi_key: Some(wifi_key),
        }
    }
}

/// A score record: network identity plus the curve scoring it.
///
/// Once handed to the cache the record is owned by it; a later record with
/// the same identity replaces it wholesale.
///
/// # Examples
///
/// ```
/// use wifiscore_core::{RssiCurve, ScoredNetwork, WifiKey};
///
/// let curve = RssiCurve::new(-80, 10, vec![10, 20, 30])?;
/// let record = ScoredNetwork::wifi(WifiKey::new("Cafe", None), Some(curve));
/// assert!(record.rssi_curve.is_some());
/// # Ok::<(), wifiscore_core::RssiCurveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredNetwork<C> {
    /// Identity of the scored network, if supplied.
    pub network_key: Option<NetworkKey>,
    /// Curve mapping RSSI to a score, if supplied.
    pub rssi_curve: Option<C>,
}

impl<C> ScoredNetwork<C> {
    /// Build a record for a Wi-Fi network.
    #[must_use]
    pub const fn wifi(wifi_key: WifiKey, rssi_curve: Option<C>) -> Self {
        Self {
            network_key: Some(NetworkKey::wifi(wifi_key)),
            rssi_curve,
        }
    }
}
