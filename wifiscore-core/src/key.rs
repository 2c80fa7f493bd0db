//! Cache keys derived from score records and scan results.
//!
//! Both derivations funnel through one composition rule so that a record and
//! a scan describing the same SSID/BSSID pair always meet on the same key.
//!
//! The rule concatenates the SSID and BSSID with no separator. Distinct pairs
//! can therefore collide: SSID `"AB"` with BSSID `"C"` and SSID `"A"` with
//! BSSID `"BC"` both produce `"ABC"`. Real BSSIDs use a fixed
//! colon-separated format, which makes such collisions unlikely but not
//! impossible. Existing key formats depend on the plain concatenation, so it
//! is kept.

use std::borrow::Borrow;
use std::fmt;

use crate::{NetworkType, ScanResult, ScoredNetwork};

/// Identity of a cached network: the SSID followed by the BSSID, if any.
///
/// # Examples
///
/// ```
/// use wifiscore_core::{CacheKey, ScanResult, ScoredNetwork, WifiKey};
///
/// let record: ScoredNetwork<()> =
///     ScoredNetwork::wifi(WifiKey::new("Cafe", Some("aa:bb:cc:dd:ee:ff")), None);
/// let scan = ScanResult::new("Cafe", Some("aa:bb:cc:dd:ee:ff"), -60);
///
/// assert_eq!(CacheKey::for_record(&record), CacheKey::for_scan(&scan));
/// assert_eq!(
///     CacheKey::for_scan(&scan).map(|key| key.to_string()),
///     Some("Cafeaa:bb:cc:dd:ee:ff".to_owned())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a stored score record.
    ///
    /// Returns `None` when the record has no network key, no Wi-Fi sub-key,
    /// a non-Wi-Fi network type, or no SSID.
    #[must_use]
    pub fn for_record<C>(record: &ScoredNetwork<C>) -> Option<Self> {
        let network_key = record.network_key.as_ref()?;
        let wifi_key = network_key.wifi_key.as_ref()?;
        if network_key.network_type != NetworkType::Wifi {
            return None;
        }
        Self::compose(wifi_key.ssid.as_deref(), wifi_key.bssid.as_deref())
    }

    /// Derive the lookup key for an observed scan result.
    ///
    /// Returns `None` when the scan carries no SSID.
    #[must_use]
    pub fn for_scan(scan: &ScanResult) -> Option<Self> {
        Self::compose(scan.ssid.as_deref(), scan.bssid.as_deref())
    }

    fn compose(ssid: Option<&str>, bssid: Option<&str>) -> Option<Self> {
        let mut key = ssid?.to_owned();
        if let Some(address) = bssid {
            key.push_str(address);
        }
        Some(Self(key))
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NetworkKey, WifiKey};
    use rstest::rstest;

    fn record(network_key: Option<NetworkKey>) -> ScoredNetwork<()> {
        ScoredNetwork {
            network_key,
            rssi_curve: None,
        }
    }

    #[rstest]
    #[case("Net1", Some("AA:BB:CC:DD:EE:FF"), "Net1AA:BB:CC:DD:EE:FF")]
    #[case("Net2", None, "Net2")]
    #[case("Net2", Some(""), "Net2")]
    #[case("", None, "")]
    fn record_key_concatenates_without_separator(
        #[case] ssid: &str,
        #[case] bssid: Option<&str>,
        #[case] expected: &str,
    ) {
        let key = CacheKey::for_record(&record(Some(NetworkKey::wifi(WifiKey::new(ssid, bssid)))))
            .expect("record should be keyable");
        assert_eq!(key.as_str(), expected);
    }

    #[rstest]
    fn record_without_network_key_has_no_key() {
        assert_eq!(CacheKey::for_record(&record(None)), None);
    }

    #[rstest]
    fn record_without_wifi_key_has_no_key() {
        let network_key = NetworkKey {
            network_type: NetworkType::Wifi,
            wifi_key: None,
        };
        assert_eq!(CacheKey::for_record(&record(Some(network_key))), None);
    }

    #[rstest]
    fn non_wifi_record_has_no_key() {
        let network_key = NetworkKey {
            network_type: NetworkType::Other,
            wifi_key: Some(WifiKey::new("Net1", None)),
        };
        assert_eq!(CacheKey::for_record(&record(Some(network_key))), None);
    }

    #[rstest]
    fn record_without_ssid_has_no_key() {
        let wifi_key = WifiKey {
            ssid: None,
            bssid: Some("AA:BB:CC:DD:EE:FF".to_owned()),
        };
        assert_eq!(
            CacheKey::for_record(&record(Some(NetworkKey::wifi(wifi_key)))),
            None
        );
    }

    #[rstest]
    fn scan_without_ssid_has_no_key() {
        let scan = ScanResult {
            ssid: None,
            bssid: Some("AA:BB:CC:DD:EE:FF".to_owned()),
            level: -50,
        };
        assert_eq!(CacheKey::for_scan(&scan), None);
    }

    #[rstest]
    fn bssid_distinguishes_access_points() {
        let bare = CacheKey::for_scan(&ScanResult::new("Net1", None, -50));
        let first = CacheKey::for_scan(&ScanResult::new("Net1", Some("AA:AA:AA:AA:AA:AA"), -50));
        let second = CacheKey::for_scan(&ScanResult::new("Net1", Some("BB:BB:BB:BB:BB:BB"), -50));
        assert_ne!(bare, first);
        assert_ne!(first, second);
    }

    #[rstest]
    fn concatenation_admits_collisions() {
        let left = CacheKey::for_scan(&ScanResult::new("AB", Some("C"), -50));
        let right = CacheKey::for_scan(&ScanResult::new("A", Some("BC"), -50));
        assert_eq!(left, right);
    }
}
