//! Behavioural coverage for deriving cache keys from records and scans.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wifiscore_core::{CacheKey, NetworkKey, NetworkType, ScanResult, ScoredNetwork, WifiKey};

/// Keys captured while a scenario runs.
#[derive(Debug, Default)]
pub struct KeyWorld {
    record_key: RefCell<Option<CacheKey>>,
    scan_key: RefCell<Option<CacheKey>>,
}

/// Fresh key state for each scenario.
#[fixture]
pub fn world() -> KeyWorld {
    KeyWorld::default()
}

fn record_for(network_key: NetworkKey) -> ScoredNetwork<()> {
    ScoredNetwork {
        network_key: Some(network_key),
        rssi_curve: None,
    }
}

#[given("a Wi-Fi score record for Net1 with an access point address")]
fn wifi_record_with_bssid(world: &KeyWorld) {
    let record = record_for(NetworkKey::wifi(WifiKey::new(
        "Net1",
        Some("AA:BB:CC:DD:EE:FF"),
    )));
    world.record_key.replace(CacheKey::for_record(&record));
}

#[given("a Wi-Fi score record for Net1 without an access point address")]
fn wifi_record_without_bssid(world: &KeyWorld) {
    let record = record_for(NetworkKey::wifi(WifiKey::new("Net1", None)));
    world.record_key.replace(CacheKey::for_record(&record));
}

#[given("a score record for a non Wi-Fi network named Net1")]
fn non_wifi_record(world: &KeyWorld) {
    let record = record_for(NetworkKey {
        network_type: NetworkType::Other,
        wifi_key: Some(WifiKey::new("Net1", None)),
    });
    world.record_key.replace(CacheKey::for_record(&record));
}

#[when("a scan observes Net1 at the same access point")]
fn scan_with_bssid(world: &KeyWorld) {
    let scan = ScanResult::new("Net1", Some("AA:BB:CC:DD:EE:FF"), -55);
    world.scan_key.replace(CacheKey::for_scan(&scan));
}

#[when("a scan observes a network without an SSID")]
fn scan_without_ssid(world: &KeyWorld) {
    let scan = ScanResult {
        ssid: None,
        bssid: Some("AA:BB:CC:DD:EE:FF".to_owned()),
        level: -55,
    };
    world.scan_key.replace(CacheKey::for_scan(&scan));
}

#[then("the record key and the scan key are identical")]
fn keys_match(world: &KeyWorld) {
    let record_key = world.record_key.borrow();
    assert!(record_key.is_some(), "record should be keyable");
    assert_eq!(*record_key, *world.scan_key.borrow());
}

#[then("the record has no cache key")]
fn record_unkeyable(world: &KeyWorld) {
    assert!(world.record_key.borrow().is_none());
}

#[then("the scan has no cache key")]
fn scan_unkeyable(world: &KeyWorld) {
    assert!(world.scan_key.borrow().is_none());
}

#[scenario(path = "tests/features/cache_key.feature", index = 0)]
fn record_and_scan_share_key(world: KeyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/cache_key.feature", index = 1)]
fn non_wifi_record_is_unkeyable(world: KeyWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/cache_key.feature", index = 2)]
fn hidden_scan_is_unkeyable(world: KeyWorld) {
    let _ = world;
}
