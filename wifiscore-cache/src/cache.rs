//! The score table and its locking discipline.
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use wifiscore_core::{
    CacheKey, NO_SCORE, NetworkScoreSink, NetworkScoreSource, RssiCurve, ScanResult, ScoreCurve,
    ScoredNetwork,
};

use crate::ScoreCacheConfig;
use crate::stats::{Counters, ScoreCacheStats};

type Table<C> = HashMap<CacheKey, ScoredNetwork<C>>;

/// Thread-safe map from network identity to the score curve supplied for it.
///
/// One reader/writer lock guards the whole table. Upserts from a batch and
/// full clears each happen under a single write acquisition, so readers see a
/// table either before or after any batch or clear, never part way through.
/// Keys are derived and skipped records are logged before the lock is taken.
///
/// The cache implements [`NetworkScoreSink`] for the scoring authority and
/// [`NetworkScoreSource`] for network-selection callers.
///
/// # Examples
///
/// ```
/// use wifiscore_cache::ScoreCache;
/// use wifiscore_core::{
///     NO_SCORE, NetworkScoreSink, NetworkScoreSource, RssiCurve, ScanResult, ScoredNetwork,
///     WifiKey,
/// };
///
/// let cache: ScoreCache = ScoreCache::new();
/// let curve = RssiCurve::new(-80, 10, vec![10, 20, 30])?;
/// cache.update_scores(Some(vec![ScoredNetwork::wifi(
///     WifiKey::new("Cafe", Some("aa:bb:cc:dd:ee:ff")),
///     Some(curve),
/// )]));
///
/// let scan = ScanResult::new("Cafe", Some("aa:bb:cc:dd:ee:ff"), -65);
/// assert_eq!(cache.get_network_score(&scan), 20);
///
/// cache.clear_scores();
/// assert_eq!(cache.get_network_score(&scan), NO_SCORE);
/// # Ok::<(), wifiscore_core::RssiCurveError>(())
/// ```
#[derive(Debug)]
pub struct ScoreCache<C = RssiCurve> {
    table: RwLock<Table<C>>,
    config: ScoreCacheConfig,
    counters: Counters,
}

impl<C: ScoreCurve> Default for ScoreCache<C> {
    fn default() -> Self {
        Self::with_config(ScoreCacheConfig::default())
    }
}

impl<C: ScoreCurve> ScoreCache<C> {
    /// Create an empty cache with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache using `config`.
    #[must_use]
    pub fn with_config(config: ScoreCacheConfig) -> Self {
        Self {
            table: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            config,
            counters: Counters::default(),
        }
    }

    /// Upsert every keyable record, replacing earlier entries for the same
    /// key.
    ///
    /// Records without a usable Wi-Fi identity are skipped and logged; they
    /// never abort the batch. Later records in the same batch win over
    /// earlier ones.
    pub fn upsert_all<I>(&self, networks: I)
    where
        I: IntoIterator<Item = ScoredNetwork<C>>,
    {
        let mut keyed = Vec::new();
        let mut skipped = 0_usize;
        for network in networks {
            if let Some(key) = CacheKey::for_record(&network) {
                keyed.push((key, network));
            } else {
                skipped = skipped.saturating_add(1);
                warn!(
                    "Skipped score record without a usable Wi-Fi identity: network_key={:?}",
                    network.network_key
                );
            }
        }

        let applied = keyed.len();
        debug!("Updating network scores: applied={applied}, skipped={skipped}");
        if applied > 0 {
            let mut table = self.write_table();
            table.extend(keyed);
        }
        self.counters.record_batch(applied, skipped);
    }

    /// Remove every stored score in one step.
    pub fn clear(&self) {
        self.write_table().clear();
        self.counters.record_clear();
        debug!("Cleared network scores");
    }

    /// Return the score for `scan`, or `None` when the scan has no SSID, no
    /// entry matches, or the matching entry carries no curve.
    #[must_use]
    pub fn score_for(&self, scan: &ScanResult) -> Option<i32> {
        let key = CacheKey::for_scan(scan);
        let score = key.as_ref().and_then(|found| self.lookup(found, scan.level));
        self.counters.record_lookup(score.is_some());
        if self.config.log_lookups
            && let (Some(found), Some(value)) = (&key, score)
        {
            debug!(
                "Network score hit: key={found}, score={value}, rssi={}",
                scan.level
            );
        }
        score
    }

    /// Score `scan` without touching the lookup counters.
    pub(crate) fn peek_score(&self, scan: &ScanResult) -> Option<i32> {
        CacheKey::for_scan(scan).and_then(|key| self.lookup(&key, scan.level))
    }

    fn lookup(&self, key: &CacheKey, rssi: i32) -> Option<i32> {
        let table = self.read_table();
        let curve = table.get(key)?.rssi_curve.as_ref()?;
        Some(C::sanitise(curve.lookup_score(rssi)))
    }

    /// Copy every entry's key and curve, sorted by key.
    ///
    /// The copy is taken under one read acquisition, so it reflects a single
    /// consistent state of the table.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(CacheKey, Option<C>)>
    where
        C: Clone,
    {
        let mut entries: Vec<_> = {
            let table = self.read_table();
            table
                .iter()
                .map(|(key, network)| (key.clone(), network.rssi_curve.clone()))
                .collect()
        };
        entries.sort_by(|left, right| left.0.cmp(&right.0));
        entries
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_table().len()
    }

    /// Report whether the cache holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_table().is_empty()
    }

    /// Current activity counters and table size.
    #[must_use]
    pub fn stats(&self) -> ScoreCacheStats {
        self.counters.snapshot(self.len())
    }

    /// Configuration the cache was built with.
    #[must_use]
    pub const fn config(&self) -> &ScoreCacheConfig {
        &self.config
    }

    // Every critical section is a single map call, so a poisoned guard still
    // holds a whole table.
    pub(crate) fn read_table(&self) -> RwLockReadGuard<'_, Table<C>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_table(&self) -> RwLockWriteGuard<'_, Table<C>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: ScoreCurve> NetworkScoreSink<C> for ScoreCache<C> {
    fn update_scores(&self, networks: Option<Vec<ScoredNetwork<C>>>) {
        let Some(batch) = networks else {
            return;
        };
        self.upsert_all(batch);
    }

    fn clear_scores(&self) {
        self.clear();
    }
}

impl<C: ScoreCurve> NetworkScoreSource for ScoreCache<C> {
    fn get_network_score(&self, scan: &ScanResult) -> i32 {
        self.score_for(scan).unwrap_or(NO_SCORE)
    }
}
