//! Counters describing cache activity.
#![forbid(unsafe_code)]

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCacheStats {
    /// Keys currently stored.
    pub entries: usize,
    /// Records upserted since construction.
    pub records_applied: u64,
    /// Records dropped for lacking a usable identity.
    pub records_skipped: u64,
    /// Full wipes performed.
    pub clears: u64,
    /// Lookups that produced a score.
    pub lookup_hits: u64,
    /// Lookups that fell back to the sentinel.
    pub lookup_misses: u64,
}

/// Lock-free counters; never touched while the table lock is held.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    applied: AtomicU64,
    skipped: AtomicU64,
    clears: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Counters {
    pub(crate) fn record_batch(&self, applied: usize, skipped: usize) {
        self.applied.fetch_add(widen(applied), Ordering::Relaxed);
        self.skipped.fetch_add(widen(skipped), Ordering::Relaxed);
    }

    pub(crate) fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_lookup(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, entries: usize) -> ScoreCacheStats {
        ScoreCacheStats {
            entries,
            records_applied: self.applied.load(Ordering::Relaxed),
            records_skipped: self.skipped.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            lookup_hits: self.hits.load(Ordering::Relaxed),
            lookup_misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

fn widen(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
