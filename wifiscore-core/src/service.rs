//! Service surfaces handed to the cache's collaborators.
//!
//! The scoring authority only ever pushes or wipes scores, and
//! network-selection callers only ever ask for them. Each side gets its own
//! trait; one backing store may implement both.

use crate::{ScanResult, ScoredNetwork};

/// Value returned by [`NetworkScoreSource::get_network_score`] when no score
/// is available. Valid scores are never negative.
pub const NO_SCORE: i32 = -1;

/// Receiver for score pushes from the remote scoring authority.
///
/// # Examples
///
/// ```rust
/// use std::sync::Mutex;
/// use wifiscore_core::{NetworkScoreSink, ScoredNetwork};
///
/// #[derive(Default)]
/// struct Counting(Mutex<usize>);
///
/// impl NetworkScoreSink<()> for Counting {
///     fn update_scores(&self, networks: Option<Vec<ScoredNetwork<()>>>) {
///         if let Ok(mut seen) = self.0.lock() {
///             *seen += networks.map_or(0, |batch| batch.len());
///         }
///     }
///
///     fn clear_scores(&self) {}
/// }
///
/// let sink = Counting::default();
/// sink.update_scores(None);
/// sink.update_scores(Some(Vec::new()));
/// ```
pub trait NetworkScoreSink<C>: Send + Sync {
    /// Upsert every keyable record in `networks`.
    ///
    /// `None` is a no-op. Records without a usable identity are skipped
    /// individually; the rest of the batch still applies.
    fn update_scores(&self, networks: Option<Vec<ScoredNetwork<C>>>);

    /// Remove every stored score.
    fn clear_scores(&self);
}

/// Score lookups for callers ranking scan results.
pub trait NetworkScoreSource: Send + Sync {
    /// Return the score for `scan`, or [`NO_SCORE`] when none is known.
    fn get_network_score(&self, scan: &ScanResult) -> i32;
}

/// Access-control check guarding the diagnostic dump.
pub trait DumpAuthority {
    /// Report whether the current caller may read the cache contents.
    fn permits_dump(&self) -> bool;
}
