//! Administrative text dump of the cache contents.
#![forbid(unsafe_code)]

use std::fmt::{self, Write};

use wifiscore_core::{CacheKey, DumpAuthority, NO_SCORE, ScanResultSource, ScoreCurve};

use crate::{DumpError, ScoreCache};

const INDENT: &str = "  ";
const ENTRY_INDENT: &str = "    ";
const ABSENT: &str = "none";

impl<C> ScoreCache<C>
where
    C: ScoreCurve + Clone + fmt::Display,
{
    /// Render every stored curve and the score of each currently visible
    /// access point.
    ///
    /// The table is copied under the read lock first, so the dump never
    /// holds the lock while querying scan results or writing output.
    ///
    /// # Errors
    /// Returns [`DumpError::PermissionDenied`] when `authority` refuses the
    /// caller, [`DumpError::ScanSource`] when scan results are unavailable,
    /// and [`DumpError::Write`] when `out` rejects output.
    ///
    /// # Examples
    ///
    /// ```
    /// use wifiscore_cache::ScoreCache;
    /// use wifiscore_core::{
    ///     DumpAuthority, RssiCurve, ScanResult, ScanResultSource, ScanSourceError, ScoredNetwork,
    ///     WifiKey,
    /// };
    ///
    /// struct Admin;
    /// impl DumpAuthority for Admin {
    ///     fn permits_dump(&self) -> bool {
    ///         true
    ///     }
    /// }
    ///
    /// struct Nearby;
    /// impl ScanResultSource for Nearby {
    ///     fn scan_results(&self) -> Result<Vec<ScanResult>, ScanSourceError> {
    ///         Ok(vec![ScanResult::new("Cafe", None, -75)])
    ///     }
    /// }
    ///
    /// let cache: ScoreCache = ScoreCache::new();
    /// cache.upsert_all([ScoredNetwork::wifi(
    ///     WifiKey::new("Cafe", None),
    ///     Some(RssiCurve::new(-80, 10, vec![10, 20])?),
    /// )]);
    ///
    /// let mut out = String::new();
    /// cache.dump(&Admin, &Nearby, &mut out)?;
    /// assert!(out.contains("Cafe: RssiCurve[start=-80,width=10,buckets=10,20]"));
    /// assert!(out.contains("Cafe: 10"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn dump<W>(
        &self,
        authority: &dyn DumpAuthority,
        scans: &dyn ScanResultSource,
        out: &mut W,
    ) -> Result<(), DumpError>
    where
        W: Write + ?Sized,
    {
        if !authority.permits_dump() {
            return Err(DumpError::PermissionDenied);
        }

        let entries = self.snapshot();
        let visible = scans.scan_results()?;

        writeln!(out, "NetworkScoreCache")?;
        writeln!(out, "{INDENT}All score curves:")?;
        for (key, curve) in &entries {
            match curve {
                Some(found) => writeln!(out, "{ENTRY_INDENT}{key}: {found}")?,
                None => writeln!(out, "{ENTRY_INDENT}{key}: {ABSENT}")?,
            }
        }

        writeln!(out, "{INDENT}Current network scores:")?;
        for scan in &visible {
            let score = self.peek_score(scan).unwrap_or(NO_SCORE);
            match CacheKey::for_scan(scan) {
                Some(key) => writeln!(out, "{ENTRY_INDENT}{key}: {score}")?,
                None => writeln!(out, "{ENTRY_INDENT}{ABSENT}: {score}")?,
            }
        }
        Ok(())
    }
}
