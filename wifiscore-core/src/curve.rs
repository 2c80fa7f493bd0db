//! Score curves mapping received signal strength to a quality score.
//!
//! The cache never computes scores itself. It stores whatever curve the
//! scoring authority supplied and evaluates it through the [`ScoreCurve`]
//! trait. [`RssiCurve`] is the stock bucketed implementation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Evaluate a score for an observed RSSI.
///
/// Implementations must be thread-safe (`Send` + `Sync`) because the cache
/// evaluates curves from any caller thread while holding its read lock. The
/// method must be a pure in-memory computation.
///
/// Valid scores are non-negative; negative values are reserved for the
/// cache's "no score" sentinel. Use [`ScoreCurve::sanitise`] to apply that
/// guard.
///
/// # Examples
///
/// ```rust
/// use wifiscore_core::ScoreCurve;
///
/// struct Flat(i32);
///
/// impl ScoreCurve for Flat {
///     fn lookup_score(&self, _rssi: i32) -> i32 {
///         self.0
///     }
/// }
///
/// assert_eq!(Flat(7).lookup_score(-60), 7);
/// assert_eq!(Flat::sanitise(-3), 0);
/// ```
pub trait ScoreCurve: Send + Sync {
    /// Return the score for a signal observed at `rssi` dBm.
    fn lookup_score(&self, rssi: i32) -> i32;

    /// Clamp a raw score into the valid, non-negative range.
    #[must_use]
    fn sanitise(score: i32) -> i32
    where
        Self: Sized,
    {
        score.max(0)
    }
}

/// Errors returned by [`RssiCurve::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RssiCurveError {
    /// Buckets must span at least one dBm.
    #[error("bucket width must be positive, got {width}")]
    NonPositiveWidth {
        /// Rejected width.
        width: i32,
    },
    /// A curve needs at least one bucket to score anything.
    #[error("RSSI curve must contain at least one bucket")]
    EmptyBuckets,
}

/// Bucketed score curve.
///
/// Bucket `i` covers RSSI values from `start + i * bucket_width` up to the
/// next bucket. Readings below the first bucket use the first score; readings
/// past the last bucket use the last score.
///
/// # Examples
///
/// ```
/// use wifiscore_core::{RssiCurve, ScoreCurve};
///
/// let curve = RssiCurve::new(-80, 10, vec![10, 20, 30])?;
/// assert_eq!(curve.lookup_score(-100), 10);
/// assert_eq!(curve.lookup_score(-70), 20);
/// assert_eq!(curve.lookup_score(-20), 30);
/// # Ok::<(), wifiscore_core::RssiCurveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RssiCurveParts", into = "RssiCurveParts")
)]
pub struct RssiCurve {
    start: i32,
    bucket_width: i32,
    buckets: Vec<u8>,
}

impl RssiCurve {
    /// Validate and construct a curve.
    ///
    /// # Errors
    /// Returns [`RssiCurveError::NonPositiveWidth`] when `bucket_width` is
    /// zero or negative and [`RssiCurveError::EmptyBuckets`] when no buckets
    /// are supplied.
    pub fn new(start: i32, bucket_width: i32, buckets: Vec<u8>) -> Result<Self, RssiCurveError> {
        if bucket_width <= 0 {
            return Err(RssiCurveError::NonPositiveWidth {
                width: bucket_width,
            });
        }
        if buckets.is_empty() {
            return Err(RssiCurveError::EmptyBuckets);
        }
        Ok(Self {
            start,
            bucket_width,
            buckets,
        })
    }

    /// RSSI at which the first bucket begins.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Width of each bucket in dBm.
    #[must_use]
    pub const fn bucket_width(&self) -> i32 {
        self.bucket_width
    }

    /// Score stored in each bucket.
    #[must_use]
    pub fn buckets(&self) -> &[u8] {
        &self.buckets
    }

    fn bucket_index(&self, rssi: i32) -> usize {
        let offset = i64::from(rssi) - i64::from(self.start);
        let raw = offset
            .checked_div(i64::from(self.bucket_width))
            .unwrap_or(0);
        let last = self.buckets.len().saturating_sub(1);
        usize::try_from(raw).map_or(0, |index| index.min(last))
    }
}

impl ScoreCurve for RssiCurve {
    fn lookup_score(&self, rssi: i32) -> i32 {
        self.buckets
            .get(self.bucket_index(rssi))
            .copied()
            .map_or(0, i32::from)
    }
}

impl fmt::Display for RssiCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RssiCurve[start={},width={},buckets=",
            self.start, self.bucket_width
        )?;
        for (position, bucket) in self.buckets.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{bucket}")?;
        }
        f.write_str("]")
    }
}

/// Unvalidated wire form of [`RssiCurve`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RssiCurveParts {
    start: i32,
    bucket_width: i32,
    buckets: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RssiCurveParts> for RssiCurve {
    type Error = RssiCurveError;

    fn try_from(parts: RssiCurveParts) -> Result<Self, Self::Error> {
        Self::new(parts.start, parts.bucket_width, parts.buckets)
    }
}

#[cfg(feature = "serde")]
impl From<RssiCurve> for RssiCurveParts {
    fn from(curve: RssiCurve) -> Self {
        Self {
            start: curve.start,
            bucket_width: curve.bucket_width,
            buckets: curve.buckets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn curve() -> RssiCurve {
        RssiCurve::new(-80, 10, vec![10, 20, 30]).expect("valid curve")
    }

    #[rstest]
    #[case(-120, 10)] // far below the first bucket
    #[case(-81, 10)]
    #[case(-80, 10)]
    #[case(-71, 10)]
    #[case(-70, 20)]
    #[case(-61, 20)]
    #[case(-60, 30)]
    #[case(0, 30)] // far past the last bucket
    #[case(i32::MAX, 30)]
    #[case(i32::MIN, 10)]
    fn lookup_clamps_to_bucket_range(curve: RssiCurve, #[case] rssi: i32, #[case] expected: i32) {
        assert_eq!(curve.lookup_score(rssi), expected);
    }

    #[rstest]
    fn single_bucket_scores_everything_alike() {
        let curve = RssiCurve::new(-60, 5, vec![42]).expect("valid curve");
        assert_eq!(curve.lookup_score(-90), 42);
        assert_eq!(curve.lookup_score(-30), 42);
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn rejects_non_positive_width(#[case] width: i32) {
        let err = RssiCurve::new(-80, width, vec![1]).expect_err("width must be rejected");
        assert_eq!(err, RssiCurveError::NonPositiveWidth { width });
    }

    #[rstest]
    fn rejects_empty_buckets() {
        let err = RssiCurve::new(-80, 10, Vec::new()).expect_err("empty buckets");
        assert_eq!(err, RssiCurveError::EmptyBuckets);
    }

    #[rstest]
    fn display_lists_buckets(curve: RssiCurve) {
        assert_eq!(
            curve.to_string(),
            "RssiCurve[start=-80,width=10,buckets=10,20,30]"
        );
    }

    #[rstest]
    #[case(i32::MIN, 0)]
    #[case(-1, 0)]
    #[case(0, 0)]
    #[case(17, 17)]
    fn sanitise_clamps_negative_scores(#[case] raw: i32, #[case] expected: i32) {
        assert_eq!(RssiCurve::sanitise(raw), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_applies_validation() {
        let json = r#"{"start":-80,"bucket_width":0,"buckets":[1]}"#;
        let result: Result<RssiCurve, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_valid_curve(curve: RssiCurve) {
        let json = r#"{"start":-80,"bucket_width":10,"buckets":[10,20,30]}"#;
        let decoded: RssiCurve = serde_json::from_str(json).expect("decode curve");
        assert_eq!(decoded, curve);
    }
}
