//! Time ranges over the continuous acquisition axis.
//!
//! The whole core works in one numeric time domain:
//!
//! - Timestamps are `f64` seconds counted from the Unix epoch
//!   (1970-01-01T00:00:00Z), matching the x-axis buffers of every series.
//! - A [`TimeRange`] is a closed interval `[start, end]` in that domain,
//!   normalized on construction so `start <= end` always holds.
//! - Two ranges are *disjoint* when one's end is at or before the other's
//!   start; ranges that merely touch at a point do not intersect.
//!
//! Providers and catalogues speak `chrono::DateTime<Utc>`; the conversion
//! helpers here define the only mapping between the two representations.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const MICROS_PER_SEC: f64 = 1_000_000.0;

/// A closed time interval `[start, end]` in seconds since the Unix epoch.
///
/// Construction normalizes swapped bounds, so every observable range
/// satisfies `start <= end`. Non-finite bounds are kept as passed (a range
/// built from NaN compares unequal to everything); callers that need to
/// guard against them can use [`TimeRange::is_finite`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    /// Build a range from two bounds, swapping them if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Build a range from two UTC timestamps (bounds may arrive reversed).
    pub fn from_datetimes(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self::new(
            a.timestamp_micros() as f64 / MICROS_PER_SEC,
            b.timestamp_micros() as f64 / MICROS_PER_SEC,
        )
    }

    /// Lower bound, seconds since the epoch.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound, seconds since the epoch.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Duration covered by the range, in seconds.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// True when both bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// True when `other` lies entirely inside this range (bounds included).
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the timestamp `t` lies inside the range (bounds included).
    pub fn contains_point(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// True when the two ranges share more than a single touching point.
    pub fn intersects(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when one range ends at or before the other starts.
    pub fn is_disjoint(&self, other: &TimeRange) -> bool {
        !self.intersects(other)
    }

    /// The overlapping part of the two ranges, if they intersect.
    ///
    /// Ranges that only touch at a point are disjoint and yield `None`.
    pub fn intersection(&self, other: &TimeRange) -> Option<TimeRange> {
        if self.intersects(other) {
            Some(TimeRange::new(
                self.start.max(other.start),
                self.end.min(other.end),
            ))
        } else {
            None
        }
    }

    /// The smallest range covering both operands.
    pub fn hull(&self, other: &TimeRange) -> TimeRange {
        TimeRange::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Grow the range by absolute margins (seconds) on each side.
    ///
    /// Negative margins are clamped to zero; expansion never shrinks a range.
    pub fn expanded(&self, before: f64, after: f64) -> TimeRange {
        TimeRange::new(self.start - before.max(0.0), self.end + after.max(0.0))
    }

    /// Lower bound as a UTC timestamp, when it fits the chrono domain.
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        datetime_from_secs(self.start)
    }

    /// Upper bound as a UTC timestamp, when it fits the chrono domain.
    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        datetime_from_secs(self.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

fn datetime_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    Utc.timestamp_micros((secs * MICROS_PER_SEC).round() as i64)
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn construction_normalizes_swapped_bounds() {
        let r = TimeRange::new(200.0, 100.0);
        assert_eq!(r.start(), 100.0);
        assert_eq!(r.end(), 200.0);
        assert_eq!(r, TimeRange::new(100.0, 200.0));
        assert_eq!(r.width(), 100.0);
    }

    #[test]
    fn touching_ranges_are_disjoint() {
        let a = TimeRange::new(0.0, 100.0);
        let b = TimeRange::new(100.0, 200.0);
        assert!(a.is_disjoint(&b));
        assert!(b.is_disjoint(&a));
        assert!(a.intersection(&b).is_none());

        let c = TimeRange::new(99.0, 150.0);
        assert!(a.intersects(&c));
        assert_eq!(a.intersection(&c), Some(TimeRange::new(99.0, 100.0)));
    }

    #[test]
    fn containment_includes_bounds() {
        let outer = TimeRange::new(100.0, 200.0);
        assert!(outer.contains(&TimeRange::new(100.0, 200.0)));
        assert!(outer.contains(&TimeRange::new(150.0, 180.0)));
        assert!(!outer.contains(&TimeRange::new(99.0, 150.0)));
        assert!(outer.contains_point(200.0));
        assert!(!outer.contains_point(200.5));
    }

    #[test]
    fn hull_covers_disjoint_operands() {
        let a = TimeRange::new(0.0, 10.0);
        let b = TimeRange::new(50.0, 60.0);
        assert_eq!(a.hull(&b), TimeRange::new(0.0, 60.0));
        // Hull of nested ranges is the outer one.
        assert_eq!(
            TimeRange::new(0.0, 100.0).hull(&TimeRange::new(10.0, 20.0)),
            TimeRange::new(0.0, 100.0)
        );
    }

    #[test]
    fn expansion_never_shrinks() {
        let r = TimeRange::new(100.0, 200.0);
        assert_eq!(r.expanded(20.0, 30.0), TimeRange::new(80.0, 230.0));
        // Negative margins are clamped instead of shrinking the range.
        assert_eq!(r.expanded(-50.0, -50.0), r);
    }

    #[test]
    fn datetime_conversions_agree_with_chrono() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();

        let r = TimeRange::from_datetimes(end, start);
        assert_eq!(r.width(), 3600.0);
        assert_eq!(r.start_datetime(), Some(start));
        assert_eq!(r.end_datetime(), Some(end));
    }

    #[test]
    fn non_finite_bounds_are_detectable() {
        assert!(TimeRange::new(0.0, 1.0).is_finite());
        assert!(!TimeRange::new(f64::NEG_INFINITY, 1.0).is_finite());
        assert!(!TimeRange::new(f64::NAN, 1.0).is_finite());
    }
}
