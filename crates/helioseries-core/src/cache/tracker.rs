//! The per-variable cache-range tracker.

use serde::{Deserialize, Serialize};

use crate::cache::strategy::{FetchPlan, FetchStrategy};
use crate::interval::TimeRange;

/// Tracks which time interval of one variable is already resident.
///
/// The tracker holds the variable's cached range (`None` before the first
/// fetch), the visible range the display currently wants, and the fetch
/// strategy. It is owned and mutated by a single variable at a time; no
/// internal locking.
///
/// The cached range only ever grows (hull of old and newly fetched ranges)
/// until an explicit [`reset`](CacheRangeTracker::reset), so
/// `missing_intervals` answers shrink monotonically as fetches complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheRangeTracker {
    cached: Option<TimeRange>,
    visible: Option<TimeRange>,
    strategy: FetchStrategy,
}

impl CacheRangeTracker {
    /// A tracker with no cached data and the given strategy.
    pub fn new(strategy: FetchStrategy) -> Self {
        Self {
            cached: None,
            visible: None,
            strategy,
        }
    }

    /// The interval for which data has been fetched so far, if any.
    pub fn cached_range(&self) -> Option<TimeRange> {
        self.cached
    }

    /// The interval the display currently needs, if any.
    pub fn visible_range(&self) -> Option<TimeRange> {
        self.visible
    }

    /// The configured fetch strategy.
    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Record the interval the display currently needs.
    pub fn set_visible_range(&mut self, range: TimeRange) {
        self.visible = Some(range);
    }

    /// True once the cached range covers the visible range.
    ///
    /// Vacuously true while nothing is visible; false while nothing is
    /// cached. The orchestration layer checks this after its fetch pipeline
    /// settles.
    pub fn covers_visible(&self) -> bool {
        match (&self.cached, &self.visible) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(cached), Some(visible)) => cached.contains(visible),
        }
    }

    /// Plan a fetch for `requested` with the configured strategy.
    pub fn fetch_plan(&self, requested: TimeRange) -> FetchPlan {
        self.strategy.fetch_plan(requested)
    }

    /// True when `requested` is already fully resident.
    pub fn contains(&self, requested: &TimeRange) -> bool {
        self.cached.as_ref().is_some_and(|c| c.contains(requested))
    }

    /// The parts of `requested` that are not yet cached, as 0, 1, or 2
    /// disjoint intervals in ascending order.
    ///
    /// The five shapes, with a cached range `[100, 200]`:
    ///
    /// - `[50, 80]`   -> `[[50, 80]]` (disjoint, before; touching counts
    ///   as disjoint)
    /// - `[250, 300]` -> `[[250, 300]]` (disjoint, after)
    /// - `[150, 180]` -> `[]` (fully contained)
    /// - `[50, 150]`  -> `[[50, 100]]` (overlap on one side)
    /// - `[50, 250]`  -> `[[50, 100], [200, 250]]` (straddles both sides)
    pub fn missing_intervals(&self, requested: TimeRange) -> Vec<TimeRange> {
        let Some(cached) = self.cached else {
            return vec![requested];
        };

        if cached.contains(&requested) {
            return Vec::new();
        }
        if cached.is_disjoint(&requested) {
            return vec![requested];
        }
        if requested.start() < cached.start() && requested.end() <= cached.end() {
            return vec![TimeRange::new(requested.start(), cached.start())];
        }
        if requested.start() >= cached.start() && requested.end() > cached.end() {
            return vec![TimeRange::new(cached.end(), requested.end())];
        }
        vec![
            TimeRange::new(requested.start(), cached.start()),
            TimeRange::new(cached.end(), requested.end()),
        ]
    }

    /// Record a completed fetch: the cached range becomes the hull of its
    /// old value and `fetched`. Never shrinks.
    pub fn note_fetched(&mut self, fetched: TimeRange) {
        self.cached = Some(match self.cached {
            Some(cached) => cached.hull(&fetched),
            None => fetched,
        });
    }

    /// Forget everything that was cached (the visible range and strategy
    /// stay).
    pub fn reset(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_cache(start: f64, end: f64) -> CacheRangeTracker {
        let mut tracker = CacheRangeTracker::default();
        tracker.note_fetched(TimeRange::new(start, end));
        tracker
    }

    #[test]
    fn disjoint_request_before_the_cache() {
        let tracker = tracker_with_cache(100.0, 200.0);
        let missing = tracker.missing_intervals(TimeRange::new(50.0, 80.0));
        assert_eq!(missing, vec![TimeRange::new(50.0, 80.0)]);
    }

    #[test]
    fn disjoint_request_after_the_cache() {
        let tracker = tracker_with_cache(100.0, 200.0);
        let missing = tracker.missing_intervals(TimeRange::new(250.0, 300.0));
        assert_eq!(missing, vec![TimeRange::new(250.0, 300.0)]);
    }

    #[test]
    fn contained_request_needs_nothing() {
        let tracker = tracker_with_cache(100.0, 200.0);
        assert!(tracker.missing_intervals(TimeRange::new(150.0, 180.0)).is_empty());
        // Exact cover counts as contained.
        assert!(tracker.missing_intervals(TimeRange::new(100.0, 200.0)).is_empty());
        assert!(tracker.contains(&TimeRange::new(150.0, 180.0)));
    }

    #[test]
    fn one_sided_overlap_returns_the_remainder() {
        let tracker = tracker_with_cache(100.0, 200.0);
        assert_eq!(
            tracker.missing_intervals(TimeRange::new(50.0, 150.0)),
            vec![TimeRange::new(50.0, 100.0)]
        );
        assert_eq!(
            tracker.missing_intervals(TimeRange::new(150.0, 250.0)),
            vec![TimeRange::new(200.0, 250.0)]
        );
    }

    #[test]
    fn straddling_request_returns_both_remainders() {
        let tracker = tracker_with_cache(100.0, 200.0);
        assert_eq!(
            tracker.missing_intervals(TimeRange::new(50.0, 250.0)),
            vec![TimeRange::new(50.0, 100.0), TimeRange::new(200.0, 250.0)]
        );
    }

    #[test]
    fn touching_request_is_disjoint() {
        let tracker = tracker_with_cache(100.0, 200.0);
        assert_eq!(
            tracker.missing_intervals(TimeRange::new(50.0, 100.0)),
            vec![TimeRange::new(50.0, 100.0)]
        );
        assert_eq!(
            tracker.missing_intervals(TimeRange::new(200.0, 250.0)),
            vec![TimeRange::new(200.0, 250.0)]
        );
    }

    #[test]
    fn empty_cache_misses_the_whole_request() {
        let tracker = CacheRangeTracker::default();
        let requested = TimeRange::new(10.0, 20.0);
        assert_eq!(tracker.missing_intervals(requested), vec![requested]);
        assert!(!tracker.contains(&requested));
    }

    #[test]
    fn note_fetched_grows_monotonically() {
        let mut tracker = CacheRangeTracker::default();
        tracker.note_fetched(TimeRange::new(100.0, 200.0));
        assert_eq!(tracker.cached_range(), Some(TimeRange::new(100.0, 200.0)));

        // A smaller fetch never shrinks the cache.
        tracker.note_fetched(TimeRange::new(120.0, 130.0));
        assert_eq!(tracker.cached_range(), Some(TimeRange::new(100.0, 200.0)));

        tracker.note_fetched(TimeRange::new(50.0, 120.0));
        assert_eq!(tracker.cached_range(), Some(TimeRange::new(50.0, 200.0)));

        tracker.reset();
        assert_eq!(tracker.cached_range(), None);
    }

    #[test]
    fn covers_visible_follows_fetch_completion() {
        let mut tracker = CacheRangeTracker::default();
        assert!(tracker.covers_visible());

        tracker.set_visible_range(TimeRange::new(100.0, 200.0));
        assert!(!tracker.covers_visible());

        let plan = tracker.fetch_plan(TimeRange::new(100.0, 200.0));
        tracker.note_fetched(plan.expanded);
        assert!(tracker.covers_visible());
        assert!(tracker.contains(&TimeRange::new(100.0, 200.0)));
    }
}
