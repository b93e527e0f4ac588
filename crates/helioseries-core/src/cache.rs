//! Per-variable range-cache bookkeeping.
//!
//! Fetching acquisition data is slow; the cache layer makes sure every fetch
//! is worth it. Two pieces:
//!
//! - `strategy`: how far a requested window is over-extended before being
//!   sent to a provider, so small pans and zooms keep hitting the cache.
//! - `tracker`: which parts of a requested window are already resident
//!   versus must still be fetched, as a minimal set of disjoint
//!   sub-intervals.
//!
//! The tracker is pure bookkeeping over [`TimeRange`](crate::interval)
//! values: it never touches series data and performs no I/O. The variable
//! orchestration layer queries it, hands the missing intervals to a
//! provider, merges the returned batches, and reports the fetched window
//! back via [`CacheRangeTracker::note_fetched`].

pub mod strategy;
pub mod tracker;

pub use strategy::{FetchPlan, FetchStrategy, DEFAULT_TOLERANCE};
pub use tracker::CacheRangeTracker;
