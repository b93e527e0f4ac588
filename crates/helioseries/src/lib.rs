//! # helioseries
//!
//! Data-model core for exploring multi-dimensional scientific time series.
//!
//! This crate is the supported public entry point and provides a small,
//! stable surface over `helioseries-core`: the series containers, the
//! range-cache tracker, and the resampling helpers.
//!
//! ## Example
//!
//! ```rust
//! use helioseries::prelude::*;
//!
//! let mut tracker = CacheRangeTracker::default();
//! tracker.note_fetched(TimeRange::new(100.0, 200.0));
//! assert_eq!(
//!     tracker.missing_intervals(TimeRange::new(50.0, 150.0)),
//!     vec![TimeRange::new(50.0, 100.0)]
//! );
//! ```

/// Convenience prelude with the stable, supported surface.
pub mod prelude;

/// Resampling namespace (wrapper-only).
pub mod resample {
    pub use helioseries_core::resample::{
        count_data_holes, fill_data_holes, regular_mesh, RegularMesh, Resolution,
    };
}

pub use helioseries_core::cache::{CacheRangeTracker, FetchPlan, FetchStrategy, DEFAULT_TOLERANCE};
pub use helioseries_core::interval::TimeRange;
pub use helioseries_core::series::{
    error::SeriesError, value_array::ValueArray, BinAxis, CursorRange, Series, SeriesCursor,
    SeriesKind,
};
pub use helioseries_core::sync::{SyncGroup, VariableId};
pub use helioseries_core::unit::Unit;
