//! Wrapper prelude.
//!
//! The `helioseries` crate is the supported public entry point. Downstream
//! code should prefer importing from this prelude instead of depending on
//! internal core module paths.

pub use crate::resample;
pub use crate::{
    CacheRangeTracker, FetchPlan, FetchStrategy, Series, SeriesCursor, SeriesError, SeriesKind,
    SyncGroup, TimeRange, Unit, ValueArray, VariableId,
};
