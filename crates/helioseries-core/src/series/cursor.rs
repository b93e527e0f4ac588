//! Borrowed random-access cursors over a series.
//!
//! A [`SeriesCursor`] is a position inside one [`Series`]: cloneable,
//! comparable, and advanceable by signed offsets. Every generic algorithm in
//! this crate (merge bounds, purge, subset, mesh generation) is written
//! against this one interface plus the binary-search helpers on [`Series`],
//! which is why a single implementation serves scalars, vectors, and
//! spectrograms alike.
//!
//! Cursors borrow the series; any mutation of the series invalidates them at
//! compile time. Comparisons are only meaningful between cursors of the same
//! series (cursors of different series are unordered).

use std::cmp::Ordering;
use std::ptr;

use crate::interval::TimeRange;
use crate::series::Series;

/// A position within a series.
///
/// Index `len()` is the past-the-end position; dereferencing it yields NaN /
/// empty slices rather than panicking.
#[derive(Debug, Clone, Copy)]
pub struct SeriesCursor<'a> {
    series: &'a Series,
    index: usize,
}

impl<'a> SeriesCursor<'a> {
    pub(crate) fn new(series: &'a Series, index: usize) -> Self {
        Self { series, index }
    }

    /// Sample index within the series.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The series this cursor points into.
    pub(crate) fn series(&self) -> &'a Series {
        self.series
    }

    /// Timestamp at the cursor, NaN past the end.
    pub fn x(&self) -> f64 {
        self.series
            .x_data()
            .get(self.index)
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// All value components of the sample at the cursor (empty past the end).
    pub fn values(&self) -> &'a [f64] {
        self.series.values().row(self.index)
    }

    /// One value component, NaN when `component` or the cursor is out of
    /// range.
    pub fn value(&self, component: usize) -> f64 {
        self.values().get(component).copied().unwrap_or(f64::NAN)
    }

    /// Bin-axis values of the underlying series, empty for series without a
    /// bin axis. Identical for every cursor of one series.
    pub fn bin_values(&self) -> &'a [f64] {
        self.series
            .bin_axis()
            .map(|bins| bins.values())
            .unwrap_or(&[])
    }

    /// Minimum across the sample's components, skipping NaN values.
    ///
    /// NaN when every component is NaN or the cursor is past the end.
    pub fn min_value(&self) -> f64 {
        self.values()
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(f64::NAN, f64::min)
    }

    /// Maximum across the sample's components, skipping NaN values.
    pub fn max_value(&self) -> f64 {
        self.values()
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(f64::NAN, f64::max)
    }

    /// A new cursor moved by `offset` samples, clamped to the series.
    pub fn advanced(&self, offset: isize) -> SeriesCursor<'a> {
        let target = self.index as isize + offset;
        let index = target.clamp(0, self.series.len() as isize) as usize;
        Self {
            series: self.series,
            index,
        }
    }

    /// Move this cursor by `offset` samples, clamped to the series.
    pub fn advance(&mut self, offset: isize) {
        *self = self.advanced(offset);
    }

    /// Move one sample backwards (clamped at the beginning).
    pub fn step_back(&mut self) {
        self.advance(-1);
    }

    /// Signed number of samples from `self` to `other`.
    pub fn distance_to(&self, other: &SeriesCursor<'a>) -> isize {
        debug_assert!(ptr::eq(self.series, other.series));
        other.index as isize - self.index as isize
    }
}

impl PartialEq for SeriesCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.series, other.series) && self.index == other.index
    }
}

impl Eq for SeriesCursor<'_> {}

impl PartialOrd for SeriesCursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.series, other.series) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

/// A half-open `[begin, end)` pair of cursors over one series.
#[derive(Debug, Clone, Copy)]
pub struct CursorRange<'a> {
    begin: SeriesCursor<'a>,
    end: SeriesCursor<'a>,
}

impl<'a> CursorRange<'a> {
    /// First position of the range.
    pub fn begin(&self) -> SeriesCursor<'a> {
        self.begin
    }

    /// Past-the-end position of the range.
    pub fn end(&self) -> SeriesCursor<'a> {
        self.end
    }

    /// Number of samples in the range.
    pub fn len(&self) -> usize {
        self.end.index.saturating_sub(self.begin.index)
    }

    /// True when the range selects no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The series the range points into.
    pub(crate) fn series(&self) -> &'a Series {
        self.begin.series
    }

    /// Visit every position of the range in order.
    pub fn iter(&self) -> impl Iterator<Item = SeriesCursor<'a>> + '_ {
        let series = self.begin.series;
        (self.begin.index..self.end.index).map(move |index| SeriesCursor::new(series, index))
    }
}

impl Series {
    /// Cursor range over every sample.
    pub fn cursors(&self) -> CursorRange<'_> {
        CursorRange {
            begin: SeriesCursor::new(self, 0),
            end: SeriesCursor::new(self, self.len()),
        }
    }

    /// Cursor range over the samples inside `range` (closed on both ends),
    /// found by binary search on the sorted x-axis.
    pub fn cursors_in(&self, range: TimeRange) -> CursorRange<'_> {
        CursorRange {
            begin: SeriesCursor::new(self, self.lower_bound(range.start())),
            end: SeriesCursor::new(self, self.upper_bound(range.end())),
        }
    }
}
