//! Kind-tagged time-series containers.
//!
//! A [`Series`] owns a strictly owned set of buffers: an x-axis
//! [`ValueArray`] (one component), an optional bin axis for spectrograms,
//! and a values [`ValueArray`] whose component count depends on the kind.
//! The defining invariant is that the x-axis is sorted (non-decreasing)
//! after every mutating operation completes; construction sorts unsorted
//! provider output up front, and merge/purge preserve the ordering.
//!
//! The submodules carry the rest of the surface:
//! - `cursor`: borrowed random-access cursors and range selection,
//! - `merge`: the destructive sorted-merge used when new batches arrive,
//! - `value_array`: the flat buffers,
//! - `error`: SNAFU error types.

pub mod cursor;
pub mod error;
mod merge;
pub mod value_array;

use serde::{Deserialize, Serialize};
use snafu::OptionExt;

use crate::interval::TimeRange;
use crate::series::error::{MissingBinAxisSnafu, SeriesError};
use crate::series::value_array::ValueArray;
use crate::unit::Unit;

pub use cursor::{CursorRange, SeriesCursor};

/// Number of value components carried by a vector series.
pub const VECTOR_COMPONENTS: usize = 3;

/// The concrete dimensionality of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// One value per sample.
    Scalar,
    /// Three orthogonal components per sample.
    Vector,
    /// One value per measurement bin per sample, with a bin axis.
    Spectrogram,
}

/// The secondary (bin) axis of a spectrogram: bin centers plus their unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BinAxis {
    data: ValueArray,
    unit: Unit,
}

impl BinAxis {
    /// Bin center values, in storage order.
    pub fn values(&self) -> &[f64] {
        self.data.flat()
    }

    /// Unit of the bin axis (for example a frequency unit).
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the axis carries no bins.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A sorted sequence of time-stamped samples with N value components.
///
/// Exclusively owned by whichever entity created it (typically a variable);
/// [`SeriesCursor`]s borrow it and are invalidated by any mutation, which the
/// borrow checker enforces. No internal locking: callers needing concurrent
/// reads during a merge must impose their own read/write exclusion around the
/// whole mutating operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    x: ValueArray,
    x_unit: Unit,
    bins: Option<BinAxis>,
    values: ValueArray,
    values_unit: Unit,
}

impl Series {
    /// Build a scalar series from parallel x/value buffers.
    ///
    /// Unsorted input is stably sorted by x. A length mismatch between the
    /// buffers produces an **empty** series (with a diagnostic log) rather
    /// than an error, so malformed provider output cannot take the
    /// application down.
    pub fn scalar(x: Vec<f64>, values: Vec<f64>, x_unit: Unit, values_unit: Unit) -> Series {
        Self::sample_based(SeriesKind::Scalar, 1, x, values, x_unit, None, values_unit)
    }

    /// Build a three-component vector series from an x buffer and a flat
    /// row-major values buffer (`3 * x.len()` values expected).
    ///
    /// Same sorting and permissive length-mismatch behavior as
    /// [`Series::scalar`].
    pub fn vector(x: Vec<f64>, values: Vec<f64>, x_unit: Unit, values_unit: Unit) -> Series {
        Self::sample_based(
            SeriesKind::Vector,
            VECTOR_COMPONENTS,
            x,
            values,
            x_unit,
            None,
            values_unit,
        )
    }

    /// Build a spectrogram series.
    ///
    /// `values` is row-major with one row per x sample and one column per
    /// bin (`x.len() * bins.len()` values expected). A missing bin axis is a
    /// hard construction error; a sample-length mismatch degrades to an
    /// empty series that keeps the bin structure, so a later well-formed
    /// batch can still merge in.
    pub fn spectrogram(
        x: Vec<f64>,
        bins: Option<Vec<f64>>,
        values: Vec<f64>,
        x_unit: Unit,
        bin_unit: Unit,
        values_unit: Unit,
    ) -> Result<Series, SeriesError> {
        let bins = bins.context(MissingBinAxisSnafu)?;
        let components = bins.len().max(1);
        let bin_axis = BinAxis {
            data: ValueArray::from_flat(1, bins),
            unit: bin_unit,
        };
        Ok(Self::sample_based(
            SeriesKind::Spectrogram,
            components,
            x,
            values,
            x_unit,
            Some(bin_axis),
            values_unit,
        ))
    }

    /// Shared construction path: validate sizes, sort by x, store.
    fn sample_based(
        kind: SeriesKind,
        components: usize,
        x: Vec<f64>,
        values: Vec<f64>,
        x_unit: Unit,
        bins: Option<BinAxis>,
        values_unit: Unit,
    ) -> Series {
        if values.len() != x.len() * components {
            log::warn!(
                "discarding samples of malformed {kind:?} series: \
                 {} x values with {components} component(s) cannot hold {} values",
                x.len(),
                values.len()
            );
            return Series {
                kind,
                x: ValueArray::new(1),
                x_unit,
                bins,
                values: ValueArray::new(components),
                values_unit,
            };
        }

        let permutation = sort_permutation(&x);
        let x = ValueArray::from_flat(1, x);
        let values = ValueArray::from_flat(components, values);
        Series {
            kind,
            x: permuted(&x, &permutation),
            x_unit,
            bins,
            values: permuted(&values, &permutation),
            values_unit,
        }
    }

    /// The concrete dimensionality of this series.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The sorted x-axis buffer.
    pub fn x_data(&self) -> &[f64] {
        self.x.flat()
    }

    /// Unit of the x-axis.
    pub fn x_unit(&self) -> &Unit {
        &self.x_unit
    }

    /// The bin axis, present on spectrograms.
    pub fn bin_axis(&self) -> Option<&BinAxis> {
        self.bins.as_ref()
    }

    /// The values buffer (one row per sample).
    pub fn values(&self) -> &ValueArray {
        &self.values
    }

    /// Unit of the values.
    pub fn values_unit(&self) -> &Unit {
        &self.values_unit
    }

    /// The closed time range covered by the samples, if any.
    pub fn bounds(&self) -> Option<TimeRange> {
        let x = self.x_data();
        match (x.first(), x.last()) {
            (Some(&min), Some(&max)) => Some(TimeRange::new(min, max)),
            _ => None,
        }
    }

    /// Drop every sample outside the closed range `[min, max]`.
    ///
    /// Bounds arriving reversed are swapped first. The bin axis (structure)
    /// is kept even when every sample goes.
    pub fn purge(&mut self, min: f64, max: f64) {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        let keep = self.lower_bound(min)..self.upper_bound(max);
        self.x.retain_rows(keep.clone());
        self.values.retain_rows(keep);
    }

    /// A new series holding copies of the samples inside `range` (closed on
    /// both ends), with the same kind, units, and bin structure.
    pub fn subset(&self, range: TimeRange) -> Series {
        let rows = self.lower_bound(range.start())..self.upper_bound(range.end());
        Series {
            kind: self.kind,
            x: self.x.slice_rows(rows.clone()),
            x_unit: self.x_unit.clone(),
            bins: self.bins.clone(),
            values: self.values.slice_rows(rows),
            values_unit: self.values_unit.clone(),
        }
    }

    /// Drop all samples, keeping units and bin structure.
    pub fn clear(&mut self) {
        self.x.clear();
        self.values.clear();
    }

    /// Index of the first sample with `x >= t`.
    pub(crate) fn lower_bound(&self, t: f64) -> usize {
        self.x_data().partition_point(|&v| v < t)
    }

    /// Index of the first sample with `x > t`.
    pub(crate) fn upper_bound(&self, t: f64) -> usize {
        self.x_data().partition_point(|&v| v <= t)
    }
}

/// Indices that visit `x` in stable ascending order (`f64` total order).
fn sort_permutation(x: &[f64]) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..x.len()).collect();
    permutation.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
    permutation
}

/// Apply a permutation known to be valid by construction.
fn permuted(array: &ValueArray, permutation: &[usize]) -> ValueArray {
    debug_assert_eq!(permutation.len(), array.len());
    array.sorted(permutation).unwrap_or_else(|_| {
        // Unreachable with an internally built permutation.
        ValueArray::new(array.components())
    })
}
