//! Error types and SNAFU context selectors for the `series` module.
//!
//! This module centralizes the `SeriesError` enum and exposes context
//! selectors (via `#[snafu(visibility(pub(crate)))]`) so sibling modules can
//! attach error context without re-exporting everything at the crate root.
//! Only genuinely invalid arguments land here; malformed-but-survivable
//! provider output (size-mismatched buffers, degenerate resolutions) degrades
//! to documented no-op behavior instead of an error, because this code sits
//! on a GUI-adjacent hot path that must never crash on partial acquisition
//! data.

use snafu::Snafu;

use crate::series::SeriesKind;

/// Errors from series construction and mutation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SeriesError {
    /// A spectrogram was constructed without its bin (secondary) axis.
    #[snafu(display("Spectrogram construction requires a bin axis"))]
    MissingBinAxis,

    /// A permutation passed to a sort does not cover every row exactly once.
    #[snafu(display("Permutation length {actual} does not match row count {expected}"))]
    PermutationLength {
        /// Number of rows in the array being permuted.
        expected: usize,
        /// Number of entries in the offending permutation.
        actual: usize,
    },

    /// A permutation entry points outside the array being permuted.
    #[snafu(display("Permutation index {index} is out of range for {len} rows"))]
    PermutationOutOfRange {
        /// The out-of-range permutation entry.
        index: usize,
        /// Number of rows in the array being permuted.
        len: usize,
    },

    /// Two series of incompatible dimensionality were asked to merge.
    ///
    /// The merge refuses with no effect on either operand; callers log and
    /// carry on (recoverable, not fatal).
    #[snafu(display(
        "Cannot merge {source_kind:?} series with {source_components} component(s) \
         into {dest_kind:?} series with {dest_components} component(s)"
    ))]
    IncompatibleShape {
        /// Kind of the destination series.
        dest_kind: SeriesKind,
        /// Value components per sample in the destination series.
        dest_components: usize,
        /// Kind of the source series.
        source_kind: SeriesKind,
        /// Value components per sample in the source series.
        source_components: usize,
    },
}
