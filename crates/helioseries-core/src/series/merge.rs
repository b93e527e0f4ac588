//! Destructive sorted-merge of acquisition batches.
//!
//! When a provider answers a fetch, the fresh batch is merged into the
//! variable's resident series. Both operands are sorted, so the merge only
//! has to decide where the batch lands relative to the resident bounds and
//! move whole sub-ranges; no per-sample interleaving happens.

use std::mem;

use crate::series::error::{IncompatibleShapeSnafu, SeriesError};
use crate::series::Series;

impl Series {
    /// Merge `source` into `self`, producing the sorted union.
    ///
    /// This is a move-like operation: on success `source` is left without
    /// samples (its units and bin structure survive). The steps:
    ///
    /// 1. A shape check (kind, component count, bin count) — failure leaves
    ///    both operands untouched and returns
    ///    [`SeriesError::IncompatibleShape`].
    /// 2. Empty `source`: nothing to do.
    /// 3. Empty `self`: the sample buffers are swapped in O(1).
    /// 4. `source` bounds fully inside `self` bounds: `source` is discarded
    ///    wholesale. Interior points that `self` does not hold at those
    ///    timestamps are lost with it; range-cache bookkeeping treats the
    ///    covered interval as already resident.
    /// 5. Otherwise the sub-ranges of `source` strictly below / above
    ///    `self`'s bounds are prepended / appended; samples falling inside
    ///    `self`'s bounds are dropped.
    ///
    /// Duplicate timestamps are never deduplicated; both samples survive in
    /// stable order. The x-axis stays sorted in every case.
    pub fn merge_from(&mut self, source: &mut Series) -> Result<(), SeriesError> {
        self.ensure_same_shape(source)?;

        if source.is_empty() {
            return Ok(());
        }

        if self.is_empty() {
            mem::swap(&mut self.x, &mut source.x);
            mem::swap(&mut self.values, &mut source.values);
            if let (Some(dest_bins), Some(source_bins)) =
                (self.bins.as_mut(), source.bins.as_mut())
            {
                // Adopt the batch's measured bin centers; the empty side had
                // only structure.
                mem::swap(&mut dest_bins.data, &mut source_bins.data);
            }
            return Ok(());
        }

        let dest_x = self.x_data();
        let (dest_min, dest_max) = (dest_x[0], dest_x[dest_x.len() - 1]);
        let source_x = source.x_data();
        let (source_min, source_max) = (source_x[0], source_x[source_x.len() - 1]);

        if dest_min <= source_min && source_max <= dest_max {
            source.clear();
            return Ok(());
        }

        let below = 0..source.lower_bound(dest_min);
        if !below.is_empty() {
            self.x.add(&source.x.slice_rows(below.clone()), true);
            self.values.add(&source.values.slice_rows(below), true);
        }

        let above = source.upper_bound(dest_max)..source.len();
        if !above.is_empty() {
            self.x.add(&source.x.slice_rows(above.clone()), false);
            self.values.add(&source.values.slice_rows(above), false);
        }

        source.clear();
        Ok(())
    }

    fn ensure_same_shape(&self, source: &Series) -> Result<(), SeriesError> {
        let kinds_match = self.kind == source.kind;
        let components_match = self.values.components() == source.values.components();
        let bins_match = self.bins.as_ref().map(|b| b.len()) == source.bins.as_ref().map(|b| b.len());

        if kinds_match && components_match && bins_match {
            Ok(())
        } else {
            log::warn!(
                "refusing to merge {:?} series ({} components) into {:?} series ({} components)",
                source.kind,
                source.values.components(),
                self.kind,
                self.values.components()
            );
            IncompatibleShapeSnafu {
                dest_kind: self.kind,
                dest_components: self.values.components(),
                source_kind: source.kind,
                source_components: source.values.components(),
            }
            .fail()
        }
    }
}
