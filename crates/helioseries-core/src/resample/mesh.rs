//! Regular 2-D mesh generation for spectrogram rendering.
//!
//! Rendering wants a uniform grid; spectrogram acquisition rarely delivers
//! one. [`regular_mesh`] rasterizes a cursor range onto a regular grid by
//! copying, for each mesh cell, the value of the nearest enclosing source
//! sample — no interpolation, so rendered cells always show a value that was
//! actually measured (or an explicit fill sentinel).

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::series::{CursorRange, SeriesCursor};

/// A target resolution along one mesh axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Step between consecutive mesh points, in axis units.
    pub step: f64,
    /// Whether the axis is meshed in `log10` space.
    pub logarithmic: bool,
}

impl Resolution {
    /// A linear-axis resolution.
    pub fn linear(step: f64) -> Self {
        Self {
            step,
            logarithmic: false,
        }
    }

    /// A `log10`-axis resolution (supported on the bin axis only).
    pub fn log_scaled(step: f64) -> Self {
        Self {
            step,
            logarithmic: true,
        }
    }

    fn is_usable(&self) -> bool {
        self.step.is_finite() && self.step > 0.0
    }
}

/// A uniform 2-D grid sampled from a spectrogram.
///
/// `data` is row-major with one row per y (bin-axis) mesh point and one
/// column per x (time-axis) mesh point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegularMesh {
    x: Vec<f64>,
    y: Vec<f64>,
    data: Vec<f64>,
}

impl RegularMesh {
    /// Mesh points along the time axis.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Mesh points along the bin axis (in `log10` space when the y
    /// resolution was logarithmic).
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Row-major cell values (`y.len()` rows of `x.len()` columns).
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Cell value at column `ix`, row `iy`; NaN outside the grid.
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        if ix >= self.x.len() {
            return f64::NAN;
        }
        self.data
            .get(iy * self.x.len() + ix)
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// True when the mesh has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Rasterize a spectrogram cursor range onto a regular grid.
///
/// Mesh size along each axis is `ceil((max - min) / step) + 1` points, with
/// the step shrunk so the first and last points land exactly on the source
/// extrema. Each cell copies the value of the nearest source sample at or
/// below the cell center, where a sample at `v` covers `[v - step/2,
/// v + step/2]`.
///
/// Degenerate input — non-finite or non-positive steps, an empty range, or a
/// series without bins — yields an empty mesh. A logarithmic x resolution is
/// unsupported and also yields an empty mesh (with a diagnostic); a
/// logarithmic y resolution meshes the bin axis in `log10` space.
pub fn regular_mesh(range: &CursorRange<'_>, x_res: Resolution, y_res: Resolution) -> RegularMesh {
    if !x_res.is_usable() || !y_res.is_usable() {
        return RegularMesh::default();
    }
    if x_res.logarithmic {
        log::warn!("logarithmic x-axis resolutions are not supported for regular meshes");
        return RegularMesh::default();
    }
    if range.is_empty() {
        return RegularMesh::default();
    }

    let series = range.series();
    let Some(bins) = series.bin_axis() else {
        return RegularMesh::default();
    };
    if bins.is_empty() {
        return RegularMesh::default();
    }

    let first_row = range.begin().index();
    let end_row = range.end().index();
    let xs = &series.x_data()[first_row..end_row];
    let ys: Vec<f64> = if y_res.logarithmic {
        bins.values().iter().map(|b| b.log10()).collect()
    } else {
        bins.values().to_vec()
    };

    let mesh_x = mesh_axis(xs[0], xs[xs.len() - 1], x_res.step);
    let mesh_y = mesh_axis(ys[0], ys[ys.len() - 1], y_res.step);
    let columns = mesh_x.len();

    // Source row per mesh column, resolved once; rows then fill in parallel.
    let x_half = x_res.step / 2.0;
    let y_half = y_res.step / 2.0;
    let source_rows: Vec<usize> = mesh_x
        .iter()
        .map(|&t| first_row + nearest_at_or_below(xs, t, x_half))
        .collect();

    let mut data = vec![0.0; columns * mesh_y.len()];
    data.par_chunks_mut(columns)
        .enumerate()
        .for_each(|(iy, row_out)| {
            let bin = nearest_at_or_below(&ys, mesh_y[iy], y_half);
            for (ix, cell) in row_out.iter_mut().enumerate() {
                *cell = SeriesCursor::new(series, source_rows[ix]).value(bin);
            }
        });

    RegularMesh {
        x: mesh_x,
        y: mesh_y,
        data,
    }
}

/// Uniform mesh points covering `[min, max]` with a step at most `step`.
fn mesh_axis(min: f64, max: f64, step: f64) -> Vec<f64> {
    let span = max - min;
    // Collapses degenerate and NaN spans to a single point.
    if !(span > 0.0) {
        return vec![min];
    }
    let points = (span / step).ceil() as usize + 1;
    let adjusted = span / (points - 1) as f64;
    (0..points).map(|i| min + i as f64 * adjusted).collect()
}

/// Index of the last source sample whose tolerance window starts at or
/// below `target`; clamped to the first sample.
fn nearest_at_or_below(source: &[f64], target: f64, half_step: f64) -> usize {
    source
        .partition_point(|&v| v <= target + half_step)
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use crate::unit::Unit;

    fn spectrogram(x: Vec<f64>, bins: Vec<f64>, values: Vec<f64>) -> Series {
        Series::spectrogram(
            x,
            Some(bins),
            values,
            Unit::time("s"),
            Unit::new("Hz"),
            Unit::new("eV"),
        )
        .unwrap()
    }

    #[test]
    fn regular_source_meshes_one_to_one() {
        // 3 samples x 2 bins, already regular at step 1 / step 10.
        let s = spectrogram(
            vec![0.0, 1.0, 2.0],
            vec![10.0, 20.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let mesh = regular_mesh(&s.cursors(), Resolution::linear(1.0), Resolution::linear(10.0));

        assert_eq!(mesh.x(), &[0.0, 1.0, 2.0]);
        assert_eq!(mesh.y(), &[10.0, 20.0]);
        // Row 0 = bin 10, row 1 = bin 20.
        assert_eq!(mesh.data(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(mesh.value(2, 1), 6.0);
        assert!(mesh.value(3, 0).is_nan());
    }

    #[test]
    fn irregular_source_uses_nearest_enclosing_sample() {
        // Samples at t = 0 and t = 10, meshed at step 4 -> ceil(10/4)+1 = 4
        // points, adjusted step 10/3.
        let s = spectrogram(vec![0.0, 10.0], vec![1.0], vec![100.0, 200.0]);
        let mesh = regular_mesh(&s.cursors(), Resolution::linear(4.0), Resolution::linear(1.0));

        assert_eq!(mesh.x().len(), 4);
        assert_eq!(mesh.y(), &[1.0]);
        // Cells at 0, 10/3, 20/3 fall below sample t=10 - step/2: they copy
        // the t=0 sample; the last cell lands on t=10.
        assert_eq!(mesh.data(), &[100.0, 100.0, 100.0, 200.0]);
    }

    #[test]
    fn logarithmic_y_meshes_in_log_space() {
        let s = spectrogram(
            vec![0.0, 1.0],
            vec![10.0, 100.0, 1000.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
        let mesh = regular_mesh(
            &s.cursors(),
            Resolution::linear(1.0),
            Resolution::log_scaled(1.0),
        );

        // log10(bins) = [1, 2, 3]: step 1 already regular.
        assert_eq!(mesh.y().len(), 3);
        for (got, expected) in mesh.y().iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - expected).abs() < 1e-9);
        }
        assert_eq!(mesh.x(), &[0.0, 1.0]);
        assert_eq!(mesh.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn degenerate_inputs_yield_an_empty_mesh() {
        let s = spectrogram(vec![0.0, 1.0], vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]);

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mesh = regular_mesh(&s.cursors(), Resolution::linear(bad), Resolution::linear(1.0));
            assert!(mesh.is_empty());
        }

        // Logarithmic x is unsupported.
        assert!(regular_mesh(
            &s.cursors(),
            Resolution::log_scaled(1.0),
            Resolution::linear(1.0)
        )
        .is_empty());

        // Empty cursor range.
        let empty = s.cursors_in(crate::interval::TimeRange::new(50.0, 60.0));
        assert!(regular_mesh(&empty, Resolution::linear(1.0), Resolution::linear(1.0)).is_empty());

        // Scalar series have no bin axis.
        let scalar = Series::scalar(
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            Unit::time("s"),
            Unit::new("nT"),
        );
        assert!(
            regular_mesh(&scalar.cursors(), Resolution::linear(1.0), Resolution::linear(1.0))
                .is_empty()
        );
    }

    #[test]
    fn single_sample_range_collapses_to_one_column() {
        let s = spectrogram(vec![5.0], vec![1.0, 2.0], vec![7.0, 8.0]);
        let mesh = regular_mesh(&s.cursors(), Resolution::linear(1.0), Resolution::linear(1.0));
        assert_eq!(mesh.x(), &[5.0]);
        assert_eq!(mesh.y(), &[1.0, 2.0]);
        assert_eq!(mesh.data(), &[7.0, 8.0]);
    }
}
