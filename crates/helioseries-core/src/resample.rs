//! Resampling helpers that make irregular samples safe to merge and render.
//!
//! Two concerns live here:
//!
//! - `holes`: inserting filler samples wherever the sampling gap exceeds a
//!   resolution threshold, so gaps render as explicit fill values instead of
//!   misleading interpolation.
//! - `mesh`: rasterizing a spectrogram cursor range onto a uniform 2-D grid.
//!
//! Both follow the degenerate-input policy of the crate: zero/NaN
//! resolutions and empty inputs are silent no-ops (or empty meshes), never
//! errors, because malformed acquisition data must not crash the viewer.

pub mod holes;
pub mod mesh;

pub use holes::{count_data_holes, fill_data_holes};
pub use mesh::{regular_mesh, RegularMesh, Resolution};
