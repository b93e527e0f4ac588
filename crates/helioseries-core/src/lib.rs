//! Data-model core for a desktop exploration tool over multi-dimensional
//! scientific time series.
//!
//! This crate provides the foundational pieces consumed by the variable
//! orchestration layer of `helioseries`:
//!
//! - A kind-tagged series container over flat component buffers, with a
//!   borrowed random-access cursor abstraction shared by every series kind
//!   (`series` module).
//! - A destructive sorted-merge that minimizes data movement when new
//!   acquisition batches arrive (`series::merge`).
//! - Data-hole filling and regular-mesh generation that make irregularly
//!   sampled data safe to merge and render (`resample` module).
//! - A per-variable cache-range tracker that decides which parts of a
//!   requested time window must still be fetched, and by how much a fetch
//!   should be over-extended to amortize future requests (`cache` module).
//! - Synchronization-group membership used by downstream range-change
//!   propagation (`sync` module).
//!
//! Data providers, persistence, plugins, and all GUI surfaces live outside
//! this crate; they hand finished sample batches in and receive fetch plans
//! back.
#![deny(missing_docs)]
pub mod cache;
pub mod interval;
pub mod resample;
pub mod series;
pub mod sync;
pub mod unit;
