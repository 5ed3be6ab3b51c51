//! Core domain types for the Solvit route optimizer.
//!
//! Providers schedule several jobs per day. This crate models the positions
//! involved, the great-circle distance between them, the pairwise distance
//! matrix fed to a search, and the [`RouteOptimizer`] boundary implemented by
//! solver crates.
//!
//! Positions are supplied by an external [`LocationSource`] and consumed
//! read-only; nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod location;
pub mod matrix;
pub mod optimizer;
pub mod position;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{DistanceMetric, EARTH_RADIUS_KM, Haversine, haversine_km};
pub use location::LocationSource;
pub use matrix::{DistanceMatrix, DistanceMatrixError};
pub use optimizer::{
    Diagnostics, OptimizeError, OptimizeRequest, OptimizedRoute, OverflowPolicy, RouteOptimizer,
    SearchStrategy,
};
pub use position::Position;
