//! Facade crate for the Solvit provider route optimizer.
//!
//! This crate re-exports the core domain types and exposes the exact
//! branch-and-bound optimizer behind the `optimizer` feature flag.

#![forbid(unsafe_code)]

pub use solvit_core::{
    Diagnostics, DistanceMatrix, DistanceMatrixError, DistanceMetric, EARTH_RADIUS_KM, Haversine,
    LocationSource, OptimizeError, OptimizeRequest, OptimizedRoute, OverflowPolicy, Position,
    RouteOptimizer, SearchStrategy, haversine_km,
};

#[cfg(feature = "optimizer")]
pub use solvit_optimizer::{
    BranchAndBoundOptimizer, DEFAULT_MAX_EXACT_JOBS, OptimizerConfig, optimize_route,
};
