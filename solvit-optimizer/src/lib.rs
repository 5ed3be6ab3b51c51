//! Exact route optimisation for a provider's day of jobs.
//!
//! This crate provides [`BranchAndBoundOptimizer`], the default implementation
//! of the [`RouteOptimizer`](solvit_core::RouteOptimizer) trait. It builds a
//! haversine [`DistanceMatrix`](solvit_core::DistanceMatrix) for the start and
//! the jobs, then enumerates every visiting order depth-first, abandoning
//! partial orders that already cost at least as much as the best complete
//! tour found so far.
//!
//! Exhaustive search grows factorially, so the number of jobs is capped by
//! [`OptimizerConfig::max_exact_jobs`]. Requests above the cap are rejected or
//! ordered greedily according to [`OverflowPolicy`](solvit_core::OverflowPolicy).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod greedy;
mod optimizer;
mod search;

pub use optimizer::{
    BranchAndBoundOptimizer, DEFAULT_MAX_EXACT_JOBS, OptimizerConfig, optimize_route,
};
