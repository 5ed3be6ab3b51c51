//! Requests, responses, and the optimizer boundary.

use std::time::Duration;

use thiserror::Error;

use crate::{LocationSource, Position};

/// Parameters for an optimisation request.
///
/// `start` is optional because location sources may not know where the
/// provider is; optimizers reject such requests with
/// [`OptimizeError::MissingStartLocation`] instead of guessing.
///
/// # Examples
/// ```rust
/// use solvit_core::{OptimizeRequest, Position};
///
/// let request = OptimizeRequest::new(
///     Position::new(0.0, 0.0, "home"),
///     vec![Position::new(0.1, 0.1, "leaking tap")],
/// );
/// assert_eq!(request.jobs.len(), 1);
/// assert!(request.start_position().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeRequest {
    /// Where the provider begins and ends the day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<Position>,
    /// Job locations in arbitrary order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jobs: Vec<Position>,
}

impl OptimizeRequest {
    /// Construct a request with a known start position.
    #[must_use]
    pub const fn new(start: Position, jobs: Vec<Position>) -> Self {
        Self {
            start: Some(start),
            jobs,
        }
    }

    /// Assemble a request from a [`LocationSource`].
    pub fn from_source<L>(source: &L) -> Self
    where
        L: LocationSource + ?Sized,
    {
        Self {
            start: source.start(),
            jobs: source.jobs(),
        }
    }

    /// Return the start position or [`OptimizeError::MissingStartLocation`].
    ///
    /// # Errors
    ///
    /// Fails when the request carries no start position.
    pub fn start_position(&self) -> Result<&Position, OptimizeError> {
        self.start.as_ref().ok_or(OptimizeError::MissingStartLocation)
    }
}

/// Policy applied when a request has more jobs than exact search allows.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OverflowPolicy {
    /// Fail with [`OptimizeError::ExcessiveJobCount`].
    #[default]
    Reject,
    /// Order jobs greedily by repeatedly visiting the nearest unvisited job.
    ///
    /// The result is an approximation and may be longer than optimal.
    NearestNeighbour,
}

/// How an [`OptimizedRoute`] was produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchStrategy {
    /// Zero or one job; no search was necessary.
    Trivial,
    /// Exhaustive branch-and-bound search; the order is optimal.
    Exhaustive,
    /// Greedy nearest-neighbour approximation.
    NearestNeighbour,
}

/// Diagnostic information about a completed optimisation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Strategy used to order the jobs.
    pub strategy: SearchStrategy,
    /// Complete tours whose cost was compared against the best so far.
    pub tours_evaluated: u64,
    /// Partial tours abandoned because they could not beat the best so far.
    pub branches_pruned: u64,
    /// Wall-clock time spent optimising.
    pub solve_time: Duration,
}

impl Diagnostics {
    /// Diagnostics for a request that needed no search.
    #[must_use]
    pub const fn trivial(solve_time: Duration) -> Self {
        Self {
            strategy: SearchStrategy::Trivial,
            tours_evaluated: 0,
            branches_pruned: 0,
            solve_time,
        }
    }
}

/// Jobs in visiting order together with the round-trip distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizedRoute {
    /// Job positions in the order they should be visited.
    ///
    /// The start position is not repeated here.
    pub stops: Vec<Position>,
    /// Start to first stop, through every stop, and back to the start.
    pub total_distance_km: f64,
    /// How the order was found.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The request had no start position.
    #[error("start location is required to optimise a route")]
    MissingStartLocation,
    /// Exhaustive search was refused because there are too many jobs.
    #[error("{count} jobs exceed the exact search limit of {limit}")]
    ExcessiveJobCount {
        /// Number of jobs in the request.
        count: usize,
        /// Configured maximum for exact search.
        limit: usize,
    },
}

/// Order a provider's jobs to minimise round-trip distance.
///
/// Implementations hold configuration only; every call starts from a clean
/// search state. Optimizers must be `Send + Sync` so hosts can run them off
/// the UI thread.
pub trait RouteOptimizer: Send + Sync {
    /// Optimise a request, producing an ordered route or an error.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError`] when the request cannot be ordered.
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizedRoute, OptimizeError>;

    /// Optimise a request, falling back to the input order on failure.
    fn optimize_or_original(&self, request: &OptimizeRequest) -> Vec<Position> {
        self.optimize(request)
            .map_or_else(|_| request.jobs.clone(), |route| route.stops)
    }
}
