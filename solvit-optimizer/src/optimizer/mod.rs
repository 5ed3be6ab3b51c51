//! `BranchAndBoundOptimizer` implementation.

use std::time::Instant;

use solvit_core::{
    Diagnostics, DistanceMatrix, DistanceMetric, Haversine, OptimizeError, OptimizeRequest,
    OptimizedRoute, OverflowPolicy, Position, RouteOptimizer, SearchStrategy,
};

use crate::greedy::nearest_neighbour;
use crate::search::exhaustive_search;

/// Largest job count searched exhaustively by default.
///
/// Ten jobs means at most `10! = 3_628_800` complete tours before pruning.
pub const DEFAULT_MAX_EXACT_JOBS: usize = 10;

/// Configuration for [`BranchAndBoundOptimizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Upper bound on jobs for exhaustive search.
    pub max_exact_jobs: usize,
    /// What to do when a request has more jobs than `max_exact_jobs`.
    pub overflow: OverflowPolicy,
    /// Abandon partial tours that already cost as much as the best tour.
    pub prune: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_exact_jobs: DEFAULT_MAX_EXACT_JOBS,
            overflow: OverflowPolicy::Reject,
            prune: true,
        }
    }
}

/// Exact optimizer enumerating every visiting order with pruning.
///
/// The optimizer is generic over the [`DistanceMetric`]; it defaults to
/// great-circle distance in kilometres.
///
/// # Examples
/// ```rust
/// use solvit_core::{OptimizeRequest, Position, RouteOptimizer};
/// use solvit_optimizer::BranchAndBoundOptimizer;
///
/// let request = OptimizeRequest::new(
///     Position::new(0.0, 0.0, "home"),
///     vec![
///         Position::new(1.0, 1.0, "A"),
///         Position::new(2.0, 2.0, "B"),
///         Position::new(0.5, 0.5, "C"),
///     ],
/// );
/// let route = BranchAndBoundOptimizer::new().optimize(&request)?;
/// let labels: Vec<&str> = route.stops.iter().map(|p| p.label.as_str()).collect();
/// assert_eq!(labels, ["C", "A", "B"]);
/// # Ok::<(), solvit_core::OptimizeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundOptimizer<M = Haversine>
where
    M: DistanceMetric,
{
    metric: M,
    config: OptimizerConfig,
}

impl BranchAndBoundOptimizer<Haversine> {
    /// Construct an optimizer using haversine distances and defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    /// Construct a haversine optimizer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: OptimizerConfig) -> Self {
        Self::with_metric(Haversine, config)
    }
}

impl<M> BranchAndBoundOptimizer<M>
where
    M: DistanceMetric,
{
    /// Construct an optimizer with a custom metric.
    #[must_use]
    pub const fn with_metric(metric: M, config: OptimizerConfig) -> Self {
        Self { metric, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Refuse over-limit requests under [`OverflowPolicy::Reject`] before
    /// any distances are computed.
    const fn enforce_job_limit(&self, count: usize) -> Result<(), OptimizeError> {
        if count > self.config.max_exact_jobs
            && matches!(self.config.overflow, OverflowPolicy::Reject)
        {
            return Err(OptimizeError::ExcessiveJobCount {
                count,
                limit: self.config.max_exact_jobs,
            });
        }
        Ok(())
    }

    fn order_jobs(&self, matrix: &DistanceMatrix) -> (Vec<usize>, Diagnostics) {
        let started_at = Instant::now();
        let count = matrix.job_count();

        if count > self.config.max_exact_jobs {
            log::warn!(
                "{count} jobs exceed the exact search limit of {}; \
                 ordering by nearest neighbour",
                self.config.max_exact_jobs
            );
            let order = nearest_neighbour(matrix);
            return (
                order,
                Diagnostics {
                    strategy: SearchStrategy::NearestNeighbour,
                    tours_evaluated: 0,
                    branches_pruned: 0,
                    solve_time: started_at.elapsed(),
                },
            );
        }

        let outcome = exhaustive_search(matrix, self.config.prune);
        log::debug!(
            "exhaustive search over {count} jobs evaluated {} tours and pruned {} branches \
             (best {:.3})",
            outcome.tours_evaluated,
            outcome.branches_pruned,
            outcome.cost
        );
        (
            outcome.order,
            Diagnostics {
                strategy: SearchStrategy::Exhaustive,
                tours_evaluated: outcome.tours_evaluated,
                branches_pruned: outcome.branches_pruned,
                solve_time: started_at.elapsed(),
            },
        )
    }
}

impl<M> RouteOptimizer for BranchAndBoundOptimizer<M>
where
    M: DistanceMetric,
{
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizedRoute, OptimizeError> {
        let start = request.start_position()?;
        if request.jobs.len() > 1 {
            self.enforce_job_limit(request.jobs.len())?;
        }
        let started_at = Instant::now();
        let matrix = DistanceMatrix::build(&self.metric, start, &request.jobs);

        if request.jobs.len() <= 1 {
            let order: Vec<usize> = (1..=request.jobs.len()).collect();
            return Ok(OptimizedRoute {
                stops: request.jobs.clone(),
                total_distance_km: matrix.tour_cost(&order).unwrap_or(0.0),
                diagnostics: Diagnostics::trivial(started_at.elapsed()),
            });
        }

        let (order, diagnostics) = self.order_jobs(&matrix);
        let stops = positions_in_order(&request.jobs, &order);
        debug_assert_eq!(
            stops.len(),
            request.jobs.len(),
            "optimised order must be a permutation of the jobs"
        );
        Ok(OptimizedRoute {
            stops,
            total_distance_km: matrix.tour_cost(&order).unwrap_or(f64::INFINITY),
            diagnostics,
        })
    }
}

/// Map matrix indices (`1..=n`) back to the caller's job positions.
fn positions_in_order(jobs: &[Position], order: &[usize]) -> Vec<Position> {
    order
        .iter()
        .filter_map(|index| index.checked_sub(1).and_then(|slot| jobs.get(slot)))
        .cloned()
        .collect()
}

/// Reorder `jobs` for a provider starting at `start` using the default
/// [`BranchAndBoundOptimizer`].
///
/// # Errors
///
/// Returns [`OptimizeError::MissingStartLocation`] when `start` is `None`,
/// and [`OptimizeError::ExcessiveJobCount`] when there are more than
/// [`DEFAULT_MAX_EXACT_JOBS`] jobs.
///
/// # Examples
/// ```rust
/// use solvit_core::{OptimizeError, Position};
/// use solvit_optimizer::optimize_route;
///
/// let start = Position::new(0.0, 0.0, "home");
/// assert_eq!(optimize_route(Some(&start), &[])?, Vec::new());
/// assert_eq!(
///     optimize_route(None, &[start.clone()]),
///     Err(OptimizeError::MissingStartLocation)
/// );
/// # Ok::<(), OptimizeError>(())
/// ```
pub fn optimize_route(
    start: Option<&Position>,
    jobs: &[Position],
) -> Result<Vec<Position>, OptimizeError> {
    let request = OptimizeRequest {
        start: start.cloned(),
        jobs: jobs.to_vec(),
    };
    BranchAndBoundOptimizer::new()
        .optimize(&request)
        .map(|route| route.stops)
}
