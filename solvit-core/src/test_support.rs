//! Test-only helpers shared by unit and behaviour tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::{DistanceMatrix, LocationSource, Position};

/// Construct a labelled position from latitude and longitude.
#[must_use]
pub fn position(label: &str, latitude: f64, longitude: f64) -> Position {
    Position::new(latitude, longitude, label)
}

/// In-memory [`LocationSource`] returning fixed positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryLocationSource {
    start: Option<Position>,
    jobs: Vec<Position>,
}

impl MemoryLocationSource {
    /// Create a source from an optional start and a list of jobs.
    #[must_use]
    pub const fn new(start: Option<Position>, jobs: Vec<Position>) -> Self {
        Self { start, jobs }
    }
}

impl LocationSource for MemoryLocationSource {
    fn start(&self) -> Option<Position> {
        self.start.clone()
    }

    fn jobs(&self) -> Vec<Position> {
        self.jobs.clone()
    }
}

/// Cheapest round-trip cost over every permutation of the matrix's jobs.
///
/// Enumerates all `n!` orders independently of any optimizer, so keep `n`
/// small.
#[must_use]
pub fn brute_force_best_cost(matrix: &DistanceMatrix) -> f64 {
    let mut order: Vec<usize> = (1..=matrix.job_count()).collect();
    let mut best = f64::INFINITY;
    permute(&mut order, 0, &mut |candidate| {
        if let Some(cost) = matrix.tour_cost(candidate) {
            best = best.min(cost);
        }
    });
    best
}

fn permute(order: &mut [usize], depth: usize, visit: &mut impl FnMut(&[usize])) {
    if depth >= order.len() {
        visit(order);
        return;
    }
    for idx in depth..order.len() {
        order.swap(depth, idx);
        permute(order, depth.saturating_add(1), visit);
        order.swap(depth, idx);
    }
}
