//! Depth-first branch-and-bound search over visiting orders.
//!
//! All state lives in [`SearchState`], created afresh for every call, so
//! nothing leaks between optimisations.

use solvit_core::DistanceMatrix;

/// Result of an exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchOutcome {
    /// Matrix indices of the jobs (`1..=n`) in visiting order.
    pub(crate) order: Vec<usize>,
    /// Round-trip cost of `order`.
    pub(crate) cost: f64,
    /// Complete tours compared against the best so far.
    pub(crate) tours_evaluated: u64,
    /// Partial tours abandoned by the bound.
    pub(crate) branches_pruned: u64,
}

struct SearchState<'a> {
    matrix: &'a DistanceMatrix,
    prune: bool,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_order: Vec<usize>,
    best_cost: f64,
    tours_evaluated: u64,
    branches_pruned: u64,
}

impl<'a> SearchState<'a> {
    fn new(matrix: &'a DistanceMatrix, prune: bool) -> Self {
        let dimension = matrix.dimension();
        let mut visited = vec![false; dimension];
        if let Some(start) = visited.first_mut() {
            *start = true;
        }
        Self {
            matrix,
            prune,
            visited,
            path: Vec::with_capacity(matrix.job_count()),
            best_order: Vec::new(),
            best_cost: f64::INFINITY,
            tours_evaluated: 0,
            branches_pruned: 0,
        }
    }

    fn edge(&self, from: usize, to: usize) -> f64 {
        self.matrix.distance(from, to).unwrap_or(f64::INFINITY)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour costs accumulate floating-point distances"
    )]
    fn extend(&mut self, current: usize, cost: f64) {
        if self.path.len() == self.matrix.job_count() {
            let total = cost + self.edge(current, 0);
            self.tours_evaluated = self.tours_evaluated.saturating_add(1);
            // Strict comparison keeps the first optimum in enumeration order.
            if total < self.best_cost {
                self.best_cost = total;
                self.best_order.clone_from(&self.path);
            }
            return;
        }

        // Edges are non-negative, so no completion of this prefix can win.
        if self.prune && cost >= self.best_cost {
            self.branches_pruned = self.branches_pruned.saturating_add(1);
            return;
        }

        for (next, step) in self.candidates(current) {
            self.mark(next, true);
            self.path.push(next);
            self.extend(next, cost + step);
            self.path.pop();
            self.mark(next, false);
        }
    }

    /// Unvisited jobs paired with their distance from `current`, nearest
    /// first. The sort is stable, so equal distances keep index order.
    fn candidates(&self, current: usize) -> Vec<(usize, f64)> {
        let mut candidates: Vec<(usize, f64)> = (1..self.matrix.dimension())
            .filter(|&next| !self.visited.get(next).copied().unwrap_or(true))
            .map(|next| (next, self.edge(current, next)))
            .collect();
        candidates.sort_by(|left, right| left.1.total_cmp(&right.1));
        candidates
    }

    fn mark(&mut self, index: usize, visited: bool) {
        if let Some(flag) = self.visited.get_mut(index) {
            *flag = visited;
        }
    }

    fn into_outcome(self) -> SearchOutcome {
        SearchOutcome {
            order: self.best_order,
            cost: self.best_cost,
            tours_evaluated: self.tours_evaluated,
            branches_pruned: self.branches_pruned,
        }
    }
}

/// Find the cheapest round trip from index 0 through every job index.
///
/// At every step the nearest unvisited job is tried first, with the lower
/// index breaking distance ties. The first cheapest tour reached in that
/// order is kept; later tours of equal cost never replace it. With `prune`
/// set, prefixes whose cost already reaches the best complete tour are
/// skipped; this never changes the returned order.
pub(crate) fn exhaustive_search(matrix: &DistanceMatrix, prune: bool) -> SearchOutcome {
    let mut state = SearchState::new(matrix, prune);
    state.extend(0, 0.0);
    state.into_outcome()
}
