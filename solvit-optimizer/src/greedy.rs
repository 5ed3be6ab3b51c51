//! Nearest-neighbour ordering for days with too many jobs to search.

use solvit_core::DistanceMatrix;

/// Visit the nearest unvisited job from the current position until none
/// remain, starting at index 0.
///
/// Ties go to the lower matrix index. Runs in `O(n^2)` and carries no
/// optimality guarantee.
pub(crate) fn nearest_neighbour(matrix: &DistanceMatrix) -> Vec<usize> {
    let mut remaining: Vec<usize> = (1..matrix.dimension()).collect();
    let mut order = Vec::with_capacity(remaining.len());
    let mut current = 0_usize;

    while !remaining.is_empty() {
        let mut nearest_slot = 0_usize;
        let mut nearest_distance = f64::INFINITY;
        for (slot, &candidate) in remaining.iter().enumerate() {
            let distance = matrix.distance(current, candidate).unwrap_or(f64::INFINITY);
            if distance < nearest_distance {
                nearest_slot = slot;
                nearest_distance = distance;
            }
        }
        // `remove` keeps the remaining indices sorted for the tie-break.
        current = remaining.remove(nearest_slot);
        order.push(current);
    }
    order
}
