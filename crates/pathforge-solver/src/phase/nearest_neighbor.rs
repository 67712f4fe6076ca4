//! Nearest-neighbor construction phase.

use pathforge_core::{Metric, PathForgeError, PointSet, Result, Tour};

use super::Phase;
use crate::scope::SolverScope;

/// Builds an initial tour by greedy nearest-neighbor selection.
///
/// Starts at index 0 and repeatedly extends the path to the closest
/// unvisited point. Fast and deterministic, but myopic: the tour it
/// produces is a starting point for refinement, not a local optimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborPhase;

impl NearestNeighborPhase {
    /// Creates a new construction phase.
    pub fn new() -> Self {
        Self
    }
}

impl Phase for NearestNeighborPhase {
    fn solve(&mut self, scope: &mut SolverScope<'_>) -> Result<()> {
        let tour = nearest_neighbor_tour(scope.points(), scope.metric())?;
        debug_assert!(tour.is_permutation_of(scope.points().len()));
        scope.replace_working_tour(tour);
        tracing::debug!(
            length = scope.best_length(),
            "nearest-neighbor construction done"
        );
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "NearestNeighbor"
    }
}

/// Greedy nearest-neighbor tour over the full point set.
///
/// Index 0 is fixed as the start. Each step scans the remaining indices in
/// ascending order and keeps the first strict minimum, so ties break to the
/// lowest index. The scan order is part of the contract: it decides
/// which tour a tied input deterministically produces. O(n²) distance
/// evaluations.
///
/// # Errors
///
/// `EmptyPointSet` if there are no points to start from.
pub fn nearest_neighbor_tour(points: &PointSet, metric: Metric) -> Result<Tour> {
    if points.is_empty() {
        return Err(PathForgeError::EmptyPointSet);
    }

    let n = points.len();
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    order.push(current);

    while !remaining.is_empty() {
        let mut best_dist = f64::INFINITY;
        let mut best_pos = 0;
        for (pos, &candidate) in remaining.iter().enumerate() {
            let d = metric.distance(&points[current], &points[candidate]);
            if d < best_dist {
                best_dist = d;
                best_pos = pos;
            }
        }
        current = remaining.remove(best_pos);
        order.push(current);
    }

    Ok(Tour::from_order(order))
}
