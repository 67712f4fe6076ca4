//! Solver-level scope.

use std::time::{Duration, Instant};

use pathforge_core::{path_length, Metric, PointSet, Tour};

/// Top-level scope for one optimization run.
///
/// Holds the read-only point set, the metric mode, and the working tour
/// that phases mutate, plus the counters and clock the termination
/// safeguards read. The point set is borrowed for the whole run; the tour
/// is exclusively owned here, so phases can run back-to-back without any
/// shared state outside the scope.
pub struct SolverScope<'a> {
    points: &'a PointSet,
    metric: Metric,
    tour: Tour,
    best_length: f64,
    pass_count: u64,
    accepted_move_count: u64,
    start_time: Option<Instant>,
}

impl<'a> SolverScope<'a> {
    /// Creates a scope with the identity tour as the working order.
    pub fn new(points: &'a PointSet, metric: Metric) -> Self {
        let tour = Tour::identity(points.len());
        let best_length = path_length(points, &tour, metric);
        Self {
            points,
            metric,
            tour,
            best_length,
            pass_count: 0,
            accepted_move_count: 0,
            start_time: None,
        }
    }

    /// The point set under optimization.
    ///
    /// Returns the underlying borrow, so callers can hold it across
    /// mutations of the scope.
    #[inline]
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// The metric mode for this run.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The current working tour.
    #[inline]
    pub fn working_tour(&self) -> &Tour {
        &self.tour
    }

    /// Mutable access to the working tour, for in-place segment reversal.
    #[inline]
    pub fn working_tour_mut(&mut self) -> &mut Tour {
        &mut self.tour
    }

    /// Replaces the working tour wholesale and refreshes the baseline.
    pub fn replace_working_tour(&mut self, tour: Tour) {
        debug_assert!(
            tour.is_permutation_of(self.points.len()),
            "replacement tour must be a permutation of the point indices"
        );
        self.best_length = path_length(self.points, &tour, self.metric);
        self.tour = tour;
    }

    /// Recomputes the working tour's length from scratch.
    pub fn calculate_length(&self) -> f64 {
        path_length(self.points, &self.tour, self.metric)
    }

    /// The running best length, maintained incrementally by the refiner.
    #[inline]
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// Updates the running best length.
    #[inline]
    pub fn set_best_length(&mut self, length: f64) {
        self.best_length = length;
    }

    /// Marks the start of solving for elapsed-time tracking.
    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Time since `start_solving`, if solving has started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    /// Number of completed refinement passes.
    #[inline]
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Records one completed refinement pass.
    #[inline]
    pub fn increment_pass_count(&mut self) {
        self.pass_count += 1;
    }

    /// Number of accepted improving moves so far.
    #[inline]
    pub fn accepted_move_count(&self) -> u64 {
        self.accepted_move_count
    }

    /// Records one accepted improving move.
    #[inline]
    pub fn record_accepted_move(&mut self) {
        self.accepted_move_count += 1;
    }

    /// Consumes the scope, yielding the final tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::square;

    #[test]
    fn test_scope_starts_with_identity_tour() {
        let points = square();
        let scope = SolverScope::new(&points, Metric::Xyz);
        assert_eq!(scope.working_tour().as_slice(), &[0, 1, 2, 3]);
        assert_eq!(scope.best_length(), 30.0);
    }

    #[test]
    fn test_replace_working_tour_refreshes_baseline() {
        let points = square();
        let mut scope = SolverScope::new(&points, Metric::Xyz);
        scope.replace_working_tour(Tour::from_order(vec![0, 2, 1, 3]));
        assert_eq!(scope.best_length(), scope.calculate_length());
    }

    #[test]
    fn test_elapsed_requires_start() {
        let points = square();
        let mut scope = SolverScope::new(&points, Metric::Xyz);
        assert!(scope.elapsed().is_none());
        scope.start_solving();
        assert!(scope.elapsed().is_some());
    }
}
