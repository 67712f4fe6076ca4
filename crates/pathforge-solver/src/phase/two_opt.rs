//! 2-opt local search phase.

use pathforge_core::Result;

use super::Phase;
use crate::scope::SolverScope;
use crate::termination::Termination;

/// Refines the working tour with first-improvement 2-opt moves.
///
/// A 2-opt move reverses the tour segment at positions `i..=j`, replacing
/// the edges entering `i` and leaving `j` with two new ones. The phase
/// scans all valid `(i, j)` pairs in ascending `i` then ascending `j`
/// order; whenever a reversal shortens the tour by more than the tolerance
/// it is applied immediately and the scan continues against the new
/// baseline. Passes repeat until one accepts nothing, which leaves the tour
/// 2-opt locally optimal.
///
/// Positions 0 and `len - 1` are never disturbed: the start and end of the
/// path stay fixed. A tour with fewer than 4 visits has no valid move and
/// passes through unchanged.
///
/// Termination is guaranteed without safeguards: the length strictly
/// decreases on every accepted move and is bounded below by zero. Optional
/// pass-count and time limits can still cap runtime on large inputs; they
/// are checked between passes and default to absent.
#[derive(Debug)]
pub struct TwoOptPhase {
    tolerance: f64,
    terminations: Vec<Box<dyn Termination>>,
}

impl TwoOptPhase {
    /// Creates a refinement phase with the given improvement tolerance.
    ///
    /// A candidate must undercut the current best by more than `tolerance`
    /// to be accepted; this keeps floating-point noise from producing
    /// endless passes.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            terminations: Vec::new(),
        }
    }

    /// Adds a safeguard checked between passes.
    pub fn with_termination(mut self, termination: Box<dyn Termination>) -> Self {
        self.terminations.push(termination);
        self
    }

    fn should_stop(&self, scope: &SolverScope<'_>) -> bool {
        self.terminations.iter().any(|t| t.is_terminated(scope))
    }
}

impl Phase for TwoOptPhase {
    fn solve(&mut self, scope: &mut SolverScope<'_>) -> Result<()> {
        let n = scope.working_tour().len();
        if n < 4 {
            tracing::debug!(n, "tour too short for 2-opt, skipping refinement");
            return Ok(());
        }

        let points = scope.points();
        let metric = scope.metric();
        let mut best = scope.best_length();

        loop {
            if self.should_stop(scope) {
                tracing::warn!(
                    passes = scope.pass_count(),
                    "refinement stopped by safeguard before reaching a local optimum"
                );
                break;
            }

            let mut improved = false;
            // i + 2 < n and j + 1 < n: the reversal i..=j always has both
            // boundary edges, and the endpoints stay fixed.
            for i in 1..n - 2 {
                for j in i + 1..n - 1 {
                    let tour = scope.working_tour();
                    let (a, b) = (tour[i - 1], tour[i]);
                    let (c, d) = (tour[j], tour[j + 1]);
                    // Reversing i..=j swaps edges (a,b) and (c,d) for (a,c)
                    // and (b,d); interior edge lengths are unchanged, so the
                    // candidate total is best + delta.
                    let delta = metric.distance(&points[a], &points[c])
                        + metric.distance(&points[b], &points[d])
                        - metric.distance(&points[a], &points[b])
                        - metric.distance(&points[c], &points[d]);
                    let candidate = best + delta;
                    if candidate < best - self.tolerance {
                        scope.working_tour_mut().reverse_segment(i, j);
                        best = candidate;
                        improved = true;
                        scope.record_accepted_move();
                        tracing::trace!(i, j, length = best, "accepted 2-opt move");
                    }
                }
            }

            scope.increment_pass_count();
            if !improved {
                break;
            }
        }

        scope.set_best_length(best);
        debug_assert!(scope.working_tour().is_permutation_of(n));
        tracing::debug!(
            passes = scope.pass_count(),
            accepted = scope.accepted_move_count(),
            length = best,
            "2-opt refinement done"
        );
        Ok(())
    }

    fn phase_type_name(&self) -> &'static str {
        "TwoOpt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{crossing, random_cloud, square, DEFAULT_TOLERANCE};
    use pathforge_core::{path_length, Metric, Point, PointSet, Tour};

    fn refine(points: &PointSet, metric: Metric) -> Tour {
        let mut scope = SolverScope::new(points, metric);
        TwoOptPhase::new(DEFAULT_TOLERANCE)
            .solve(&mut scope)
            .unwrap();
        scope.into_tour()
    }

    #[test]
    fn test_short_tours_pass_through() {
        for n in 0..4 {
            let points = random_cloud(n, 3);
            let tour = refine(&points, Metric::Xyz);
            assert_eq!(tour, Tour::identity(n), "n = {n} must be a no-op");
        }
    }

    #[test]
    fn test_optimal_square_is_unchanged() {
        // The open path around the square has no crossing edges; no 2-opt
        // move improves it.
        let points = square();
        let tour = refine(&points, Metric::Xyz);
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 30.0);
    }

    #[test]
    fn test_uncrosses_crossing_path() {
        // Input order (0,0) (10,10) (0,10) (10,0) has length ~38.28; one
        // reversal of the middle segment yields the straight path of
        // length 30.
        let points = crossing();
        let before = path_length(&points, &Tour::identity(4), Metric::Xyz);
        assert!((before - (10.0 + 200.0_f64.sqrt() * 2.0)).abs() < 1e-9);

        let tour = refine(&points, Metric::Xyz);
        assert_eq!(tour.as_slice(), &[0, 2, 1, 3]);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 30.0);
    }

    #[test]
    fn test_endpoints_stay_fixed() {
        for seed in 0..5 {
            let points = random_cloud(25, seed);
            let tour = refine(&points, Metric::Xyz);
            assert_eq!(tour[0], 0);
            assert_eq!(tour[tour.len() - 1], 24);
        }
    }

    #[test]
    fn test_never_lengthens_the_tour() {
        for seed in 0..10 {
            let points = random_cloud(30, seed);
            let before = path_length(&points, &Tour::identity(30), Metric::Xyz);
            let tour = refine(&points, Metric::Xyz);
            let after = path_length(&points, &tour, Metric::Xyz);
            assert!(after <= before, "seed {seed}: {after} > {before}");
            assert!(tour.is_permutation_of(30));
        }
    }

    #[test]
    fn test_refinement_is_idempotent() {
        // A refined tour is 2-opt locally optimal, so refining it again
        // must change nothing.
        let points = random_cloud(40, 21);
        let first = refine(&points, Metric::Xyz);

        let mut scope = SolverScope::new(&points, Metric::Xyz);
        scope.replace_working_tour(first.clone());
        TwoOptPhase::new(DEFAULT_TOLERANCE)
            .solve(&mut scope)
            .unwrap();
        assert_eq!(scope.working_tour(), &first);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let points = random_cloud(35, 5);
        assert_eq!(refine(&points, Metric::Xyz), refine(&points, Metric::Xyz));
    }

    #[test]
    fn test_incremental_baseline_matches_recomputation() {
        let points = random_cloud(30, 13);
        let mut scope = SolverScope::new(&points, Metric::Xyz);
        TwoOptPhase::new(DEFAULT_TOLERANCE)
            .solve(&mut scope)
            .unwrap();
        assert!((scope.best_length() - scope.calculate_length()).abs() < 1e-6);
    }

    #[test]
    fn test_pass_limit_stops_early() {
        use crate::termination::PassCountTermination;

        let points = random_cloud(50, 17);
        let mut scope = SolverScope::new(&points, Metric::Xyz);
        TwoOptPhase::new(DEFAULT_TOLERANCE)
            .with_termination(Box::new(PassCountTermination::new(1)))
            .solve(&mut scope)
            .unwrap();
        // One full pass runs, then the safeguard trips before the second.
        assert_eq!(scope.pass_count(), 1);
        assert!(scope.working_tour().is_permutation_of(50));
    }

    #[test]
    fn test_refines_identity_order_without_construction() {
        // The 2-opt-on-identity variant: no greedy stage, still improves.
        let points = PointSet::new(vec![
            Point::new([0.0, 0.0]),
            Point::new([30.0, 0.0]),
            Point::new([10.0, 0.0]),
            Point::new([20.0, 0.0]),
            Point::new([40.0, 0.0]),
        ])
        .unwrap();
        let tour = refine(&points, Metric::Xyz);
        assert_eq!(tour.as_slice(), &[0, 2, 3, 1, 4]);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 40.0);
    }
}
