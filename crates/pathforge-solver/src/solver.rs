//! Solver pipeline assembly and execution.

use pathforge_config::RunConfig;
use pathforge_core::{Metric, PathForgeError, PointSet, Result, Tour};

use crate::phase::{NearestNeighborPhase, Phase, TwoOptPhase};
use crate::scope::SolverScope;
use crate::termination::{PassCountTermination, TimeTermination};

/// The result of one optimization run: plain data, no I/O attached.
///
/// The tour indexes into the point set the caller passed to
/// [`Solver::solve`]; mapping it back onto structured records or raw input
/// lines is the caller's index-indirection step.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    /// The final visiting order.
    pub tour: Tour,
    /// Length of the path in input order, for comparison.
    pub original_length: f64,
    /// Length of the path in the final order.
    pub optimized_length: f64,
}

impl PathSummary {
    /// Absolute length saved relative to the input order.
    pub fn improvement(&self) -> f64 {
        self.original_length - self.optimized_length
    }

    /// Length saved as a percentage of the original; 0 for a zero-length
    /// original path.
    pub fn improvement_percent(&self) -> f64 {
        if self.original_length > 0.0 {
            self.improvement() / self.original_length * 100.0
        } else {
            0.0
        }
    }
}

/// The path-ordering solver: a sequence of phases over one scope.
///
/// Build it from a [`RunConfig`] to get the configured pipeline, or from
/// explicit phases for custom setups. Solving borrows the point set
/// read-only and returns a [`PathSummary`]; the solver itself keeps no
/// state between runs, so one instance may solve several point sets.
#[derive(Debug)]
pub struct Solver {
    metric: Metric,
    phases: Vec<Box<dyn Phase>>,
}

impl Solver {
    /// Creates a solver from explicit phases.
    pub fn new(metric: Metric, phases: Vec<Box<dyn Phase>>) -> Self {
        Self { metric, phases }
    }

    /// Assembles the pipeline a configuration describes.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration fails validation.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| PathForgeError::Config(e.to_string()))?;

        let mut phases: Vec<Box<dyn Phase>> = Vec::new();
        if config.construction {
            phases.push(Box::new(NearestNeighborPhase::new()));
        }
        if config.refinement {
            let mut refiner = TwoOptPhase::new(config.improvement_tolerance);
            if let Some(termination) = &config.termination {
                if let Some(limit) = termination.pass_count_limit {
                    refiner = refiner.with_termination(Box::new(PassCountTermination::new(limit)));
                }
                if let Some(limit) = termination.time_limit() {
                    refiner = refiner.with_termination(Box::new(TimeTermination::new(limit)));
                }
            }
            phases.push(Box::new(refiner));
        }

        Ok(Self::new(config.metric, phases))
    }

    /// Runs the pipeline over the point set.
    ///
    /// The identity order is the baseline: its length is reported as
    /// `original_length`, and it is the starting tour when construction is
    /// disabled.
    ///
    /// # Errors
    ///
    /// `EmptyPointSet` if construction runs on an empty set. An empty set
    /// with refinement only yields the empty tour with both lengths 0.
    pub fn solve(&mut self, points: &PointSet) -> Result<PathSummary> {
        let mut scope = SolverScope::new(points, self.metric);
        let original_length = scope.calculate_length();
        scope.start_solving();

        for phase in &mut self.phases {
            tracing::debug!("Starting phase ({})", phase.phase_type_name());
            phase.solve(&mut scope)?;
            tracing::debug!(
                "Finished phase ({}) with length {:.6}",
                phase.phase_type_name(),
                scope.best_length()
            );
        }

        let optimized_length = scope.calculate_length();
        let tour = scope.into_tour();
        debug_assert!(tour.is_permutation_of(points.len()));

        tracing::info!(
            n = points.len(),
            original_length,
            optimized_length,
            "optimization finished"
        );

        Ok(PathSummary {
            tour,
            original_length,
            optimized_length,
        })
    }
}
