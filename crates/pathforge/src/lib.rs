//! PathForge - travel-path ordering for measurement point sets
//!
//! Given labeled 3-D (or 2-D) points, such as a CMM scan or a machining
//! point cloud, PathForge computes a visiting order that shrinks
//! the total travel between consecutive points: greedy nearest-neighbor
//! construction followed by 2-opt local search, as one configurable
//! pipeline. It is a fast path approximation, not an exact TSP solver.
//!
//! # Example
//!
//! ```
//! use pathforge::prelude::*;
//!
//! let points = PointSet::new(vec![
//!     Point::labeled("P0", [0.0, 0.0, 0.0]),
//!     Point::labeled("P1", [10.0, 10.0, 0.0]),
//!     Point::labeled("P2", [0.0, 10.0, 0.0]),
//!     Point::labeled("P3", [10.0, 0.0, 0.0]),
//! ]).unwrap();
//!
//! let summary = pathforge::optimize_points(&points, &RunConfig::default()).unwrap();
//!
//! assert!(summary.tour.is_permutation_of(points.len()));
//! assert!(summary.optimized_length <= summary.original_length);
//! ```

// Domain types
pub use pathforge_core::{path_length, Metric, PathForgeError, Point, PointSet, Result, Tour};

// Configuration
pub use pathforge_config::{ConfigError, RunConfig, TerminationConfig};

// Solver engine
pub use pathforge_solver::{
    nearest_neighbor_tour, NearestNeighborPhase, PassCountTermination, PathSummary, Phase, Solver,
    SolverScope, Termination, TimeTermination, TwoOptPhase,
};

/// Runs the configured pipeline over a point set in one call.
///
/// # Errors
///
/// Propagates configuration validation failures and the constructor's
/// `EmptyPointSet`.
pub fn optimize_points(points: &PointSet, config: &RunConfig) -> Result<PathSummary> {
    Solver::from_config(config)?.solve(points)
}

pub mod prelude {
    pub use super::{
        optimize_points, path_length, Metric, PathSummary, Point, PointSet, RunConfig, Solver,
        Tour,
    };
}
