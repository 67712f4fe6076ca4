//! PathForge solver engine.
//!
//! Reorders a point set so that the total Euclidean travel between
//! consecutive visits shrinks, using a two-stage pipeline:
//!
//! 1. **Nearest-neighbor construction**: greedy initial tour from index 0
//! 2. **2-opt local search**: first-improvement segment reversals until no
//!    move improves the tour
//!
//! Either stage can be switched off via `RunConfig`; skipping construction
//! refines the identity order directly. The engine is single-threaded,
//! deterministic, and headless: `Solver::solve` returns a plain
//! [`PathSummary`] and performs no I/O.
//!
//! # Example
//!
//! ```
//! use pathforge_config::RunConfig;
//! use pathforge_core::{Point, PointSet};
//! use pathforge_solver::Solver;
//!
//! let points = PointSet::new(vec![
//!     Point::new([0.0, 0.0, 0.0]),
//!     Point::new([10.0, 10.0, 0.0]),
//!     Point::new([1.0, 1.0, 0.0]),
//!     Point::new([11.0, 11.0, 0.0]),
//! ]).unwrap();
//!
//! let summary = Solver::from_config(&RunConfig::default())
//!     .unwrap()
//!     .solve(&points)
//!     .unwrap();
//!
//! assert!(summary.optimized_length <= summary.original_length);
//! assert!(summary.tour.is_permutation_of(points.len()));
//! ```

pub mod phase;
pub mod scope;
pub mod solver;
pub mod termination;

#[cfg(test)]
pub(crate) mod test_utils;

pub use phase::{nearest_neighbor_tour, NearestNeighborPhase, Phase, TwoOptPhase};
pub use scope::SolverScope;
pub use solver::{PathSummary, Solver};
pub use termination::{PassCountTermination, Termination, TimeTermination};
