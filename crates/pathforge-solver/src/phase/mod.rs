//! Pipeline phases.

mod nearest_neighbor;
mod two_opt;

pub use nearest_neighbor::{nearest_neighbor_tour, NearestNeighborPhase};
pub use two_opt::TwoOptPhase;

use std::fmt::Debug;

use pathforge_core::Result;

use crate::scope::SolverScope;

/// A single stage of the optimization pipeline.
///
/// Phases run in sequence against one scope: each reads the working tour
/// its predecessor left behind and either replaces it (construction) or
/// improves it in place (refinement).
pub trait Phase: Debug {
    /// Runs this phase against the scope's working tour.
    fn solve(&mut self, scope: &mut SolverScope<'_>) -> Result<()>;

    /// Short name for logging.
    fn phase_type_name(&self) -> &'static str;
}
