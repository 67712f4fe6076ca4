//! Refinement safeguards.
//!
//! 2-opt terminates on its own: every accepted move strictly shortens the
//! tour. These safeguards only bound runtime on inputs large enough that
//! reaching the local optimum would take too long; none is installed by
//! default.

mod pass_count;
mod time;

pub use pass_count::PassCountTermination;
pub use time::TimeTermination;

use std::fmt::Debug;

use crate::scope::SolverScope;

/// Trait for deciding when refinement should stop early.
pub trait Termination: Debug {
    /// Returns true if refinement should stop before the next pass.
    fn is_terminated(&self, scope: &SolverScope<'_>) -> bool;
}
