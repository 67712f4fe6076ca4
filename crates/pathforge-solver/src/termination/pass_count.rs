//! Pass count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Stops refinement after a fixed number of passes.
///
/// # Example
///
/// ```
/// use pathforge_solver::termination::PassCountTermination;
///
/// // Stop after 100 refinement passes
/// let term = PassCountTermination::new(100);
/// ```
#[derive(Debug, Clone)]
pub struct PassCountTermination {
    limit: u64,
}

impl PassCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for PassCountTermination {
    fn is_terminated(&self, scope: &SolverScope<'_>) -> bool {
        scope.pass_count() >= self.limit
    }
}
