//! Error types for PathForge

use thiserror::Error;

/// Main error type for PathForge operations
#[derive(Debug, Error)]
pub enum PathForgeError {
    /// Point set is empty where at least one point is required
    #[error("Point set is empty")]
    EmptyPointSet,

    /// A point disagrees with the rest of the set on dimensionality
    #[error("Dimension mismatch: point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Coordinate count outside the supported range
    #[error("Unsupported dimensionality {dims}: points must have 2 or 3 coordinates")]
    UnsupportedDimensionality { dims: usize },

    /// Tour is not a permutation of the point indices
    #[error("Invalid tour: {0}")]
    InvalidTour(String),

    /// Error in run configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for PathForge operations
pub type Result<T> = std::result::Result<T, PathForgeError>;
