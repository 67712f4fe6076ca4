//! PathForge Core - domain types and path-length evaluation
//!
//! This crate provides the fundamental types for travel-path ordering:
//! - `Point` and `PointSet` for labeled measurement points
//! - `Tour` for visiting orders (index permutations over a point set)
//! - `Metric` for Euclidean distance in full or XY-projected form
//! - `path_length` as the objective function shared by construction,
//!   refinement, and reporting

pub mod domain;
pub mod error;
pub mod length;
pub mod metric;

pub use domain::{Point, PointSet, Tour};
pub use error::{PathForgeError, Result};
pub use length::path_length;
pub use metric::Metric;
