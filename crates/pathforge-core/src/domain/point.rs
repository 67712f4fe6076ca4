//! Labeled measurement points and the validated set that owns them.

use smallvec::SmallVec;

use crate::error::{PathForgeError, Result};

/// Coordinate storage. Two or three axes, kept inline.
pub type Coords = SmallVec<[f64; 3]>;

/// A single measurement point: an optional label plus 2 or 3 coordinates.
///
/// Points are immutable once loaded. The optimization core only ever takes
/// them by shared reference; ownership stays with the calling driver.
///
/// # Examples
///
/// ```
/// use pathforge_core::Point;
///
/// let p = Point::labeled("P01", [1.0, 2.0, 3.0]);
/// assert_eq!(p.label(), Some("P01"));
/// assert_eq!(p.dims(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    label: Option<String>,
    coords: Coords,
}

impl Point {
    /// Creates an unlabeled point from its coordinates.
    pub fn new(coords: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: None,
            coords: coords.into_iter().collect(),
        }
    }

    /// Creates a labeled point. An empty label is treated as absent.
    pub fn labeled(label: impl Into<String>, coords: impl IntoIterator<Item = f64>) -> Self {
        let label = label.into();
        Self {
            label: (!label.is_empty()).then_some(label),
            coords: coords.into_iter().collect(),
        }
    }

    /// Returns the label, if the point has a non-empty one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the coordinates.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the number of coordinate axes.
    #[inline]
    pub fn dims(&self) -> usize {
        self.coords.len()
    }
}

/// A validated, read-only collection of points.
///
/// Construction checks that every point carries the same number of
/// coordinates and that the number is 2 or 3. This establishes the
/// dimensionality contract the metric relies on: within one set, any two
/// points can be measured against each other.
///
/// An empty set is allowed (the evaluator is defined for it); operations
/// that need at least one point check for themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Builds a set from points, validating uniform dimensionality.
    ///
    /// # Errors
    ///
    /// `UnsupportedDimensionality` if the first point has neither 2 nor 3
    /// coordinates, `DimensionMismatch` if a later point disagrees with the
    /// first.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if let Some(first) = points.first() {
            let dims = first.dims();
            if dims != 2 && dims != 3 {
                return Err(PathForgeError::UnsupportedDimensionality { dims });
            }
            for (index, point) in points.iter().enumerate().skip(1) {
                if point.dims() != dims {
                    return Err(PathForgeError::DimensionMismatch {
                        index,
                        expected: dims,
                        found: point.dims(),
                    });
                }
            }
        }
        Ok(Self { points })
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate axes per point; 0 for an empty set.
    pub fn dims(&self) -> usize {
        self.points.first().map_or(0, Point::dims)
    }

    /// Returns the points as a slice.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}
