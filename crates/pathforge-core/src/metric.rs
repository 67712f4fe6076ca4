//! Euclidean distance in full or XY-projected form.

use crate::domain::Point;

/// Distance metric mode, selected once per run.
///
/// The same mode must be used for construction, refinement, and evaluation
/// within one run, or the reported lengths are not comparable.
///
/// # Examples
///
/// ```
/// use pathforge_core::{Metric, Point};
///
/// let a = Point::new([0.0, 0.0, 0.0]);
/// let b = Point::new([3.0, 4.0, 12.0]);
///
/// assert_eq!(Metric::Xyz.distance(&a, &b), 13.0);
/// assert_eq!(Metric::Xy.distance(&a, &b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Euclidean distance over all coordinate axes.
    ///
    /// On a 2-D point set this measures the two axes present.
    #[default]
    Xyz,

    /// Euclidean distance over the first two axes only.
    Xy,
}

impl Metric {
    /// Computes the Euclidean distance between two points.
    ///
    /// Matching dimensionality is a contract precondition, established by
    /// `PointSet` validation; two points from one set always satisfy it.
    #[inline]
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        debug_assert_eq!(
            a.dims(),
            b.dims(),
            "points must have matching dimensionality"
        );
        let axes = match self {
            Metric::Xyz => a.dims(),
            Metric::Xy => a.dims().min(2),
        };
        let mut sum = 0.0;
        for k in 0..axes {
            let d = a.coords()[k] - b.coords()[k];
            sum += d * d;
        }
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3d() {
        let a = Point::new([1.0, 2.0, 3.0]);
        let b = Point::new([4.0, 6.0, 3.0]);
        assert_eq!(Metric::Xyz.distance(&a, &b), 5.0);
    }

    #[test]
    fn test_distance_xy_ignores_third_axis() {
        let a = Point::new([0.0, 0.0, 100.0]);
        let b = Point::new([3.0, 4.0, -50.0]);
        assert_eq!(Metric::Xy.distance(&a, &b), 5.0);
    }

    #[test]
    fn test_distance_on_2d_points() {
        let a = Point::new([0.0, 0.0]);
        let b = Point::new([3.0, 4.0]);
        assert_eq!(Metric::Xyz.distance(&a, &b), 5.0);
        assert_eq!(Metric::Xy.distance(&a, &b), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new([1.5, -2.0, 0.25]);
        let b = Point::new([-3.0, 7.0, 4.0]);
        assert_eq!(Metric::Xyz.distance(&a, &b), Metric::Xyz.distance(&b, &a));
    }

    #[test]
    fn test_distance_zero_iff_identical() {
        let a = Point::new([1.0, 2.0, 3.0]);
        assert_eq!(Metric::Xyz.distance(&a, &a), 0.0);

        let b = Point::new([1.0, 2.0, 3.0 + 1e-6]);
        assert!(Metric::Xyz.distance(&a, &b) > 0.0);
    }

    #[test]
    fn test_distance_is_non_negative() {
        let a = Point::new([-5.0, -5.0, -5.0]);
        let b = Point::new([-8.0, -9.0, -5.0]);
        assert!(Metric::Xyz.distance(&a, &b) >= 0.0);
    }
}
