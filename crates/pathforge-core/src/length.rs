//! Open-path length evaluation.

use crate::domain::{PointSet, Tour};
use crate::metric::Metric;

/// Computes the total length of the open path that visits the tour's
/// indices in order: the sum over the `n - 1` consecutive pairs.
///
/// There is no closing edge back to the start. A tour over zero or one
/// points has length 0. This is both the user-facing report value and the
/// refiner's objective function; callers must pass the same metric they
/// optimize with.
///
/// # Examples
///
/// ```
/// use pathforge_core::{path_length, Metric, Point, PointSet, Tour};
///
/// let points = PointSet::new(vec![
///     Point::new([0.0, 0.0]),
///     Point::new([10.0, 0.0]),
///     Point::new([10.0, 10.0]),
/// ]).unwrap();
///
/// let tour = Tour::identity(points.len());
/// assert_eq!(path_length(&points, &tour, Metric::Xyz), 20.0);
/// ```
pub fn path_length(points: &PointSet, tour: &Tour, metric: Metric) -> f64 {
    let mut total = 0.0;
    for pair in tour.as_slice().windows(2) {
        total += metric.distance(&points[pair[0]], &points[pair[1]]);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn set(coords: &[[f64; 3]]) -> PointSet {
        PointSet::new(coords.iter().map(|c| Point::new(c.iter().copied())).collect()).unwrap()
    }

    #[test]
    fn test_empty_tour_has_zero_length() {
        let points = PointSet::new(Vec::new()).unwrap();
        let tour = Tour::identity(0);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 0.0);
    }

    #[test]
    fn test_single_point_has_zero_length() {
        let points = set(&[[1.0, 2.0, 3.0]]);
        let tour = Tour::identity(1);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 0.0);
    }

    #[test]
    fn test_open_path_has_no_closing_edge() {
        // Unit square corners in order: three edges, not four.
        let points = set(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);
        let tour = Tour::identity(4);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 3.0);
    }

    #[test]
    fn test_length_follows_tour_order_not_input_order() {
        let points = set(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let identity = Tour::identity(3);
        let reordered = Tour::from_order(vec![0, 2, 1]);
        assert_eq!(path_length(&points, &identity, Metric::Xyz), 19.0);
        assert_eq!(path_length(&points, &reordered, Metric::Xyz), 10.0);
    }

    #[test]
    fn test_length_respects_metric_mode() {
        let points = set(&[[0.0, 0.0, 0.0], [3.0, 4.0, 12.0]]);
        let tour = Tour::identity(2);
        assert_eq!(path_length(&points, &tour, Metric::Xyz), 13.0);
        assert_eq!(path_length(&points, &tour, Metric::Xy), 5.0);
    }
}
