//! Shared fixtures for solver tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pathforge_core::{Point, PointSet};

/// The tolerance the shipped configuration defaults to.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Unit-square corners A(0,0) B(10,0) C(10,10) D(0,10): the input order is
/// already the optimal open path, length 30.
pub fn square() -> PointSet {
    PointSet::new(vec![
        Point::labeled("A", [0.0, 0.0, 0.0]),
        Point::labeled("B", [10.0, 0.0, 0.0]),
        Point::labeled("C", [10.0, 10.0, 0.0]),
        Point::labeled("D", [0.0, 10.0, 0.0]),
    ])
    .expect("fixture dims are uniform")
}

/// Square corners visited in a crossing order: (0,0) (10,10) (0,10) (10,0).
/// One middle-segment reversal uncrosses it, 38.28 down to 30.
pub fn crossing() -> PointSet {
    PointSet::new(vec![
        Point::new([0.0, 0.0]),
        Point::new([10.0, 10.0]),
        Point::new([0.0, 10.0]),
        Point::new([10.0, 0.0]),
    ])
    .expect("fixture dims are uniform")
}

/// A reproducible random 3-D cloud in a 100-unit cube.
pub fn random_cloud(n: usize, seed: u64) -> PointSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..n)
        .map(|i| {
            Point::labeled(
                format!("P{i:03}"),
                [
                    rng.random_range(0.0..100.0),
                    rng.random_range(0.0..100.0),
                    rng.random_range(0.0..100.0),
                ],
            )
        })
        .collect();
    PointSet::new(points).expect("fixture dims are uniform")
}
