//! SVG plots of the original and optimized paths.
//!
//! The optimizer returns plain data; rendering stays entirely on this side
//! of the boundary. Three files are written: the original path in red, the
//! optimized path in blue, and both superimposed for comparison. 3-D point
//! sets are projected onto the XY plane.

use std::fmt::Write as _;
use std::path::Path;

use pathforge::{PointSet, Tour};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 40.0;

const ORIGINAL_COLOR: &str = "#d62728";
const OPTIMIZED_COLOR: &str = "#1f77b4";

/// Writes `original.svg`, `optimized.svg`, and `combined.svg` into `dir`,
/// creating the directory if needed.
pub fn write_svg_plots(
    dir: &Path,
    points: &PointSet,
    original: &Tour,
    optimized: &Tour,
) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let frame = Frame::fit(points);

    let original_path = trace(&frame, points, original, ORIGINAL_COLOR);
    let optimized_path = trace(&frame, points, optimized, OPTIMIZED_COLOR);

    std::fs::write(
        dir.join("original.svg"),
        document("Original path", &original_path),
    )?;
    std::fs::write(
        dir.join("optimized.svg"),
        document("Optimized path", &optimized_path),
    )?;
    std::fs::write(
        dir.join("combined.svg"),
        document(
            "Original (red) vs optimized (blue)",
            &format!("{original_path}{optimized_path}"),
        ),
    )?;
    Ok(())
}

/// Maps data coordinates into the drawing area, flipping Y so that larger
/// data values plot upward.
struct Frame {
    min_x: f64,
    min_y: f64,
    scale: f64,
}

impl Frame {
    fn fit(points: &PointSet) -> Self {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for point in points.iter() {
            let c = point.coords();
            min_x = min_x.min(c[0]);
            max_x = max_x.max(c[0]);
            min_y = min_y.min(c[1]);
            max_y = max_y.max(c[1]);
        }
        if points.is_empty() {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                scale: 1.0,
            };
        }
        // A degenerate span (single point, collinear axis) still gets a
        // finite scale.
        let span_x = (max_x - min_x).max(1e-12);
        let span_y = (max_y - min_y).max(1e-12);
        let scale = ((WIDTH - 2.0 * MARGIN) / span_x).min((HEIGHT - 2.0 * MARGIN) / span_y);
        Self {
            min_x,
            min_y,
            scale,
        }
    }

    fn project(&self, point: &pathforge::Point) -> (f64, f64) {
        let c = point.coords();
        let x = MARGIN + (c[0] - self.min_x) * self.scale;
        let y = HEIGHT - MARGIN - (c[1] - self.min_y) * self.scale;
        (x, y)
    }
}

/// Renders one tour as a polyline with point markers.
fn trace(frame: &Frame, points: &PointSet, tour: &Tour, color: &str) -> String {
    let mut vertices = String::new();
    let mut markers = String::new();
    for &idx in tour {
        let (x, y) = frame.project(&points[idx]);
        let _ = write!(vertices, "{x:.2},{y:.2} ");
        let _ = write!(
            markers,
            r#"<circle cx="{x:.2}" cy="{y:.2}" r="3" fill="{color}"/>"#
        );
    }
    format!(
        r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="2"/>{markers}"#,
        vertices.trim_end()
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" "#,
            r#"viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" fill="white"/>"#,
            r#"<text x="{m}" y="24" font-family="sans-serif" font-size="16">{title}</text>"#,
            "{body}</svg>\n"
        ),
        w = WIDTH,
        h = HEIGHT,
        m = MARGIN,
        title = title,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathforge::Point;

    fn sample() -> PointSet {
        PointSet::new(vec![
            Point::new([0.0, 0.0, 0.0]),
            Point::new([10.0, 0.0, 5.0]),
            Point::new([10.0, 10.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_writes_three_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        let points = sample();
        let tour = Tour::identity(3);
        write_svg_plots(dir.path(), &points, &tour, &tour).unwrap();

        for name in ["original.svg", "optimized.svg", "combined.svg"] {
            let contents = std::fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(contents.starts_with("<svg"), "{name} is not an SVG");
            assert!(contents.contains("<polyline"), "{name} has no path");
        }
    }

    #[test]
    fn test_combined_plot_shows_both_colors() {
        let dir = tempfile::tempdir().unwrap();
        let points = sample();
        let original = Tour::identity(3);
        let optimized = Tour::from_order(vec![0, 2, 1]);
        write_svg_plots(dir.path(), &points, &original, &optimized).unwrap();

        let combined = std::fs::read_to_string(dir.path().join("combined.svg")).unwrap();
        assert!(combined.contains(ORIGINAL_COLOR));
        assert!(combined.contains(OPTIMIZED_COLOR));
    }

    #[test]
    fn test_single_point_does_not_blow_up() {
        let dir = tempfile::tempdir().unwrap();
        let points = PointSet::new(vec![Point::new([5.0, 5.0, 5.0])]).unwrap();
        let tour = Tour::identity(1);
        write_svg_plots(dir.path(), &points, &tour, &tour).unwrap();
        let svg = std::fs::read_to_string(dir.path().join("original.svg")).unwrap();
        assert!(svg.contains("<circle"));
    }
}
