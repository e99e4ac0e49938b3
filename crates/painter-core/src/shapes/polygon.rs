//! Vertex layouts for the simple preset shapes.

use kurbo::Point;
use std::f64::consts::PI;

/// Corners of an axis-aligned rectangle, clockwise from `origin`.
pub fn rectangle_vertices(origin: Point, width: f64, height: f64) -> Vec<Point> {
    vec![
        origin,
        Point::new(origin.x + width, origin.y),
        Point::new(origin.x + width, origin.y + height),
        Point::new(origin.x, origin.y + height),
    ]
}

/// Regular `segments`-gon inscribed in the circle, starting at angle 0.
pub fn circle_vertices(center: Point, radius: f64, segments: usize) -> Vec<Point> {
    (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / segments as f64;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Star with `points` tips, alternating outer and inner radius.
pub fn star_vertices(center: Point, outer_radius: f64, inner_radius: f64, points: usize) -> Vec<Point> {
    (0..points * 2)
        .map(|i| {
            let angle = PI * i as f64 / points as f64;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}
