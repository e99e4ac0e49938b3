//! German cross: the hollow outline of a plus sign.

use kurbo::Point;

/// Arm half-width as a fraction of the cross size.
pub const CROSS_INNER_RATIO: f64 = 0.2;
/// Arm reach as a fraction of the cross size.
pub const CROSS_OUTER_RATIO: f64 = 0.5;

/// Twelve vertices tracing the plus-sign silhouette clockwise on screen,
/// starting at the left corner of the top arm.
pub fn cross_vertices(center: Point, size: f64) -> Vec<Point> {
    let inner = size * CROSS_INNER_RATIO;
    let outer = size * CROSS_OUTER_RATIO;
    let (cx, cy) = (center.x, center.y);
    vec![
        Point::new(cx - inner, cy - outer),
        Point::new(cx + inner, cy - outer),
        Point::new(cx + inner, cy - inner),
        Point::new(cx + outer, cy - inner),
        Point::new(cx + outer, cy + inner),
        Point::new(cx + inner, cy + inner),
        Point::new(cx + inner, cy + outer),
        Point::new(cx - inner, cy + outer),
        Point::new(cx - inner, cy + inner),
        Point::new(cx - outer, cy + inner),
        Point::new(cx - outer, cy - inner),
        Point::new(cx - inner, cy - inner),
    ]
}
