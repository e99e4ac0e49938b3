//! Arrow shape: a rectangular shaft with a triangular head.

use crate::geometry::rotate_point;
use kurbo::Point;

/// Direction, in degrees, new arrows are turned to after construction.
pub const ARROW_DEFAULT_DIRECTION: f64 = 270.0;

/// Vertex order that traces the arrow as a simple polygon.
pub const ARROW_OUTLINE_ORDER: [usize; 7] = [0, 5, 4, 3, 2, 6, 1];

/// Shaft edges stroked on top of the outline.
pub const ARROW_SHAFT_EDGES: [(usize, usize); 4] = [(0, 5), (5, 4), (1, 6), (6, 2)];

/// Compute the seven arrow vertices for `center` and `size`.
///
/// The arrow is laid out pointing toward +y (tip is vertex 3), then
/// turned by [`ARROW_DEFAULT_DIRECTION`] about the center.
///
/// Construction order: shaft top-left, shaft top-right, head right,
/// tip, head left, shaft bottom-left, shaft bottom-right.
pub fn arrow_vertices(center: Point, size: f64) -> Vec<Point> {
    let arrow_length = size * 2.0;
    let base_width = size * 0.5;
    let tip_length = size * 1.0;
    let tip_width = size * 1.2;

    let a = Point::new(center.x - base_width / 2.0, center.y - arrow_length / 2.0);
    let b = Point::new(center.x + base_width / 2.0, a.y);
    let c = Point::new(center.x + tip_width / 2.0, a.y + tip_length);
    let d = Point::new(center.x, center.y + arrow_length / 2.0);
    let e = Point::new(center.x - tip_width / 2.0, c.y);
    let f = Point::new(a.x, e.y);
    let g = Point::new(b.x, c.y);

    [a, b, c, d, e, f, g]
        .into_iter()
        .map(|p| rotate_point(p, center, ARROW_DEFAULT_DIRECTION))
        .collect()
}
