//! Plane geometry helpers shared by shapes and hit testing.

use kurbo::{Affine, Point, Rect, Vec2};

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate `point` about `pivot` by `degrees`.
///
/// Positive angles turn clockwise on screen, where y grows downward.
pub fn rotate_point(point: Point, pivot: Point, degrees: f64) -> Point {
    Affine::rotate_about(degrees.to_radians(), pivot) * point
}

/// Axis-aligned bounding box of a point set, `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let mut rect = Rect::from_points(*first, *first);
    for p in &points[1..] {
        rect = rect.union_pt(*p);
    }
    Some(rect)
}

/// Box containment with all four edges included.
///
/// `kurbo::Rect::contains` excludes the right and bottom edges; clicks
/// exactly on a shape's extreme vertex must still hit it.
pub fn box_contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Offset every point by `delta`.
pub fn translate_points(points: &mut [Point], delta: Vec2) {
    for p in points {
        *p += delta;
    }
}

/// Signed shoelace area. Positive means clockwise on a y-down screen.
#[cfg(test)]
pub(crate) fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}
