//! Shape definitions for the canvas.
//!
//! Every shape is a polygon: a vertex list plus a [`ShapeKind`] tag that
//! remembers how the vertices were built and which edges get stroked.

mod arrow;
mod cross;
mod polygon;

pub use arrow::{ARROW_DEFAULT_DIRECTION, ARROW_OUTLINE_ORDER, ARROW_SHAFT_EDGES, arrow_vertices};
pub use cross::{CROSS_INNER_RATIO, CROSS_OUTER_RATIO, cross_vertices};
pub use polygon::{circle_vertices, rectangle_vertices, star_vertices};

use crate::bitmap::BitmapResource;
use crate::geometry::{self, normalize_degrees};
use crate::pattern;
use image::RgbaImage;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub const fn green() -> Self {
        Self::rgb(0, 255, 0)
    }

    pub const fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Display color, used for flat fills.
    pub color: SerializableColor,
    /// Outline color override (None = the scene's default outline color).
    pub stroke_color: Option<SerializableColor>,
    /// Outline width in pixels.
    pub stroke_width: f64,
}

impl ShapeStyle {
    /// Get the display color as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }

    /// Get the outline override as a peniko Color.
    pub fn stroke(&self) -> Option<Color> {
        self.stroke_color.map(Into::into)
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            stroke_color: None,
            stroke_width: 2.0,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// How a shape's vertices were constructed.
///
/// Parameters record the construction-time values only; after that the
/// vertex list is the source of truth and moves as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Arbitrary vertex list, e.g. a committed free-form shape.
    Polygon,
    /// Seven-vertex arrow.
    Arrow { center: Point, size: f64 },
    /// Twelve-vertex plus-sign outline.
    Cross { center: Point, size: f64 },
    Rectangle { origin: Point, width: f64, height: f64 },
    /// Regular polygon approximating a circle.
    Circle { center: Point, radius: f64, segments: usize },
    Star { center: Point, outer_radius: f64, inner_radius: f64, points: usize },
}

/// A shape's fill. Flat and pattern fills exclude each other.
#[derive(Debug, Clone, Default)]
pub enum Fill {
    #[default]
    None,
    /// Solid fill with the shape's display color.
    Flat,
    /// Tiled bitmap masked to the shape outline.
    Pattern(PatternFill),
}

/// A composited pattern fill cached on the shape.
///
/// The surface is computed once when the pattern is applied and is not
/// refreshed when the shape later moves or rotates.
#[derive(Debug, Clone)]
pub struct PatternFill {
    source: Weak<BitmapResource>,
    surface: Arc<RgbaImage>,
}

impl PatternFill {
    /// The bitmap this fill was made from, if it is still loaded.
    pub fn source(&self) -> Option<Arc<BitmapResource>> {
        self.source.upgrade()
    }

    /// Canvas-sized composited surface, transparent outside the shape.
    pub fn surface(&self) -> &Arc<RgbaImage> {
        &self.surface
    }
}

/// A polygonal shape on the canvas.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) id: ShapeId,
    kind: ShapeKind,
    points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
    fill: Fill,
    /// Cumulative rotation in degrees, always in `[0, 360)`.
    rotation: f64,
}

impl Shape {
    /// Create a shape from a vertex list.
    pub fn new(kind: ShapeKind, points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            points,
            style: ShapeStyle::default(),
            fill: Fill::None,
            rotation: 0.0,
        }
    }

    /// Free-form polygon through `points`.
    pub fn polygon(points: Vec<Point>) -> Self {
        Self::new(ShapeKind::Polygon, points)
    }

    /// Arrow centered at `center`, pointing in the default direction.
    pub fn arrow(center: Point, size: f64) -> Self {
        let mut shape = Self::new(ShapeKind::Arrow { center, size }, arrow_vertices(center, size));
        shape.rotation = ARROW_DEFAULT_DIRECTION;
        shape
    }

    /// Hollow plus-sign outline centered at `center`.
    pub fn cross(center: Point, size: f64) -> Self {
        Self::new(ShapeKind::Cross { center, size }, cross_vertices(center, size))
    }

    pub fn rectangle(origin: Point, width: f64, height: f64) -> Self {
        Self::new(
            ShapeKind::Rectangle { origin, width, height },
            rectangle_vertices(origin, width, height),
        )
    }

    pub fn circle(center: Point, radius: f64, segments: usize) -> Self {
        Self::new(
            ShapeKind::Circle { center, radius, segments },
            circle_vertices(center, radius, segments),
        )
    }

    pub fn star(center: Point, outer_radius: f64, inner_radius: f64, points: usize) -> Self {
        Self::new(
            ShapeKind::Star { center, outer_radius, inner_radius, points },
            star_vertices(center, outer_radius, inner_radius, points),
        )
    }

    /// Set the display color (builder style).
    pub fn with_color(mut self, color: impl Into<SerializableColor>) -> Self {
        self.style.color = color.into();
        self
    }

    /// Set the outline color override (builder style).
    pub fn with_stroke(mut self, color: impl Into<SerializableColor>) -> Self {
        self.style.stroke_color = Some(color.into());
        self
    }

    /// Enable flat fill (builder style).
    pub fn filled(mut self) -> Self {
        self.fill = Fill::Flat;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Vertices in construction order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Whether the flat fill is on.
    pub fn is_filled(&self) -> bool {
        matches!(self.fill, Fill::Flat)
    }

    /// The attached pattern fill, if any.
    pub fn pattern(&self) -> Option<&PatternFill> {
        match &self.fill {
            Fill::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Turn the flat fill on or off. Drops any pattern fill.
    pub fn set_filled(&mut self, filled: bool) {
        self.fill = if filled { Fill::Flat } else { Fill::None };
    }

    /// Flip the flat fill. Drops any pattern fill.
    pub fn toggle_filled(&mut self) {
        self.set_filled(!self.is_filled());
    }

    /// Fill with `bitmap` tiled over a `width` x `height` canvas and masked
    /// to the current outline. Replaces a flat fill.
    ///
    /// Returns false when the shape has fewer than three vertices.
    pub fn apply_pattern(&mut self, bitmap: &Arc<BitmapResource>, width: u32, height: u32) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let surface = pattern::compose(bitmap, &self.outline_points(), width, height);
        self.fill = Fill::Pattern(PatternFill {
            source: Arc::downgrade(bitmap),
            surface: Arc::new(surface),
        });
        true
    }

    /// Remove the pattern fill, leaving a flat fill untouched.
    pub fn clear_pattern(&mut self) {
        if matches!(self.fill, Fill::Pattern(_)) {
            self.fill = Fill::None;
        }
    }

    /// Vertices in outline drawing order.
    ///
    /// Arrows are built in an order that self-intersects when traced
    /// directly; their outline visits vertices as [`ARROW_OUTLINE_ORDER`].
    pub fn outline_points(&self) -> Vec<Point> {
        match self.kind {
            ShapeKind::Arrow { .. } if self.points.len() == ARROW_OUTLINE_ORDER.len() => {
                ARROW_OUTLINE_ORDER.iter().map(|&i| self.points[i]).collect()
            }
            _ => self.points.clone(),
        }
    }

    /// Vertex pairs stroked again in the default outline color on top of
    /// the outline.
    pub fn accent_edges(&self) -> &'static [(usize, usize)] {
        match self.kind {
            ShapeKind::Arrow { .. } if self.points.len() == ARROW_OUTLINE_ORDER.len() => {
                &ARROW_SHAFT_EDGES
            }
            _ => &[],
        }
    }

    /// Axis-aligned bounding box of the current vertices.
    pub fn bounds(&self) -> Rect {
        geometry::bounding_box(&self.points).unwrap_or(Rect::ZERO)
    }

    /// Approximate hit test against the inclusive bounding box.
    ///
    /// Clicks in the box corners outside the polygon itself still hit.
    pub fn hit_test(&self, point: Point) -> bool {
        !self.points.is_empty() && geometry::box_contains(self.bounds(), point)
    }

    /// Move every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform_position(0.0, dx, dy);
    }

    /// Rotate every vertex about the first vertex.
    pub fn rotate(&mut self, degrees: f64) {
        self.transform_position(degrees, 0.0, 0.0);
    }

    /// Translate by `(dx, dy)`, then rotate by `degrees` about the
    /// translated first vertex.
    pub fn transform_position(&mut self, degrees: f64, dx: f64, dy: f64) {
        let Some(&first) = self.points.first() else {
            return;
        };
        geometry::translate_points(&mut self.points, Vec2::new(dx, dy));
        if degrees != 0.0 {
            let pivot = first + Vec2::new(dx, dy);
            for p in &mut self.points {
                *p = geometry::rotate_point(*p, pivot, degrees);
            }
        }
        self.rotation = normalize_degrees(self.rotation + degrees);
    }
}
