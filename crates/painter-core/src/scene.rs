//! Draw command production.
//!
//! The canvas is turned into an ordered list of [`DrawCommand`]s each
//! frame; a renderer consumes the list without knowing about shapes.

use crate::bitmap::{PatternLibrary, THUMBNAIL_SIZE};
use crate::canvas::Canvas;
use crate::shapes::{Fill, Shape};
use image::RgbaImage;
use kurbo::{Point, Rect};
use peniko::Color;
use std::sync::Arc;

/// Width of selection boxes, preview outlines and thumbnail frames.
pub const OVERLAY_LINE_WIDTH: f64 = 2.0;

/// Spacing between pattern thumbnails in the library strip.
pub const THUMBNAIL_SPACING: f64 = 60.0;

/// A single drawing primitive, in painter's order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid closed polygon.
    FillPolygon { points: Vec<Point>, color: Color },
    /// Closed polygon outline.
    StrokePolygon {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    /// Alpha-composited image with its top-left corner at `origin`.
    Image { image: Arc<RgbaImage>, origin: Point },
}

/// Receiver for draw commands.
pub trait DrawSink {
    fn push(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn push(&mut self, command: DrawCommand) {
        Vec::push(self, command);
    }
}

/// Dot drawn at a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub color: Color,
    pub radius: f64,
}

/// How shapes and their selection are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    /// Outline color of unselected shapes without an override.
    pub outline: Color,
    /// Outline color of the selected shape (None = draw it like the rest).
    pub selected_outline: Option<Color>,
    /// Bounding box drawn around the selected shape.
    pub selection_box: Option<Color>,
    pub vertex_markers: Option<Marker>,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            outline: Color::BLACK,
            selected_outline: None,
            selection_box: None,
            vertex_markers: None,
        }
    }
}

/// How a free-form shape under construction is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewStyle {
    /// Line color for two points and outline color for three or more.
    pub outline: Color,
    pub fill: Color,
    pub marker: Marker,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            outline: Color::from_rgb8(0, 255, 0),
            fill: Color::from_rgb8(200, 200, 200),
            marker: Marker {
                color: Color::from_rgb8(0, 0, 255),
                radius: 4.0,
            },
        }
    }
}

/// Emit the commands for one shape.
pub fn draw_shape(sink: &mut impl DrawSink, shape: &Shape, selected: bool, style: &SceneStyle) {
    let outline = shape.outline_points();
    if outline.len() < 2 {
        return;
    }

    match shape.fill() {
        Fill::Pattern(pattern) => sink.push(DrawCommand::Image {
            image: pattern.surface().clone(),
            origin: Point::ZERO,
        }),
        Fill::Flat if outline.len() >= 3 => sink.push(DrawCommand::FillPolygon {
            points: outline.clone(),
            color: shape.style.color(),
        }),
        _ => {}
    }

    let outline_color = match style.selected_outline {
        Some(color) if selected => color,
        _ => shape.style.stroke().unwrap_or(style.outline),
    };
    let width = shape.style.stroke_width;
    sink.push(DrawCommand::StrokePolygon {
        points: outline,
        color: outline_color,
        width,
    });

    let points = shape.points();
    for &(a, b) in shape.accent_edges() {
        if let (Some(&from), Some(&to)) = (points.get(a), points.get(b)) {
            sink.push(DrawCommand::Line {
                from,
                to,
                color: style.outline,
                width,
            });
        }
    }

    if let Some(marker) = style.vertex_markers {
        for &center in points {
            sink.push(DrawCommand::FillCircle {
                center,
                radius: marker.radius,
                color: marker.color,
            });
        }
    }
}

/// Emit every shape on the canvas, back to front, with the selection
/// highlight.
pub fn draw_canvas(sink: &mut impl DrawSink, canvas: &Canvas, style: &SceneStyle) {
    for shape in canvas.shapes() {
        let selected = canvas.is_selected(shape.id());
        draw_shape(sink, shape, selected, style);
        if let (true, Some(color)) = (selected, style.selection_box) {
            sink.push(DrawCommand::StrokePolygon {
                points: rect_points(shape.bounds()),
                color,
                width: OVERLAY_LINE_WIDTH,
            });
        }
    }
}

/// Emit the preview of a free-form shape under construction.
///
/// Nothing is drawn for fewer than two points.
pub fn draw_construction(sink: &mut impl DrawSink, points: &[Point], style: &PreviewStyle) {
    match points {
        [] | [_] => return,
        [from, to] => sink.push(DrawCommand::Line {
            from: *from,
            to: *to,
            color: style.outline,
            width: OVERLAY_LINE_WIDTH,
        }),
        _ => {
            sink.push(DrawCommand::FillPolygon {
                points: points.to_vec(),
                color: style.fill,
            });
            sink.push(DrawCommand::StrokePolygon {
                points: points.to_vec(),
                color: style.outline,
                width: OVERLAY_LINE_WIDTH,
            });
        }
    }
    for &center in points {
        sink.push(DrawCommand::FillCircle {
            center,
            radius: style.marker.radius,
            color: style.marker.color,
        });
    }
}

/// Emit the library thumbnails in a column starting at `origin`, the
/// active one framed in `frame`.
pub fn draw_pattern_strip(sink: &mut impl DrawSink, library: &PatternLibrary, origin: Point, frame: Color) {
    let size = THUMBNAIL_SIZE as f64;
    for (i, bitmap) in library.iter().enumerate() {
        let corner = Point::new(origin.x, origin.y + i as f64 * THUMBNAIL_SPACING);
        if library.active_index() == Some(i) {
            let border = Rect::new(corner.x - 2.0, corner.y - 2.0, corner.x + size + 2.0, corner.y + size + 2.0);
            sink.push(DrawCommand::StrokePolygon {
                points: rect_points(border),
                color: frame,
                width: OVERLAY_LINE_WIDTH,
            });
        }
        sink.push(DrawCommand::Image {
            image: bitmap.preview(),
            origin: corner,
        });
    }
}

fn rect_points(rect: Rect) -> Vec<Point> {
    vec![
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::BitmapResource;
    use crate::shapes::ARROW_SHAFT_EDGES;

    const RED: Color = Color::from_rgb8(255, 0, 0);

    fn square() -> Shape {
        Shape::rectangle(Point::new(100.0, 100.0), 200.0, 150.0)
    }

    fn kinds(commands: &[DrawCommand]) -> Vec<&'static str> {
        commands
            .iter()
            .map(|c| match c {
                DrawCommand::FillPolygon { .. } => "fill",
                DrawCommand::StrokePolygon { .. } => "stroke",
                DrawCommand::Line { .. } => "line",
                DrawCommand::FillCircle { .. } => "circle",
                DrawCommand::Image { .. } => "image",
            })
            .collect()
    }

    #[test]
    fn test_unfilled_shape_is_outline_only() {
        let mut commands = Vec::new();
        draw_shape(&mut commands, &square(), false, &SceneStyle::default());
        assert_eq!(kinds(&commands), vec!["stroke"]);
    }

    #[test]
    fn test_flat_fill_precedes_outline() {
        let mut commands = Vec::new();
        let shape = square().with_color(Color::from_rgb8(200, 200, 255)).filled();
        draw_shape(&mut commands, &shape, false, &SceneStyle::default());
        assert_eq!(kinds(&commands), vec!["fill", "stroke"]);
        match &commands[0] {
            DrawCommand::FillPolygon { color, .. } => assert_eq!(*color, Color::from_rgb8(200, 200, 255)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_two_point_shape_is_line_only() {
        let shape = Shape::polygon(vec![Point::new(10.0, 10.0), Point::new(60.0, 10.0)])
            .with_color(RED)
            .filled();
        let mut commands = Vec::new();
        draw_shape(&mut commands, &shape, false, &SceneStyle::default());
        assert_eq!(kinds(&commands), vec!["stroke"]);
        match &commands[0] {
            DrawCommand::StrokePolygon { points, .. } => assert_eq!(points.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pattern_replaces_flat_fill() {
        let bitmap = Arc::new(BitmapResource::from_image(
            "solid",
            RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255])),
        ));
        let mut shape = square().filled();
        assert!(shape.apply_pattern(&bitmap, 400, 300));
        let mut commands = Vec::new();
        draw_shape(&mut commands, &shape, false, &SceneStyle::default());
        assert_eq!(kinds(&commands), vec!["image", "stroke"]);
    }

    #[test]
    fn test_selected_outline_color() {
        let style = SceneStyle {
            selected_outline: Some(RED),
            ..SceneStyle::default()
        };
        let mut commands = Vec::new();
        draw_shape(&mut commands, &square(), true, &style);
        draw_shape(&mut commands, &square(), false, &style);
        let colors: Vec<_> = commands
            .iter()
            .map(|c| match c {
                DrawCommand::StrokePolygon { color, .. } => *color,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(colors, vec![RED, Color::BLACK]);
    }

    #[test]
    fn test_arrow_restrokes_shaft_in_default_color() {
        let style = SceneStyle {
            selected_outline: Some(RED),
            ..SceneStyle::default()
        };
        let mut commands = Vec::new();
        draw_shape(&mut commands, &Shape::arrow(Point::new(500.0, 350.0), 80.0), true, &style);
        assert_eq!(commands.len(), 1 + ARROW_SHAFT_EDGES.len());
        assert!(commands[1..].iter().all(|c| matches!(
            c,
            DrawCommand::Line { color, .. } if *color == Color::BLACK
        )));
    }

    #[test]
    fn test_canvas_selection_box_and_markers() {
        let mut canvas = Canvas::default();
        let id = canvas.add_shape(square());
        canvas.add_shape(Shape::cross(Point::new(500.0, 350.0), 100.0));
        canvas.select(id);
        let style = SceneStyle {
            selection_box: Some(RED),
            vertex_markers: Some(Marker {
                color: Color::from_rgb8(0, 0, 255),
                radius: 3.0,
            }),
            ..SceneStyle::default()
        };
        let mut commands = Vec::new();
        draw_canvas(&mut commands, &canvas, &style);
        // rectangle: outline, 4 markers, box; cross: outline, 12 markers
        assert_eq!(commands.len(), 1 + 4 + 1 + 1 + 12);
        match &commands[5] {
            DrawCommand::StrokePolygon { points, color, .. } => {
                assert_eq!(*color, RED);
                assert_eq!(points[2], Point::new(300.0, 250.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_construction_preview() {
        let style = PreviewStyle::default();
        let mut commands = Vec::new();
        draw_construction(&mut commands, &[Point::new(1.0, 1.0)], &style);
        assert!(commands.is_empty());

        draw_construction(&mut commands, &[Point::new(1.0, 1.0), Point::new(5.0, 5.0)], &style);
        assert_eq!(kinds(&commands), vec!["line", "circle", "circle"]);

        commands.clear();
        let triangle = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        draw_construction(&mut commands, &triangle, &style);
        assert_eq!(kinds(&commands), vec!["fill", "stroke", "circle", "circle", "circle"]);
    }

    #[test]
    fn test_pattern_strip_frames_active() {
        let mut library = PatternLibrary::procedural();
        library.cycle();
        let mut commands = Vec::new();
        draw_pattern_strip(&mut commands, &library, Point::new(850.0, 35.0), RED);
        assert_eq!(kinds(&commands), vec!["image", "stroke", "image", "image"]);
        match &commands[2] {
            DrawCommand::Image { origin, image } => {
                assert_eq!(*origin, Point::new(850.0, 95.0));
                assert_eq!(image.dimensions(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
