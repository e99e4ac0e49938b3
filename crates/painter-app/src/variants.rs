//! The four editor variants and what each one starts with.

use crate::config::AppConfig;
use kurbo::Point;
use painter_core::scene::{Marker, PreviewStyle, SceneStyle};
use painter_core::shapes::{SerializableColor, Shape};
use painter_core::{Canvas, SelectionPolicy};
use peniko::Color;

/// Stamp outer square side; also the circle diameter.
pub const STAMP_SIZE: f64 = 150.0;
/// Segments of the stamp circle.
pub const STAMP_CIRCLE_SEGMENTS: usize = 64;
pub const ARROW_SIZE: f64 = 80.0;
pub const CROSS_SIZE: f64 = 200.0;
/// Color of committed free-form shapes.
pub const FREEFORM_COLOR: SerializableColor = SerializableColor::rgb(150, 150, 255);

const STAMP_BLUE: SerializableColor = SerializableColor::rgb(0, 0, 255);
const ARROW_COLOR: SerializableColor = SerializableColor::rgb(50, 150, 255);
const MARKER_COLOR: Color = Color::from_rgb8(0, 0, 255);

/// Which editor a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Variant {
    /// Click to stamp a square-circle-square composite.
    Stamp,
    /// Arrows moved and rotated from the keyboard.
    #[value(name = "arrow")]
    ArrowEditor,
    /// Plus-sign outlines moved and rotated from the keyboard.
    #[value(name = "cross")]
    CrossEditor,
    /// Free-form shapes with flat and bitmap pattern fills.
    #[value(name = "pattern")]
    PatternEditor,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Stamp => "stamp",
            Variant::ArrowEditor => "arrow",
            Variant::CrossEditor => "cross",
            Variant::PatternEditor => "pattern",
        }
    }

    pub fn selection_policy(self) -> SelectionPolicy {
        match self {
            Variant::CrossEditor => SelectionPolicy::ClearOnMiss,
            _ => SelectionPolicy::KeepOnMiss,
        }
    }

    /// Whether a primary click selects shapes.
    pub fn selects_on_click(self) -> bool {
        !matches!(self, Variant::Stamp)
    }

    /// Whether the variant works with the pattern library.
    pub fn uses_patterns(self) -> bool {
        matches!(self, Variant::PatternEditor)
    }

    /// Whether the status line reports the rotation heading.
    pub fn shows_heading(self) -> bool {
        matches!(self, Variant::ArrowEditor | Variant::CrossEditor)
    }

    pub fn scene_style(self, config: &AppConfig) -> SceneStyle {
        let outline = config.outline_color.into();
        let selection = config.selection_color.into();
        match self {
            Variant::Stamp => SceneStyle {
                outline,
                ..SceneStyle::default()
            },
            Variant::ArrowEditor | Variant::CrossEditor => SceneStyle {
                outline,
                selected_outline: Some(selection),
                ..SceneStyle::default()
            },
            Variant::PatternEditor => SceneStyle {
                outline,
                selected_outline: None,
                selection_box: Some(selection),
                vertex_markers: Some(Marker {
                    color: MARKER_COLOR,
                    radius: 3.0,
                }),
            },
        }
    }

    pub fn preview_style(self) -> PreviewStyle {
        PreviewStyle::default()
    }

    /// Fill a fresh canvas with the variant's starting shapes.
    pub fn populate(self, canvas: &mut Canvas, config: &AppConfig) {
        match self {
            Variant::Stamp => {}
            Variant::ArrowEditor | Variant::CrossEditor => {
                if let Some(shape) = self.new_shape((config.width, config.height)) {
                    let id = canvas.add_shape(shape);
                    canvas.select(id);
                }
            }
            Variant::PatternEditor => {
                let rect = canvas.add_shape(
                    Shape::rectangle(Point::new(100.0, 100.0), 200.0, 150.0)
                        .with_color(SerializableColor::rgb(200, 200, 255)),
                );
                canvas.add_shape(
                    Shape::circle(Point::new(400.0, 300.0), 80.0, 32)
                        .with_color(SerializableColor::rgb(255, 200, 200)),
                );
                canvas.add_shape(
                    Shape::star(Point::new(600.0, 200.0), 70.0, 30.0, 7)
                        .with_color(SerializableColor::rgb(200, 255, 200)),
                );
                canvas.select(rect);
            }
        }
    }

    /// Shape made by the create-new-shape command, at the center of a
    /// `width` x `height` canvas.
    pub fn new_shape(self, (width, height): (u32, u32)) -> Option<Shape> {
        let center = Point::new((width / 2) as f64, (height / 2) as f64);
        match self {
            Variant::ArrowEditor => Some(Shape::arrow(center, ARROW_SIZE).with_color(ARROW_COLOR).filled()),
            Variant::CrossEditor => Some(Shape::cross(center, CROSS_SIZE)),
            Variant::Stamp | Variant::PatternEditor => None,
        }
    }
}

/// The stamp composite centered at `at`, back to front.
pub fn stamp_shapes(at: Point) -> Vec<Shape> {
    let inner = (STAMP_SIZE / 1.414).floor();
    let square = |side: f64| {
        Shape::rectangle(Point::new(at.x - side / 2.0, at.y - side / 2.0), side, side)
            .with_color(STAMP_BLUE)
            .with_stroke(STAMP_BLUE)
            .filled()
    };
    vec![
        square(STAMP_SIZE),
        Shape::circle(at, STAMP_SIZE / 2.0, STAMP_CIRCLE_SEGMENTS)
            .with_color(SerializableColor::white())
            .with_stroke(SerializableColor::white())
            .filled(),
        square(inner),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use painter_core::ShapeKind;

    #[test]
    fn test_variant_names_parse() {
        for variant in Variant::value_variants() {
            assert_eq!(Variant::from_str(variant.name(), true).unwrap(), *variant);
        }
    }

    #[test]
    fn test_arrow_editor_starts_with_selected_arrow() {
        let config = AppConfig::default();
        let mut canvas = Canvas::new(Variant::ArrowEditor.selection_policy());
        Variant::ArrowEditor.populate(&mut canvas, &config);
        assert_eq!(canvas.len(), 1);
        let arrow = canvas.selected().unwrap();
        assert!(matches!(arrow.kind(), ShapeKind::Arrow { size, .. } if *size == ARROW_SIZE));
        assert!(arrow.is_filled());
        assert_eq!(arrow.rotation(), 270.0);
    }

    #[test]
    fn test_pattern_editor_defaults() {
        let config = AppConfig::default();
        let mut canvas = Canvas::default();
        Variant::PatternEditor.populate(&mut canvas, &config);
        let counts: Vec<_> = canvas.shapes().iter().map(|s| s.points().len()).collect();
        assert_eq!(counts, vec![4, 32, 14]);
        assert_eq!(canvas.selected_id(), Some(canvas.shapes()[0].id()));
    }

    #[test]
    fn test_cross_editor_clears_on_miss() {
        assert_eq!(Variant::CrossEditor.selection_policy(), SelectionPolicy::ClearOnMiss);
        assert_eq!(Variant::ArrowEditor.selection_policy(), SelectionPolicy::KeepOnMiss);
        let shape = Variant::CrossEditor.new_shape((1000, 700)).unwrap();
        assert_eq!(shape.bounds().center(), Point::new(500.0, 350.0));
        assert_eq!(shape.points().len(), 12);
        assert!(!shape.is_filled());
    }

    #[test]
    fn test_stamp_composite() {
        let shapes = stamp_shapes(Point::new(200.0, 200.0));
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].bounds().width(), 150.0);
        assert_eq!(shapes[2].bounds().width(), 106.0);
        assert_eq!(shapes[1].style.color, SerializableColor::white());
        assert!(shapes.iter().all(|s| s.is_filled()));
    }
}
