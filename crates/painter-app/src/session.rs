//! The editor session and its frame loop.

use crate::config::AppConfig;
use crate::event_handler::{EditorState, EventHandler};
use crate::shortcuts::ShortcutRegistry;
use crate::variants::Variant;
use kurbo::Point;
use painter_core::scene::{self, DrawSink};
use painter_core::{Canvas, InputEvent, PatternLibrary};
use peniko::Color;
use std::collections::VecDeque;

/// Distance of the pattern strip's left edge from the right canvas edge.
const PATTERN_STRIP_INSET: f64 = 150.0;
/// Top of the first pattern thumbnail.
const PATTERN_STRIP_TOP: f64 = 35.0;

/// Source of pending input events, drained once per frame.
pub trait EventSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

impl EventSource for VecDeque<InputEvent> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pop_front()
    }
}

/// Coarse direction label for a rotation angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Heading {
    /// Exact quarter turns map to the axis labels, anything between to
    /// the diagonal of that quadrant.
    pub fn from_degrees(degrees: f64) -> Self {
        let angle = painter_core::geometry::normalize_degrees(degrees);
        match angle {
            a if a == 0.0 => Heading::Right,
            a if a == 90.0 => Heading::Up,
            a if a == 180.0 => Heading::Left,
            a if a == 270.0 => Heading::Down,
            a if a < 90.0 => Heading::UpRight,
            a if a < 180.0 => Heading::UpLeft,
            a if a < 270.0 => Heading::DownLeft,
            _ => Heading::DownRight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Heading::Right => "right",
            Heading::UpRight => "up-right",
            Heading::Up => "up",
            Heading::UpLeft => "up-left",
            Heading::Left => "left",
            Heading::DownLeft => "down-left",
            Heading::Down => "down",
            Heading::DownRight => "down-right",
        }
    }
}

/// One running editor: configuration, input handling and model state.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    handler: EventHandler,
    state: EditorState,
}

impl Session {
    /// Start a variant with its initial shapes. The pattern editor loads
    /// its library from the configured directory.
    pub fn new(variant: Variant, config: AppConfig) -> Self {
        let patterns = if variant.uses_patterns() {
            PatternLibrary::load_dir(&config.pattern_dir)
        } else {
            PatternLibrary::new()
        };
        Self::with_patterns(variant, config, patterns)
    }

    /// Start a variant with an explicit pattern library.
    pub fn with_patterns(variant: Variant, config: AppConfig, patterns: PatternLibrary) -> Self {
        let mut canvas = Canvas::new(variant.selection_policy());
        variant.populate(&mut canvas, &config);
        log::info!("Starting {} editor with {} shapes", variant.name(), canvas.len());
        Self {
            handler: EventHandler::new(variant, &config),
            state: EditorState {
                canvas,
                patterns,
                show_menu: true,
                ..EditorState::default()
            },
            config,
        }
    }

    pub fn variant(&self) -> Variant {
        self.handler.variant()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.state.canvas
    }

    /// Apply a single event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.handler.handle_event(&mut self.state, event);
    }

    /// Drain every pending event, then emit the frame's draw commands.
    /// Returns the number of events processed.
    pub fn frame(&mut self, events: &mut impl EventSource, sink: &mut impl DrawSink) -> usize {
        let mut handled = 0;
        while let Some(event) = events.poll_event() {
            self.handle_event(&event);
            handled += 1;
        }
        self.draw(sink);
        handled
    }

    /// Emit the draw commands for the current state.
    pub fn draw(&self, sink: &mut impl DrawSink) {
        let variant = self.variant();
        scene::draw_canvas(sink, &self.state.canvas, &variant.scene_style(&self.config));
        if self.state.construction.is_active() {
            scene::draw_construction(sink, self.state.construction.points(), &variant.preview_style());
        }
        if variant.uses_patterns() {
            let (width, _) = self.config.size();
            scene::draw_pattern_strip(
                sink,
                &self.state.patterns,
                Point::new(width - PATTERN_STRIP_INSET, PATTERN_STRIP_TOP),
                Color::from(self.config.selection_color),
            );
        }
    }

    /// Menu text, empty while the menu is hidden.
    pub fn menu_lines(&self) -> Vec<String> {
        if !self.state.show_menu {
            return Vec::new();
        }
        let mut lines = ShortcutRegistry::menu_lines(self.variant());
        if self.variant().uses_patterns() {
            lines.push(String::new());
            lines.push(format!("Patterns loaded: {}", self.state.patterns.len()));
            lines.push(format!("Shapes: {}", self.state.canvas.len()));
            let mode = if self.state.construction.is_active() {
                "Creating shape"
            } else {
                "View"
            };
            lines.push(format!("Mode: {mode}"));
        }
        lines
    }

    /// One-line summary of the editor state.
    pub fn status_line(&self) -> String {
        let canvas = &self.state.canvas;
        let mut status = format!("Shapes: {}", canvas.len());
        if let Some(shape) = canvas.selected() {
            if self.variant().shows_heading() {
                let angle = shape.rotation();
                status.push_str(&format!(
                    " | Selected | Angle: {:.1}° ({})",
                    angle,
                    Heading::from_degrees(angle).label()
                ));
            } else if self.variant().uses_patterns() {
                status.push_str(&format!(" | Selected shape with {} points", shape.points().len()));
                if shape.is_filled() {
                    status.push_str(" | Solid fill");
                }
                if shape.pattern().is_some() {
                    status.push_str(" | Pattern fill");
                }
            }
        }
        if self.state.construction.is_active() {
            status.push_str(&format!(" | Creating: {} points", self.state.construction.points().len()));
        }
        if let Some(notice) = &self.state.notice {
            status.push_str(&format!(" | {notice}"));
        }
        status
    }
}
