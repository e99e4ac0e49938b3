//! Event handling: input events to editor commands to model changes.

use crate::config::AppConfig;
use crate::shortcuts::{Command, ShortcutRegistry};
use crate::variants::{FREEFORM_COLOR, Variant, stamp_shapes};
use kurbo::Point;
use painter_core::{Canvas, Construction, ConstructionError, InputEvent, MouseButton, PatternLibrary};

/// Notice shown when a pattern command finds no loaded bitmap.
pub const NO_PATTERN: &str = "No pattern available";

/// Everything an editor mutates in response to input.
#[derive(Debug, Default)]
pub struct EditorState {
    pub canvas: Canvas,
    pub construction: Construction,
    pub patterns: PatternLibrary,
    pub show_menu: bool,
    /// Last rejected action, cleared by the next successful command.
    pub notice: Option<String>,
}

/// Handles high-level events and translates them to canvas operations.
#[derive(Debug, Clone)]
pub struct EventHandler {
    variant: Variant,
    rotation_step: f64,
    translation_step: f64,
    surface_size: (u32, u32),
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(variant: Variant, config: &AppConfig) -> Self {
        Self {
            variant,
            rotation_step: config.rotation_step,
            translation_step: config.translation_step,
            surface_size: (config.width, config.height),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Apply one input event. Returns the command it resolved to, if any.
    pub fn handle_event(&self, state: &mut EditorState, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerDown { position, button, .. } => {
                self.handle_pointer(state, *position, *button)
            }
            InputEvent::KeyDown { key, modifiers } => {
                let command = ShortcutRegistry::lookup(self.variant, key, *modifiers);
                match command {
                    Some(command) => self.execute(state, command),
                    None => log::debug!("Unbound key {:?}", key),
                }
                command
            }
        }
    }

    fn handle_pointer(&self, state: &mut EditorState, position: Point, button: MouseButton) -> Option<Command> {
        match button {
            MouseButton::Left if self.variant == Variant::Stamp => {
                for shape in stamp_shapes(position) {
                    state.canvas.add_shape(shape);
                }
                log::debug!("Stamped at ({}, {})", position.x, position.y);
                None
            }
            MouseButton::Left if state.construction.is_active() => {
                state.construction.push(position);
                None
            }
            MouseButton::Left if self.variant.selects_on_click() => {
                state.canvas.select_at(position);
                None
            }
            MouseButton::Right if state.construction.is_active() => {
                self.execute(state, Command::RemoveLastPoint);
                Some(Command::RemoveLastPoint)
            }
            _ => None,
        }
    }

    /// Run a command against the editor state.
    pub fn execute(&self, state: &mut EditorState, command: Command) {
        log::debug!("{:?}", command);
        state.notice = None;
        match command {
            Command::ToggleMenu => state.show_menu = !state.show_menu,
            Command::NewShape => {
                if let Some(shape) = self.variant.new_shape(self.surface_size) {
                    let id = state.canvas.add_shape(shape);
                    state.canvas.select(id);
                }
            }
            Command::CycleSelection => {
                state.canvas.cycle_selection();
            }
            Command::DeleteSelected => {
                state.canvas.delete_selected();
            }
            Command::RotateClockwise => self.with_selected(state, |s, step, _| s.rotate(step)),
            Command::RotateCounterClockwise => self.with_selected(state, |s, step, _| s.rotate(-step)),
            Command::TranslateUp => self.with_selected(state, |s, _, d| s.translate(0.0, -d)),
            Command::TranslateDown => self.with_selected(state, |s, _, d| s.translate(0.0, d)),
            Command::TranslateLeft => self.with_selected(state, |s, _, d| s.translate(-d, 0.0)),
            Command::TranslateRight => self.with_selected(state, |s, _, d| s.translate(d, 0.0)),
            Command::BeginShape => state.construction.begin(),
            Command::CommitShape => match state.construction.commit() {
                Ok(shape) => {
                    log::info!("Committed free-form shape with {} points", shape.points().len());
                    let id = state.canvas.add_shape(shape.with_color(FREEFORM_COLOR));
                    state.canvas.select(id);
                }
                Err(ConstructionError::NotActive) => {}
                Err(e) => {
                    log::debug!("Commit rejected: {}", e);
                    state.notice = Some(e.to_string());
                }
            },
            Command::CancelShape => {
                if let Some(discarded) = state.construction.cancel() {
                    log::debug!("Construction cancelled, {} points discarded", discarded);
                }
            }
            Command::RemoveLastPoint => {
                state.construction.pop();
            }
            Command::ToggleFill => {
                if let Some(shape) = state.canvas.selected_mut() {
                    shape.toggle_filled();
                }
            }
            Command::ApplyPattern => self.apply_pattern(state),
            Command::ClearPattern => {
                if let Some(shape) = state.canvas.selected_mut() {
                    shape.clear_pattern();
                }
            }
            Command::CyclePattern => {
                if state.patterns.cycle().is_none() {
                    log::warn!("{}", NO_PATTERN);
                    state.notice = Some(NO_PATTERN.to_string());
                }
            }
        }
    }

    fn with_selected(&self, state: &mut EditorState, apply: impl FnOnce(&mut painter_core::Shape, f64, f64)) {
        if let Some(shape) = state.canvas.selected_mut() {
            apply(shape, self.rotation_step, self.translation_step);
        }
    }

    fn apply_pattern(&self, state: &mut EditorState) {
        let Some(bitmap) = state.patterns.active().cloned() else {
            log::warn!("{}", NO_PATTERN);
            state.notice = Some(NO_PATTERN.to_string());
            return;
        };
        let (width, height) = self.surface_size;
        if let Some(shape) = state.canvas.selected_mut() {
            if shape.apply_pattern(&bitmap, width, height) {
                log::debug!("Applied pattern {}", bitmap.name());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use painter_core::{Fill, Shape};

    fn editor(variant: Variant) -> (EventHandler, EditorState) {
        let config = AppConfig::default();
        let mut state = EditorState {
            canvas: Canvas::new(variant.selection_policy()),
            ..EditorState::default()
        };
        variant.populate(&mut state.canvas, &config);
        (EventHandler::new(variant, &config), state)
    }

    #[test]
    fn test_stamp_click_adds_composite() {
        let (handler, mut state) = editor(Variant::Stamp);
        handler.handle_event(&mut state, &InputEvent::click(100.0, 100.0));
        handler.handle_event(&mut state, &InputEvent::click(300.0, 100.0));
        assert_eq!(state.canvas.len(), 6);
        assert_eq!(state.canvas.selected_id(), None);
    }

    #[test]
    fn test_arrow_keys_move_selected() {
        let (handler, mut state) = editor(Variant::ArrowEditor);
        let before = state.canvas.selected().unwrap().points()[0];
        handler.handle_event(&mut state, &InputEvent::key("ArrowRight"));
        handler.handle_event(&mut state, &InputEvent::key("ArrowUp"));
        let after = state.canvas.selected().unwrap().points()[0];
        assert_eq!(after, Point::new(before.x + 5.0, before.y - 5.0));
    }

    #[test]
    fn test_rotate_keys() {
        let (handler, mut state) = editor(Variant::ArrowEditor);
        assert_eq!(
            handler.handle_event(&mut state, &InputEvent::key("r")),
            Some(Command::RotateClockwise)
        );
        assert_eq!(state.canvas.selected().unwrap().rotation(), 275.0);
        handler.handle_event(&mut state, &InputEvent::shift_key("r"));
        handler.handle_event(&mut state, &InputEvent::shift_key("r"));
        assert_eq!(state.canvas.selected().unwrap().rotation(), 265.0);
    }

    #[test]
    fn test_new_cycle_delete() {
        let (handler, mut state) = editor(Variant::CrossEditor);
        let first = state.canvas.shapes()[0].id();
        handler.handle_event(&mut state, &InputEvent::key("n"));
        assert_eq!(state.canvas.len(), 2);
        let second = state.canvas.shapes()[1].id();
        assert_eq!(state.canvas.selected_id(), Some(second));

        handler.handle_event(&mut state, &InputEvent::key("Tab"));
        assert_eq!(state.canvas.selected_id(), Some(first));

        handler.handle_event(&mut state, &InputEvent::key("Delete"));
        assert_eq!(state.canvas.selected_id(), Some(second));
        handler.handle_event(&mut state, &InputEvent::key("Delete"));
        assert!(state.canvas.is_empty());
        assert_eq!(state.canvas.selected_id(), None);
    }

    #[test]
    fn test_cross_click_miss_clears() {
        let (handler, mut state) = editor(Variant::CrossEditor);
        handler.handle_event(&mut state, &InputEvent::click(5.0, 5.0));
        assert_eq!(state.canvas.selected_id(), None);
        handler.handle_event(&mut state, &InputEvent::click(500.0, 350.0));
        assert!(state.canvas.selected_id().is_some());
    }

    #[test]
    fn test_freeform_construction_flow() {
        let (handler, mut state) = editor(Variant::PatternEditor);
        handler.handle_event(&mut state, &InputEvent::key("c"));
        handler.handle_event(&mut state, &InputEvent::click(700.0, 500.0));
        handler.handle_event(&mut state, &InputEvent::click(800.0, 500.0));
        handler.handle_event(&mut state, &InputEvent::key("Enter"));
        assert!(state.construction.is_active());
        assert!(state.notice.is_some());
        assert_eq!(state.canvas.len(), 3);

        handler.handle_event(&mut state, &InputEvent::click(900.0, 600.0));
        handler.handle_event(&mut state, &InputEvent::click(950.0, 650.0));
        handler.handle_event(&mut state, &InputEvent::right_click(0.0, 0.0));
        assert_eq!(state.construction.points().len(), 3);

        handler.handle_event(&mut state, &InputEvent::key("Enter"));
        assert!(!state.construction.is_active());
        assert_eq!(state.canvas.len(), 4);
        let shape = state.canvas.selected().unwrap();
        assert_eq!(shape.points().len(), 3);
        assert_eq!(shape.style.color, FREEFORM_COLOR);
    }

    #[test]
    fn test_escape_discards_points() {
        let (handler, mut state) = editor(Variant::PatternEditor);
        handler.handle_event(&mut state, &InputEvent::key("c"));
        handler.handle_event(&mut state, &InputEvent::click(1.0, 1.0));
        handler.handle_event(&mut state, &InputEvent::key("Escape"));
        assert!(!state.construction.is_active());
        // clicks select again once construction ends
        handler.handle_event(&mut state, &InputEvent::click(400.0, 300.0));
        assert_eq!(state.canvas.selected_id(), Some(state.canvas.shapes()[1].id()));
    }

    #[test]
    fn test_fill_and_pattern_exclusive() {
        let (handler, mut state) = editor(Variant::PatternEditor);
        state.patterns = PatternLibrary::procedural();

        handler.handle_event(&mut state, &InputEvent::key("b"));
        assert!(state.canvas.selected().unwrap().is_filled());

        handler.handle_event(&mut state, &InputEvent::key("f"));
        let shape = state.canvas.selected().unwrap();
        assert!(!shape.is_filled());
        assert!(matches!(shape.fill(), Fill::Pattern(_)));

        handler.handle_event(&mut state, &InputEvent::key("b"));
        let shape = state.canvas.selected().unwrap();
        assert!(shape.is_filled());
        assert!(shape.pattern().is_none());

        handler.handle_event(&mut state, &InputEvent::key("x"));
        assert!(state.canvas.selected().unwrap().is_filled());
    }

    #[test]
    fn test_pattern_commands_without_library() {
        let (handler, mut state) = editor(Variant::PatternEditor);
        handler.handle_event(&mut state, &InputEvent::key("f"));
        assert_eq!(state.notice.as_deref(), Some(NO_PATTERN));
        assert!(state.canvas.selected().unwrap().pattern().is_none());

        handler.handle_event(&mut state, &InputEvent::key("t"));
        assert_eq!(state.notice.as_deref(), Some(NO_PATTERN));
    }

    #[test]
    fn test_pattern_survives_library_drop_as_cached_surface() {
        let (handler, mut state) = editor(Variant::PatternEditor);
        state.patterns = PatternLibrary::procedural();
        handler.handle_event(&mut state, &InputEvent::key("f"));
        state.patterns = PatternLibrary::new();
        let pattern = state.canvas.selected().unwrap().pattern().unwrap();
        assert!(pattern.source().is_none());
        assert_eq!(pattern.surface().dimensions(), (1000, 700));
    }

    #[test]
    fn test_menu_toggle() {
        let (handler, mut state) = editor(Variant::Stamp);
        assert!(!state.show_menu);
        handler.handle_event(&mut state, &InputEvent::key("m"));
        assert!(state.show_menu);
    }

    #[test]
    fn test_transform_without_selection_is_noop() {
        let (handler, mut state) = editor(Variant::ArrowEditor);
        state.canvas.clear_selection();
        let before: Vec<Shape> = state.canvas.shapes().to_vec();
        handler.handle_event(&mut state, &InputEvent::key("r"));
        assert_eq!(state.canvas.shapes()[0].points(), before[0].points());
    }
}
