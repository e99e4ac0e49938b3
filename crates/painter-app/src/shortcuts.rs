//! Keyboard shortcut registry and documentation.

use crate::variants::Variant;
use painter_core::Modifiers;
use painter_core::input::normalize_key;

/// An editor command a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ToggleMenu,
    NewShape,
    CycleSelection,
    DeleteSelected,
    RotateClockwise,
    RotateCounterClockwise,
    TranslateUp,
    TranslateDown,
    TranslateLeft,
    TranslateRight,
    BeginShape,
    CommitShape,
    CancelShape,
    RemoveLastPoint,
    ToggleFill,
    ApplyPattern,
    ClearPattern,
    CyclePattern,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Normalized key name, see [`normalize_key`].
    pub key: &'static str,
    pub shift: bool,
    pub command: Command,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, shift: bool, command: Command, description: &'static str) -> Self {
        Self {
            key,
            shift,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Shift+R").
    pub fn format(&self) -> String {
        let key = match self.key {
            "ArrowUp" => "Up".to_string(),
            "ArrowDown" => "Down".to_string(),
            "ArrowLeft" => "Left".to_string(),
            "ArrowRight" => "Right".to_string(),
            key => key.to_uppercase(),
        };
        if self.shift { format!("Shift+{key}") } else { key }
    }
}

const MENU: Shortcut = Shortcut::new("m", false, Command::ToggleMenu, "Show/hide menu");

const TRANSFORM: [Shortcut; 9] = [
    Shortcut::new("n", false, Command::NewShape, "Create new shape"),
    Shortcut::new("Tab", false, Command::CycleSelection, "Select next shape"),
    Shortcut::new("Delete", false, Command::DeleteSelected, "Delete selected shape"),
    Shortcut::new("r", false, Command::RotateClockwise, "Rotate clockwise"),
    Shortcut::new("r", true, Command::RotateCounterClockwise, "Rotate counterclockwise"),
    Shortcut::new("ArrowUp", false, Command::TranslateUp, "Move up"),
    Shortcut::new("ArrowDown", false, Command::TranslateDown, "Move down"),
    Shortcut::new("ArrowLeft", false, Command::TranslateLeft, "Move left"),
    Shortcut::new("ArrowRight", false, Command::TranslateRight, "Move right"),
];

const PATTERN: [Shortcut; 9] = [
    Shortcut::new("c", false, Command::BeginShape, "Start a free-form shape"),
    Shortcut::new("Enter", false, Command::CommitShape, "Finish the free-form shape"),
    Shortcut::new("Escape", false, Command::CancelShape, "Cancel the free-form shape"),
    Shortcut::new("f", false, Command::ApplyPattern, "Fill selected shape with pattern"),
    Shortcut::new("b", false, Command::ToggleFill, "Toggle solid fill"),
    Shortcut::new("x", false, Command::ClearPattern, "Clear pattern fill"),
    Shortcut::new("Tab", false, Command::CycleSelection, "Select next shape"),
    Shortcut::new("Delete", false, Command::DeleteSelected, "Delete selected shape"),
    Shortcut::new("t", false, Command::CyclePattern, "Next pattern"),
];

/// Registry of keyboard shortcuts per variant.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Shortcuts active in `variant`.
    pub fn for_variant(variant: Variant) -> Vec<Shortcut> {
        let mut shortcuts = vec![MENU];
        match variant {
            Variant::Stamp => {}
            Variant::ArrowEditor | Variant::CrossEditor => shortcuts.extend(TRANSFORM),
            Variant::PatternEditor => shortcuts.extend(PATTERN),
        }
        shortcuts
    }

    /// Resolve a key press.
    ///
    /// An exact shift match wins; otherwise a shifted press falls back to
    /// the unshifted binding.
    pub fn lookup(variant: Variant, key: &str, modifiers: Modifiers) -> Option<Command> {
        let (key, modifiers) = normalize_key(key, modifiers);
        let shortcuts = Self::for_variant(variant);
        let exact = shortcuts
            .iter()
            .find(|s| s.key == key && s.shift == modifiers.shift);
        let fallback = || {
            shortcuts
                .iter()
                .find(|s| s.key == key && !s.shift && modifiers.shift)
        };
        exact.or_else(fallback).map(|s| s.command)
    }

    /// Menu text: one line per shortcut followed by the pointer actions.
    pub fn menu_lines(variant: Variant) -> Vec<String> {
        let mut lines: Vec<String> = Self::for_variant(variant)
            .iter()
            .map(|s| format!("{:8} {}", s.format(), s.description))
            .collect();
        lines.push(String::new());
        match variant {
            Variant::Stamp => lines.push(format!("{:8} Stamp shape", "LMB")),
            Variant::ArrowEditor | Variant::CrossEditor => {
                lines.push(format!("{:8} Select shape", "LMB"));
            }
            Variant::PatternEditor => {
                lines.push(format!("{:8} Add point / select shape", "LMB"));
                lines.push(format!("{:8} Remove last point", "RMB"));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift() -> Modifiers {
        Modifiers::from_bits(Modifiers::SHIFT)
    }

    #[test]
    fn test_rotate_direction_follows_shift() {
        let none = Modifiers::default();
        assert_eq!(
            ShortcutRegistry::lookup(Variant::ArrowEditor, "r", none),
            Some(Command::RotateClockwise)
        );
        assert_eq!(
            ShortcutRegistry::lookup(Variant::ArrowEditor, "r", shift()),
            Some(Command::RotateCounterClockwise)
        );
        assert_eq!(
            ShortcutRegistry::lookup(Variant::CrossEditor, "R", none),
            Some(Command::RotateCounterClockwise)
        );
    }

    #[test]
    fn test_shift_falls_back_to_plain_binding() {
        assert_eq!(
            ShortcutRegistry::lookup(Variant::ArrowEditor, "Tab", shift()),
            Some(Command::CycleSelection)
        );
    }

    #[test]
    fn test_bindings_are_per_variant() {
        let none = Modifiers::default();
        assert_eq!(ShortcutRegistry::lookup(Variant::Stamp, "n", none), None);
        assert_eq!(ShortcutRegistry::lookup(Variant::Stamp, "m", none), Some(Command::ToggleMenu));
        assert_eq!(ShortcutRegistry::lookup(Variant::ArrowEditor, "f", none), None);
        assert_eq!(
            ShortcutRegistry::lookup(Variant::PatternEditor, "enter", none),
            Some(Command::CommitShape)
        );
        assert_eq!(
            ShortcutRegistry::lookup(Variant::PatternEditor, "Esc", none),
            Some(Command::CancelShape)
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(TRANSFORM[4].format(), "Shift+R");
        assert_eq!(TRANSFORM[5].format(), "Up");
        assert_eq!(MENU.format(), "M");
    }

    #[test]
    fn test_menu_lists_every_shortcut() {
        let lines = ShortcutRegistry::menu_lines(Variant::PatternEditor);
        assert_eq!(lines.len(), 1 + PATTERN.len() + 1 + 2);
        assert!(lines[0].starts_with('M'));
    }
}
