//! Input events delivered to an editor.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: u8 = 1;
    pub const CTRL: u8 = 2;
    pub const ALT: u8 = 4;
    pub const META: u8 = 8;

    /// Decode a modifier bit mask.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            shift: bits & Self::SHIFT != 0,
            ctrl: bits & Self::CTRL != 0,
            alt: bits & Self::ALT != 0,
            meta: bits & Self::META != 0,
        }
    }
}

/// A discrete user input.
///
/// Keys use DOM-style names: single characters such as `"n"` or `"R"`,
/// and named keys such as `"Tab"`, `"Delete"`, `"Enter"`, `"Escape"` and
/// `"ArrowLeft"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        position: Point,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Left click at `(x, y)`.
    pub fn click(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    /// Right click at `(x, y)`.
    pub fn right_click(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Right,
            modifiers: Modifiers::default(),
        }
    }

    /// Key press without modifiers.
    pub fn key(key: impl Into<String>) -> Self {
        InputEvent::KeyDown {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// Key press with shift held.
    pub fn shift_key(key: impl Into<String>) -> Self {
        InputEvent::KeyDown {
            key: key.into(),
            modifiers: Modifiers::from_bits(Modifiers::SHIFT),
        }
    }
}

/// Canonical form of a key name for lookups.
///
/// Single characters are lowercased, an uppercase letter implying shift.
/// Named keys keep their spelling, with common aliases folded.
pub fn normalize_key(key: &str, modifiers: Modifiers) -> (String, Modifiers) {
    let mut modifiers = modifiers;
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_uppercase() {
            modifiers.shift = true;
        }
        return (c.to_lowercase().collect(), modifiers);
    }
    let named = match key.to_ascii_lowercase().as_str() {
        "esc" | "escape" => "Escape",
        "return" | "enter" => "Enter",
        "del" | "delete" => "Delete",
        "backspace" => "Backspace",
        "tab" => "Tab",
        "space" => " ",
        "left" | "arrowleft" => "ArrowLeft",
        "right" | "arrowright" => "ArrowRight",
        "up" | "arrowup" => "ArrowUp",
        "down" | "arrowdown" => "ArrowDown",
        _ => key,
    };
    (named.to_string(), modifiers)
}
