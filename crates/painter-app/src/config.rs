//! Application configuration.

use crate::error::{AppError, AppResult, read_file};
use painter_core::SerializableColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Every field has a default, so a config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Degrees per rotate command.
    pub rotation_step: f64,
    /// Pixels per translate command.
    pub translation_step: f64,
    /// Directory searched for pattern bitmaps.
    pub pattern_dir: PathBuf,
    pub background_color: SerializableColor,
    /// Default shape outline.
    pub outline_color: SerializableColor,
    /// Selected outline, selection box and active pattern frame.
    pub selection_color: SerializableColor,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Painter".to_string(),
            width: 1000,
            height: 700,
            rotation_step: 5.0,
            translation_step: 5.0,
            pattern_dir: PathBuf::from("."),
            background_color: SerializableColor::white(),
            outline_color: SerializableColor::black(),
            selection_color: SerializableColor::red(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = read_file(path)?;
        let config = serde_json::from_str(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Canvas size as a floating-point pair.
    pub fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }
}
