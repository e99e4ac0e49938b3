//! Renderer trait abstraction.

use kurbo::Size;
use painter_core::scene::DrawCommand;
use peniko::Color;
use std::path::PathBuf;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("Nothing has been rendered yet")]
    NoFrame,
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Surface size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
}

impl RenderContext {
    /// Create a new render context with a white background.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport_size,
            background_color: Color::WHITE,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// A backend clears to the background and then executes the commands in
/// order, later commands painting over earlier ones.
pub trait Renderer {
    /// Render one frame.
    fn render(&mut self, ctx: &RenderContext, commands: &[DrawCommand]) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
