//! Software renderer drawing into a tiny-skia pixmap.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use image::RgbaImage;
use painter_core::raster;
use painter_core::scene::DrawCommand;
use std::path::Path;
use tiny_skia::Pixmap;

/// CPU renderer used for headless output and tests.
#[derive(Debug, Default)]
pub struct RasterRenderer {
    frame: Option<RgbaImage>,
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered frame.
    pub fn frame(&self) -> Option<&RgbaImage> {
        self.frame.as_ref()
    }

    /// Encode the last frame as PNG.
    pub fn save_png(&self, path: &Path) -> RenderResult<()> {
        let frame = self.frame.as_ref().ok_or(RendererError::NoFrame)?;
        frame
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| RendererError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Wrote {}x{} frame to {}", frame.width(), frame.height(), path.display());
        Ok(())
    }

    fn draw(pixmap: &mut Pixmap, command: &DrawCommand) {
        match command {
            DrawCommand::FillPolygon { points, color } => {
                raster::fill_polygon(pixmap, points, *color);
            }
            DrawCommand::StrokePolygon { points, color, width } => {
                raster::stroke_polyline(pixmap, points, true, *width, *color);
            }
            DrawCommand::Line { from, to, color, width } => {
                raster::stroke_polyline(pixmap, &[*from, *to], false, *width, *color);
            }
            DrawCommand::FillCircle { center, radius, color } => {
                raster::fill_circle(pixmap, *center, *radius, *color);
            }
            DrawCommand::Image { image, origin } => {
                raster::draw_image(pixmap, image, origin.x.round() as i32, origin.y.round() as i32, None);
            }
        }
    }
}

impl Renderer for RasterRenderer {
    fn render(&mut self, ctx: &RenderContext, commands: &[DrawCommand]) -> RenderResult<()> {
        let size = ctx.viewport_size;
        let invalid = RendererError::InvalidSize {
            width: size.width,
            height: size.height,
        };
        if !(size.width >= 1.0 && size.height >= 1.0) {
            return Err(invalid);
        }
        let mut pixmap = Pixmap::new(size.width as u32, size.height as u32).ok_or(invalid)?;
        pixmap.fill(raster::skia_color(self.background_color(ctx)));
        for command in commands {
            Self::draw(&mut pixmap, command);
        }
        log::debug!("Rendered {} commands", commands.len());
        self.frame = Some(raster::to_image(&pixmap));
        Ok(())
    }
}
