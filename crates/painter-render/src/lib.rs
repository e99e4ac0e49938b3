//! Painter Render Library
//!
//! Renderer abstraction and implementations for Painter.
//! The bundled implementation rasterizes on the CPU into an RGBA buffer.

mod raster_impl;
mod renderer;

pub use raster_impl::RasterRenderer;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
