//! Pattern fills: tiled bitmaps masked to a polygon.

use crate::bitmap::BitmapResource;
use crate::raster;
use image::RgbaImage;
use kurbo::Point;
use tiny_skia::Pixmap;

/// Repeat `tile` across a transparent `width` x `height` surface at tile
/// stride, starting at the origin. Tiles that overrun the right or bottom
/// edge are clipped by the surface.
pub fn tile(tile: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut surface = RgbaImage::new(width, height);
    let (tw, th) = tile.dimensions();
    if tw == 0 || th == 0 {
        return surface;
    }
    for y in (0..height).step_by(th as usize) {
        for x in (0..width).step_by(tw as usize) {
            image::imageops::replace(&mut surface, tile, x as i64, y as i64);
        }
    }
    surface
}

/// Tile `bitmap` over the canvas and keep only the part inside the
/// polygon `outline`. Empty for a zero-sized canvas.
pub fn compose(bitmap: &BitmapResource, outline: &[Point], width: u32, height: u32) -> RgbaImage {
    let surface = bitmap.pattern_surface(width, height);
    let (Some(mut target), Some(mask)) = (
        Pixmap::new(width, height),
        raster::polygon_mask(outline, width, height),
    ) else {
        return RgbaImage::new(width, height);
    };
    raster::draw_image(&mut target, &surface, 0, 0, Some(&mask));
    raster::to_image(&target)
}
