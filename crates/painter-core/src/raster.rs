//! Rasterization onto tiny-skia pixmaps.
//!
//! Edges are not anti-aliased: a pixel is painted when its center is
//! covered, so fills and masks stay exact.

use image::{Rgba, RgbaImage};
use kurbo::Point;
use peniko::Color;
use tiny_skia::{
    ColorU8, FillRule, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

/// Convert a peniko color to a tiny-skia color.
pub fn skia_color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = false;
    paint
}

/// Path through `points`, closed when `closed` is set.
///
/// `None` for fewer than two points.
pub fn polyline_path(points: &[Point], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Paint the interior of the closed polygon through `points`.
pub fn fill_polygon(pixmap: &mut Pixmap, points: &[Point], color: Color) {
    if points.len() < 3 {
        return;
    }
    if let Some(path) = polyline_path(points, true) {
        pixmap.fill_path(&path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
    }
}

/// Stroke the segments joining consecutive `points`.
pub fn stroke_polyline(pixmap: &mut Pixmap, points: &[Point], closed: bool, width: f64, color: Color) {
    if let Some(path) = polyline_path(points, closed) {
        let stroke = Stroke {
            width: width as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
    }
}

/// Paint a solid disc.
pub fn fill_circle(pixmap: &mut Pixmap, center: Point, radius: f64, color: Color) {
    if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) {
        pixmap.fill_path(&path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
    }
}

/// Paint a ring of `width` pixels just inside `radius`.
pub fn stroke_circle(pixmap: &mut Pixmap, center: Point, radius: f64, width: f64, color: Color) {
    let mid = (radius - width / 2.0) as f32;
    if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, mid) {
        let stroke = Stroke {
            width: width as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
    }
}

/// Alpha mask covering the closed polygon through `points`.
pub fn polygon_mask(points: &[Point], width: u32, height: u32) -> Option<Mask> {
    let mut mask = Mask::new(width, height)?;
    if points.len() >= 3 {
        if let Some(path) = polyline_path(points, true) {
            mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
        }
    }
    Some(mask)
}

/// Premultiplied copy of `image`. `None` for an empty image.
pub fn to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Straight-alpha copy of `pixmap`.
pub fn to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Composite `image` onto `pixmap` with its top-left corner at `(x, y)`,
/// keeping only what `mask` covers when one is given.
pub fn draw_image(pixmap: &mut Pixmap, image: &RgbaImage, x: i32, y: i32, mask: Option<&Mask>) {
    let Some(top) = to_pixmap(image) else {
        return;
    };
    pixmap.draw_pixmap(x, y, top.as_ref(), &PixmapPaint::default(), Transform::identity(), mask);
}
