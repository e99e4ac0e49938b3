//! Raster resources used as fill patterns.

use crate::pattern;
use crate::raster;
use image::RgbaImage;
use image::imageops::FilterType;
use kurbo::Point;
use peniko::Color;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tiny_skia::Pixmap;

/// File names probed in the pattern directory, in library order.
pub const DEFAULT_PATTERN_FILES: [&str; 3] = ["texture.png", "pattern.png", "brush.png"];

/// Side length of the library preview thumbnails.
pub const THUMBNAIL_SIZE: u32 = 50;

/// Side length of the procedural fallback textures.
pub const PROCEDURAL_TEXTURE_SIZE: u32 = 16;

const PROCEDURAL_COLOR: Color = Color::from_rgb8(200, 0, 0);
const PROCEDURAL_LINE_WIDTH: f64 = 2.0;

/// Bitmap loading errors.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Bitmap not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Bitmap {} has no pixels", .0.display())]
    Empty(PathBuf),
}

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// A decoded raster image. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct BitmapResource {
    name: String,
    image: RgbaImage,
    preview: OnceLock<Arc<RgbaImage>>,
}

impl BitmapResource {
    /// Load and decode an image file.
    pub fn load(path: &Path) -> ResourceResult<Self> {
        if !path.exists() {
            return Err(ResourceError::NotFound(path.to_path_buf()));
        }
        let image = image::open(path)
            .map_err(|source| ResourceError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(ResourceError::Empty(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("Loaded bitmap {} ({}x{})", name, image.width(), image.height());
        Ok(Self::from_image(name, image))
    }

    /// Wrap an already decoded image.
    pub fn from_image(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
            preview: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Tile this bitmap over a transparent surface of the given size.
    pub fn pattern_surface(&self, width: u32, height: u32) -> RgbaImage {
        pattern::tile(&self.image, width, height)
    }

    /// Scaled copy for previews.
    pub fn thumbnail(&self, width: u32, height: u32) -> RgbaImage {
        image::imageops::resize(&self.image, width, height, FilterType::Nearest)
    }

    /// [`THUMBNAIL_SIZE`] square thumbnail, computed on first use.
    pub fn preview(&self) -> Arc<RgbaImage> {
        self.preview
            .get_or_init(|| Arc::new(self.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE)))
            .clone()
    }
}

/// Draw a procedural texture on a transparent tile.
fn procedural_texture(name: &str, paint: impl FnOnce(&mut Pixmap, f64)) -> BitmapResource {
    let size = PROCEDURAL_TEXTURE_SIZE;
    let image = match Pixmap::new(size, size) {
        Some(mut pixmap) => {
            paint(&mut pixmap, size as f64);
            raster::to_image(&pixmap)
        }
        None => RgbaImage::new(size, size),
    };
    BitmapResource::from_image(name, image)
}

/// Red circle outline on a transparent tile.
pub fn circle_texture() -> BitmapResource {
    procedural_texture("circle_pattern", |pixmap, size| {
        let half = size / 2.0;
        raster::stroke_circle(pixmap, Point::new(half, half), half, PROCEDURAL_LINE_WIDTH, PROCEDURAL_COLOR);
    })
}

/// Red downward triangle outline on a transparent tile.
pub fn triangle_texture() -> BitmapResource {
    procedural_texture("triangle_pattern", |pixmap, size| {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size / 2.0, size),
        ];
        raster::stroke_polyline(pixmap, &triangle, true, PROCEDURAL_LINE_WIDTH, PROCEDURAL_COLOR);
    })
}

/// Red square outline along the tile border.
pub fn square_texture() -> BitmapResource {
    procedural_texture("square_pattern", |pixmap, size| {
        let (lo, hi) = (PROCEDURAL_LINE_WIDTH / 2.0, size - PROCEDURAL_LINE_WIDTH / 2.0);
        let border = [
            Point::new(lo, lo),
            Point::new(hi, lo),
            Point::new(hi, hi),
            Point::new(lo, hi),
        ];
        raster::stroke_polyline(pixmap, &border, true, PROCEDURAL_LINE_WIDTH, PROCEDURAL_COLOR);
    })
}

/// The set of loaded patterns and the one new fills use.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    bitmaps: Vec<Arc<BitmapResource>>,
    active: Option<usize>,
}

impl PatternLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load [`DEFAULT_PATTERN_FILES`] from `dir`, falling back to the
    /// procedural textures when none of them load.
    pub fn load_dir(dir: &Path) -> Self {
        let mut library = Self::new();
        for file in DEFAULT_PATTERN_FILES {
            let path = dir.join(file);
            match BitmapResource::load(&path) {
                Ok(bitmap) => library.push(bitmap),
                Err(ResourceError::NotFound(_)) => {
                    log::debug!("No pattern at {}", path.display());
                }
                Err(e) => log::warn!("Skipping pattern: {}", e),
            }
        }
        if library.is_empty() {
            log::info!("No pattern files found, generating procedural textures");
            library = Self::procedural();
        }
        library
    }

    /// Circle, triangle and square outline textures.
    pub fn procedural() -> Self {
        let mut library = Self::new();
        library.push(circle_texture());
        library.push(triangle_texture());
        library.push(square_texture());
        library
    }

    /// Add a bitmap. The first one added becomes active.
    pub fn push(&mut self, bitmap: BitmapResource) {
        self.bitmaps.push(Arc::new(bitmap));
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<BitmapResource>> {
        self.bitmaps.iter()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The pattern new fills use, if any is loaded.
    pub fn active(&self) -> Option<&Arc<BitmapResource>> {
        self.active.and_then(|i| self.bitmaps.get(i))
    }

    /// Advance the active pattern, wrapping to the first.
    pub fn cycle(&mut self) -> Option<usize> {
        if self.bitmaps.is_empty() {
            return None;
        }
        let next = match self.active {
            Some(i) if i < self.bitmaps.len() => (i + 1) % self.bitmaps.len(),
            _ => 0,
        };
        self.active = Some(next);
        self.active
    }
}
