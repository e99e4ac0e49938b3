//! Painter Core Library
//!
//! Platform-agnostic shape model for the Painter editors: polygonal shapes,
//! their transforms and hit testing, pattern fills, and the draw command
//! list a renderer consumes.

pub mod bitmap;
pub mod canvas;
pub mod construction;
pub mod geometry;
pub mod input;
pub mod pattern;
pub mod raster;
pub mod scene;
pub mod shapes;

pub use bitmap::{BitmapResource, PatternLibrary, ResourceError, ResourceResult};
pub use canvas::{Canvas, SelectionPolicy};
pub use construction::{Construction, ConstructionError, MIN_FREEFORM_POINTS};
pub use input::{InputEvent, Modifiers, MouseButton};
pub use scene::{DrawCommand, DrawSink, Marker, PreviewStyle, SceneStyle};
pub use shapes::{Fill, SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle};
