//! Annotation overlay registered to the video's intrinsic pixel space.

mod annotation;
mod geometry;
pub mod pointer;
mod raster;
mod stroke;
mod style;
mod surface;

pub use {
    annotation::AnnotationOverlay,
    geometry::{Geometry, SurfacePoint},
    pointer::{DisplayRect, PointerInput, to_surface_local},
    raster::{MAX_SURFACE_SIDE, RasterSurface},
    stroke::{Stroke, StrokeLog},
    style::{StrokeColor, StrokeStyle},
    surface::RenderSurface,
};
