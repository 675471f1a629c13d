use crate::overlay::{Geometry, StrokeStyle, SurfacePoint};

/// Pixel drawing primitives of the host's annotation surface.
pub trait RenderSurface {
    /// Resizes the backing store to `geometry`, dropping its contents.
    fn resize(&mut self, geometry: Geometry);

    /// Erases all ink.
    fn clear(&mut self);

    /// Starts a new path.
    fn begin_path(&mut self);

    /// Moves the pen without drawing.
    fn move_to(&mut self, point: SurfacePoint);

    /// Adds a line from the pen to `point`.
    fn line_to(&mut self, point: SurfacePoint);

    /// Paints the current path.
    fn stroke(&mut self, style: &StrokeStyle);
}
