/// Intrinsic pixel size of the displayed video, and therefore of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Geometry {
    /// Creates a geometry.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has no drawable pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `point` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, point: SurfacePoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < f64::from(self.width)
            && point.y < f64::from(self.height)
    }

    /// Pulls `point` onto the last drawable pixel along each axis.
    pub fn clamp(&self, point: SurfacePoint) -> SurfacePoint {
        let max_x = f64::from(self.width.saturating_sub(1));
        let max_y = f64::from(self.height.saturating_sub(1));
        SurfacePoint {
            x: finite_or_zero(point.x).clamp(0.0, max_x),
            y: finite_or_zero(point.y).clamp(0.0, max_y),
        }
    }
}

/// Point in surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    /// Horizontal offset from the surface's left edge.
    pub x: f64,
    /// Vertical offset from the surface's top edge.
    pub y: f64,
}

impl SurfacePoint {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
