//! Pointer-to-surface-local translation.
//!
//! Hosts deliver pointer positions either in client (viewport) coordinates or
//! relative to the surface element. Both end up here so there is exactly one
//! mapping into the video's intrinsic pixel space.

use crate::overlay::{Geometry, SurfacePoint};

/// Where the surface element is displayed, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Displayed width.
    pub width: f64,
    /// Displayed height.
    pub height: f64,
}

impl DisplayRect {
    /// Rect at `(left, top)` showing `geometry` at `scale`.
    pub fn scaled(left: f64, top: f64, geometry: Geometry, scale: f64) -> Self {
        Self {
            left,
            top,
            width: f64::from(geometry.width) * scale,
            height: f64::from(geometry.height) * scale,
        }
    }
}

/// A raw pointer position as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Viewport coordinates; the surface's bounding box is subtracted.
    Client {
        /// Horizontal client coordinate.
        x: f64,
        /// Vertical client coordinate.
        y: f64,
    },
    /// Already relative to the surface element's top-left corner.
    ElementOffset {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
}

/// Maps `input` into surface-local pixels of `geometry`.
///
/// Displayed size may differ from intrinsic size; offsets are scaled
/// accordingly. A degenerate rect is treated as unscaled.
pub fn to_surface_local(input: PointerInput, rect: &DisplayRect, geometry: Geometry) -> SurfacePoint {
    let (x, y) = match input {
        PointerInput::Client { x, y } => (x - rect.left, y - rect.top),
        PointerInput::ElementOffset { x, y } => (x, y),
    };

    let scale_x = axis_scale(geometry.width, rect.width);
    let scale_y = axis_scale(geometry.height, rect.height);

    SurfacePoint::new(x * scale_x, y * scale_y)
}

fn axis_scale(intrinsic: u32, displayed: f64) -> f64 {
    if displayed.is_finite() && displayed > 0.0 {
        f64::from(intrinsic) / displayed
    } else {
        1.0
    }
}
