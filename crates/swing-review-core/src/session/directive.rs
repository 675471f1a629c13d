use crate::overlay::Geometry;

/// Side effects the controller asks of the annotation overlay.
///
/// The controller never holds the overlay; [`ReviewContext`](crate::ReviewContext)
/// drains these after every call and applies them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayDirective {
    /// Match the drawing surface to newly displayable video.
    Resize(Geometry),
    /// Start accepting pointer input.
    Activate,
    /// Stop accepting pointer input.
    Deactivate,
    /// Drop every stroke.
    ClearStrokes,
}
