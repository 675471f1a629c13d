//! Swing-review Core Library
//!
//! Capture a short clip from a camera, loop it back, and draw over it.
//!
//! The [`SessionController`] owns the lifecycle
//! (`Idle → Previewing → Recording → Assembling → Reviewing → Discarding → Previewing`)
//! and the resources each state holds. The [`AnnotationOverlay`] owns the ink.
//! [`ReviewContext`] ties the two together. Devices, recorders, clip storage
//! and timers are host collaborators behind the traits in [`media`].
//!
//! # Example
//!
//! ```no_run
//! use swing_review_core::{
//!     CoreResult, MediaProviders, RasterSurface, RecordingPolicy, ReviewContext, StrokeStyle,
//!     SurfacePoint, overlay::Geometry,
//! };
//!
//! fn review(providers: MediaProviders) -> CoreResult<()> {
//!     let surface = Box::new(RasterSurface::new(Geometry::new(0, 0)));
//!     let mut context = ReviewContext::new(providers, surface, StrokeStyle::default());
//!
//!     context.acquire()?;
//!     context.start_recording(RecordingPolicy::operator_controlled())?;
//!     context.stop_recording()?;
//!
//!     context.pointer_down(SurfacePoint::new(10.0, 10.0));
//!     context.pointer_move(SurfacePoint::new(40.0, 25.0));
//!     context.pointer_up();
//!
//!     context.discard()
//! }
//! ```

mod context;
mod error;
pub mod media;
pub mod overlay;
pub mod session;

pub use {
    context::ReviewContext,
    error::{Result as CoreResult, SessionError},
    media::{MemoryClipStore, ReleaseGuard},
    overlay::{AnnotationOverlay, RasterSurface, StrokeStyle, SurfacePoint},
    session::{MediaProviders, RecordingId, RecordingPolicy, SessionController, SessionState},
};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests;
