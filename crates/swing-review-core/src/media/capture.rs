use crate::{media::ReleaseGuard, overlay::Geometry};

use thiserror::Error;
use uuid::Uuid;

/// What the session asks the camera for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    /// Request a video track.
    pub video: bool,
    /// Request an audio track.
    pub audio: bool,
}

impl CaptureConstraints {
    /// Video only, no microphone.
    pub const VIDEO_ONLY: Self = Self {
        video: true,
        audio: false,
    };
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self::VIDEO_ONLY
    }
}

/// Why a capture provider could not hand over a stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureFault {
    /// The operator or platform refused camera access.
    #[error("camera permission denied")]
    PermissionDenied,
    /// No camera is attached.
    #[error("no camera found")]
    NoDevice,
    /// Any other provider failure.
    #[error("{0}")]
    Unavailable(String),
}

/// Source of live camera streams.
pub trait CaptureProvider {
    /// Opens a live stream. Metadata must be resolved so that
    /// [`LiveStream::geometry`] reports the intrinsic frame size.
    fn request_stream(&mut self, constraints: &CaptureConstraints)
    -> Result<LiveStream, CaptureFault>;
}

/// A live camera stream owned by the session.
///
/// Dropping it (or calling [`release`](Self::release)) stops the device.
#[derive(Debug)]
pub struct LiveStream {
    id: Uuid,
    geometry: Geometry,
    guard: ReleaseGuard,
}

impl LiveStream {
    /// Wraps a device stream with the action that stops it.
    pub fn new(geometry: Geometry, guard: ReleaseGuard) -> Self {
        Self {
            id: Uuid::new_v4(),
            geometry,
            guard,
        }
    }

    /// Stream identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Intrinsic frame size.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Stops the device now.
    pub fn release(self) {
        self.guard.release();
    }
}
