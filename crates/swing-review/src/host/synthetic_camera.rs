use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use swing_review_core::{
    ReleaseGuard,
    media::{CaptureConstraints, CaptureFault, CaptureProvider, LiveStream},
    overlay::Geometry,
};
use tracing::{debug, info, warn};

/// Camera stand-in producing streams of a configured frame size.
///
/// With `available` off every request is refused, which is how an operator
/// denying camera permission looks to the session.
pub(crate) struct SyntheticCamera {
    geometry: Geometry,
    available: bool,
    open_streams: Arc<AtomicUsize>,
}

impl SyntheticCamera {
    pub(crate) fn new(geometry: Geometry, available: bool) -> Self {
        Self {
            geometry,
            available,
            open_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared count of streams not yet released.
    pub(crate) fn open_streams(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.open_streams)
    }
}

impl CaptureProvider for SyntheticCamera {
    fn request_stream(
        &mut self,
        constraints: &CaptureConstraints,
    ) -> Result<LiveStream, CaptureFault> {
        if !self.available {
            warn!("Camera access refused");
            return Err(CaptureFault::PermissionDenied);
        }
        if !constraints.video {
            return Err(CaptureFault::Unavailable(
                "synthetic camera only provides video".to_string(),
            ));
        }

        let open = self.open_streams.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            width = self.geometry.width,
            height = self.geometry.height,
            open_streams = open,
            "Camera opened"
        );

        let open_streams = Arc::clone(&self.open_streams);
        Ok(LiveStream::new(
            self.geometry,
            ReleaseGuard::new(move || {
                let remaining = open_streams.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
                debug!(open_streams = remaining, "Camera stream stopped");
            }),
        ))
    }
}
