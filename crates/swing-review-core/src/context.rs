//! The single explicit session context.
//!
//! Owns one [`SessionController`] and one [`AnnotationOverlay`] and routes the
//! controller's side effects into the overlay. Hosts construct it once and
//! hold it; nothing here is global.

use crate::{
    CoreResult,
    media::{ClipChunk, ClipHandle},
    overlay::{AnnotationOverlay, RenderSurface, StrokeStyle, SurfacePoint},
    session::{MediaProviders, RecordingId, RecordingPolicy, SessionController, SessionState},
};

use tracing::instrument;

/// Capture, review and annotation for one operator.
pub struct ReviewContext {
    controller: SessionController,
    overlay: AnnotationOverlay,
}

impl ReviewContext {
    /// Wires a controller and an overlay together. The session starts `Idle`.
    pub fn new(
        providers: MediaProviders,
        surface: Box<dyn RenderSurface + Send>,
        style: StrokeStyle,
    ) -> Self {
        Self {
            controller: SessionController::new(providers),
            overlay: AnnotationOverlay::new(surface, style),
        }
    }

    /// See [`SessionController::acquire`].
    #[track_caller]
    pub fn acquire(&mut self) -> CoreResult<()> {
        let result = self.controller.acquire();
        self.sync_overlay();
        result
    }

    /// See [`SessionController::start_recording`].
    #[track_caller]
    pub fn start_recording(&mut self, policy: RecordingPolicy) -> CoreResult<RecordingId> {
        let result = self.controller.start_recording(policy);
        self.sync_overlay();
        result
    }

    /// See [`SessionController::on_chunk`].
    pub fn on_chunk(&mut self, recording: RecordingId, chunk: ClipChunk) {
        self.controller.on_chunk(recording, chunk);
    }

    /// See [`SessionController::on_duration_elapsed`].
    #[track_caller]
    pub fn on_duration_elapsed(&mut self, recording: RecordingId) -> CoreResult<()> {
        let result = self.controller.on_duration_elapsed(recording);
        self.sync_overlay();
        result
    }

    /// See [`SessionController::stop_recording`].
    #[track_caller]
    pub fn stop_recording(&mut self) -> CoreResult<()> {
        let result = self.controller.stop_recording();
        self.sync_overlay();
        result
    }

    /// See [`SessionController::discard`].
    ///
    /// The overlay is cleared even when re-acquiring the camera fails.
    #[track_caller]
    pub fn discard(&mut self) -> CoreResult<()> {
        let result = self.controller.discard();
        self.sync_overlay();
        result
    }

    /// Releases every resource, clears the overlay and returns to `Idle`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.controller.reset();
        self.sync_overlay();
    }

    /// Forwards a surface-local pointer-down to the overlay.
    pub fn pointer_down(&mut self, point: SurfacePoint) {
        self.overlay.on_pointer_down(point);
    }

    /// Forwards a surface-local pointer-move to the overlay.
    pub fn pointer_move(&mut self, point: SurfacePoint) {
        self.overlay.on_pointer_move(point);
    }

    /// Forwards a pointer-up to the overlay.
    pub fn pointer_up(&mut self) {
        self.overlay.on_pointer_up();
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.controller.state()
    }

    /// Clip under review.
    pub fn clip(&self) -> Option<&ClipHandle> {
        self.controller.clip()
    }

    /// The session controller.
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// The annotation overlay.
    pub fn overlay(&self) -> &AnnotationOverlay {
        &self.overlay
    }

    fn sync_overlay(&mut self) {
        for directive in self.controller.take_directives() {
            self.overlay.apply(directive);
        }
    }
}
