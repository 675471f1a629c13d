use crate::{
    CoreResult, SessionError,
    media::{
        CaptureConstraints, CaptureProvider, ClipAssembler, ClipChunk, ClipHandle, DurationTimer,
        LiveStream, RecordingSink,
    },
    overlay::Geometry,
    session::{
        OverlayDirective, RecordingId, RecordingPolicy, SessionEvent, SessionState, transition,
    },
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Host-supplied collaborators the controller drives.
pub struct MediaProviders {
    /// Camera access.
    pub capture: Box<dyn CaptureProvider + Send>,
    /// Recorder for the live stream.
    pub recorder: Box<dyn RecordingSink + Send>,
    /// Chunk-to-clip assembly.
    pub assembler: Box<dyn ClipAssembler + Send>,
    /// Single-shot timer for fixed-duration recordings.
    pub timer: Box<dyn DurationTimer + Send>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopCause {
    Operator,
    Timer,
}

#[derive(Debug)]
struct ActiveRecording {
    id: RecordingId,
    mime_type: String,
    geometry: Geometry,
    timer_armed: bool,
    started_at: Instant,
}

/// Owns the capture/review lifecycle and the resources each state holds.
///
/// # Ownership
///
/// - Live stream: held in `Previewing` and `Recording`.
/// - Chunks: accumulated in `Recording`, moved into assembly.
/// - Clip: held in `Reviewing` (and briefly `Discarding`).
///
/// Both handles release their backing resource when dropped, so every exit
/// path from an owning state frees it.
///
/// # Overlay
///
/// The controller never touches the overlay. Transitions queue
/// [`OverlayDirective`]s which the owner collects with
/// [`take_directives`](Self::take_directives).
pub struct SessionController {
    providers: MediaProviders,
    constraints: CaptureConstraints,
    state: SessionState,
    live: Option<LiveStream>,
    chunks: Vec<ClipChunk>,
    clip: Option<ClipHandle>,
    recording: Option<ActiveRecording>,
    last_stop: Option<StopCause>,
    directives: Vec<OverlayDirective>,
}

impl SessionController {
    /// Creates an `Idle` controller. Nothing is acquired until [`acquire`](Self::acquire).
    pub fn new(providers: MediaProviders) -> Self {
        Self {
            providers,
            constraints: CaptureConstraints::VIDEO_ONLY,
            state: SessionState::Idle,
            live: None,
            chunks: Vec::new(),
            clip: None,
            recording: None,
            last_stop: None,
            directives: Vec::new(),
        }
    }

    /// Requests the live camera stream and shows it.
    ///
    /// # Errors
    ///
    /// `CaptureUnavailable` if the provider refuses; the session is then
    /// `Idle` and stays there until acquisition is invoked again.
    /// `StateError` outside `Idle`/`Previewing`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn acquire(&mut self) -> CoreResult<()> {
        transition(self.state, SessionEvent::StreamAcquired)?;

        if let Some(previous) = self.live.take() {
            debug!(stream_id = %previous.id(), "Releasing previous live stream");
            previous.release();
        }

        match self.providers.capture.request_stream(&self.constraints) {
            Ok(stream) => {
                let geometry = stream.geometry();
                info!(
                    stream_id = %stream.id(),
                    width = geometry.width,
                    height = geometry.height,
                    "Live stream acquired"
                );
                self.live = Some(stream);
                self.advance(SessionEvent::StreamAcquired)?;
                self.directives.push(OverlayDirective::Resize(geometry));
                Ok(())
            }
            Err(fault) => {
                self.advance(SessionEvent::AcquireFailed)?;
                error!(%fault, "Camera unavailable");
                Err(SessionError::CaptureUnavailable {
                    source: fault,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Starts recording the live stream.
    ///
    /// Any clip still held is released first, and the chunk buffer starts
    /// empty. With `policy.duration` set, the recording stops by itself once
    /// the duration elapses unless stopped earlier.
    ///
    /// # Errors
    ///
    /// `StateError` outside `Previewing`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_recording(&mut self, policy: RecordingPolicy) -> CoreResult<RecordingId> {
        transition(self.state, SessionEvent::RecordingStarted)?;

        self.release_clip();
        self.chunks.clear();
        self.last_stop = None;

        let Some(stream) = self.live.as_ref() else {
            return Err(SessionError::StateError {
                operation: SessionEvent::RecordingStarted.operation(),
                state: self.state,
                location: ErrorLocation::from(Location::caller()),
            });
        };
        let geometry = stream.geometry();

        let id = RecordingId::new();
        self.providers.recorder.start(id, stream, &policy);

        if let Some(duration) = policy.duration {
            self.providers.timer.schedule(id, duration);
        }

        self.recording = Some(ActiveRecording {
            id,
            mime_type: policy.mime_type.clone(),
            geometry,
            timer_armed: policy.duration.is_some(),
            started_at: Instant::now(),
        });
        self.advance(SessionEvent::RecordingStarted)?;

        info!(
            recording_id = %id,
            duration = ?policy.duration,
            "Recording started"
        );

        Ok(id)
    }

    /// Appends a data chunk emitted by the recorder.
    ///
    /// Chunks for anything but the active recording are late deliveries and
    /// are dropped.
    pub fn on_chunk(&mut self, recording: RecordingId, chunk: ClipChunk) {
        match &self.recording {
            Some(active) if active.id == recording && self.state == SessionState::Recording => {
                self.chunks.push(chunk);
            }
            _ => debug!(
                recording_id = %recording,
                bytes = chunk.len(),
                state = %self.state,
                "Dropping chunk for inactive recording"
            ),
        }
    }

    /// Timer continuation for a fixed-duration recording.
    ///
    /// Stale firings (cancelled, or for an earlier recording) are ignored, so
    /// each recording is stopped by its timer at most once.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn on_duration_elapsed(&mut self, recording: RecordingId) -> CoreResult<()> {
        let is_current = self
            .recording
            .as_ref()
            .is_some_and(|active| active.id == recording);

        if !is_current || self.state != SessionState::Recording {
            debug!(recording_id = %recording, state = %self.state, "Stale duration timer ignored");
            return Ok(());
        }

        info!(recording_id = %recording, "Recording duration elapsed");
        self.finish_recording(StopCause::Timer)
    }

    /// Stops recording and assembles the clip for review.
    ///
    /// A no-op if the timer already stopped the recording under review.
    ///
    /// # Errors
    ///
    /// `StateError` outside `Recording`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) -> CoreResult<()> {
        if self.state == SessionState::Reviewing && self.last_stop == Some(StopCause::Timer) {
            debug!("Recording already stopped by its timer");
            return Ok(());
        }

        self.finish_recording(StopCause::Operator)
    }

    /// Throws the clip away and resumes live preview.
    ///
    /// The clip's backing identifier is revoked and the overlay is cleared and
    /// deactivated before the camera is requested again.
    ///
    /// # Errors
    ///
    /// `StateError` outside `Reviewing`. `CaptureUnavailable` if the camera
    /// cannot be re-acquired, leaving the session `Idle`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn discard(&mut self) -> CoreResult<()> {
        self.advance(SessionEvent::DiscardRequested)?;

        self.release_clip();
        self.chunks.clear();
        self.last_stop = None;
        self.directives.push(OverlayDirective::Deactivate);
        self.directives.push(OverlayDirective::ClearStrokes);

        info!("Clip discarded");

        self.acquire()
    }

    /// Releases everything and returns to `Idle`, from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(active) = self.recording.take() {
            if active.timer_armed {
                self.providers.timer.cancel(active.id);
            }
            let dropped = self.providers.recorder.stop();
            debug!(recording_id = %active.id, dropped = dropped.len(), "Recording abandoned");
        }

        self.chunks.clear();
        self.release_clip();
        if let Some(stream) = self.live.take() {
            stream.release();
        }
        self.last_stop = None;
        self.directives.push(OverlayDirective::Deactivate);
        self.directives.push(OverlayDirective::ClearStrokes);

        let next = transition(self.state, SessionEvent::Reset).unwrap_or(SessionState::Idle);
        self.enter(next, SessionEvent::Reset);
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a live stream is held.
    pub fn has_live_stream(&self) -> bool {
        self.live.is_some()
    }

    /// Live stream, while previewing or recording.
    pub fn live_stream(&self) -> Option<&LiveStream> {
        self.live.as_ref()
    }

    /// Clip under review.
    pub fn clip(&self) -> Option<&ClipHandle> {
        self.clip.as_ref()
    }

    /// Chunks buffered for the active recording.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Id of the recording in progress.
    pub fn active_recording(&self) -> Option<RecordingId> {
        self.recording.as_ref().map(|active| active.id)
    }

    /// Collects the overlay side effects queued since the last call.
    pub fn take_directives(&mut self) -> Vec<OverlayDirective> {
        std::mem::take(&mut self.directives)
    }

    #[track_caller]
    fn finish_recording(&mut self, cause: StopCause) -> CoreResult<()> {
        let event = match cause {
            StopCause::Operator => SessionEvent::StopRequested,
            StopCause::Timer => SessionEvent::DurationElapsed,
        };
        self.advance(event)?;

        let Some(active) = self.recording.take() else {
            // Recording state without a recording; recover to a clean session.
            warn!("No active recording to stop, resetting");
            self.reset();
            return Err(SessionError::StateError {
                operation: event.operation(),
                state: SessionState::Recording,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if active.timer_armed && cause == StopCause::Operator {
            self.providers.timer.cancel(active.id);
        }

        let flushed = self.providers.recorder.stop();
        self.chunks.extend(flushed);

        self.assemble(active, cause)
    }

    #[track_caller]
    fn assemble(&mut self, active: ActiveRecording, cause: StopCause) -> CoreResult<()> {
        let chunks = std::mem::take(&mut self.chunks);
        let clip = self
            .providers
            .assembler
            .assemble(chunks, &active.mime_type, active.geometry);

        info!(
            recording_id = %active.id,
            resource_id = %clip.resource_id(),
            chunk_count = clip.chunk_count(),
            byte_len = clip.byte_len(),
            duration_ms = active.started_at.elapsed().as_millis(),
            ?cause,
            "Clip assembled"
        );

        if let Some(previous) = self.clip.replace(clip) {
            previous.release();
        }
        if let Some(stream) = self.live.take() {
            stream.release();
        }

        self.advance(SessionEvent::ClipAssembled)?;
        self.last_stop = Some(cause);
        self.directives.push(OverlayDirective::Resize(active.geometry));
        self.directives.push(OverlayDirective::Activate);

        Ok(())
    }

    fn release_clip(&mut self) {
        if let Some(clip) = self.clip.take() {
            debug!(resource_id = %clip.resource_id(), "Releasing clip");
            clip.release();
        }
    }

    #[track_caller]
    fn advance(&mut self, event: SessionEvent) -> CoreResult<SessionState> {
        let next = transition(self.state, event)?;
        self.enter(next, event);
        Ok(next)
    }

    fn enter(&mut self, next: SessionState, event: SessionEvent) {
        if next != self.state {
            debug!(from = %self.state, to = %next, ?event, "Session transition");
        }
        self.state = next;
    }
}
