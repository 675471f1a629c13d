use crate::{
    AppCommand, AppResult,
    app_command::USAGE,
    config::Config,
    host::{ChannelRecorder, SyntheticCamera, TokioTimer},
};

use std::{
    ops::ControlFlow,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use swing_review_core::{
    MediaProviders, MemoryClipStore, RasterSurface, ReviewContext, SessionError, SessionState,
    SurfacePoint,
    overlay::{PointerInput, to_surface_local},
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};

/// Shown to the operator whenever the camera cannot be acquired.
pub(crate) const CAMERA_UNAVAILABLE: &str =
    "Could not access the camera. Please check your permissions.";

/// Record button label for `state`.
pub(crate) fn status_label(state: SessionState) -> &'static str {
    match state {
        SessionState::Recording => "Recording...",
        SessionState::Assembling | SessionState::Discarding => "Processing...",
        SessionState::Idle | SessionState::Previewing | SessionState::Reviewing => {
            "Start Recording"
        }
    }
}

/// Main application state.
///
/// Owns the single [`ReviewContext`]. Every collaborator reports back through
/// `command_rx`, so all session calls happen on this loop.
pub struct App {
    pub(crate) context: ReviewContext,
    pub(crate) config: Config,
    pub(crate) clips: MemoryClipStore,
    pub(crate) open_streams: Arc<AtomicUsize>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Wire the host collaborators described by `config` into a new session.
    pub(crate) fn new(
        config: Config,
        command_tx: mpsc::Sender<AppCommand>,
        command_rx: mpsc::Receiver<AppCommand>,
        shutdown_tx: watch::Sender<bool>,
    ) -> Self {
        let geometry = config.geometry();
        let camera = SyntheticCamera::new(geometry, config.camera.available);
        let open_streams = camera.open_streams();
        let clips = MemoryClipStore::new();

        let providers = MediaProviders {
            capture: Box::new(camera),
            recorder: Box::new(ChannelRecorder::new(command_tx.clone())),
            assembler: Box::new(clips.clone()),
            timer: Box::new(TokioTimer::new(command_tx)),
        };
        let surface = Box::new(RasterSurface::new(geometry));
        let context = ReviewContext::new(providers, surface, config.stroke_style());

        Self {
            context,
            config,
            clips,
            open_streams,
            command_rx,
            shutdown_tx,
        }
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Swing-Review starting");

        self.acquire();
        self.announce();

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if self.handle_command(cmd).is_break() {
                        info!("Shutdown requested");
                        break;
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        self.context.reset();
        let _ = self.shutdown_tx.send(true);

        info!(
            open_streams = self.open_streams.load(Ordering::SeqCst),
            live_clips = self.clips.live_count(),
            "Swing-Review shut down successfully"
        );

        Ok(())
    }

    /// Apply one command to the session.
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) -> ControlFlow<()> {
        let before = self.context.state();

        match cmd {
            AppCommand::RecordButton => {
                if before == SessionState::Recording {
                    self.stop_recording();
                } else {
                    self.start_recording();
                }
            }
            AppCommand::Stop => self.stop_recording(),
            AppCommand::Discard => {
                if let Err(e) = self.context.discard() {
                    self.report(e);
                }
            }
            AppCommand::Acquire => self.acquire(),
            AppCommand::Reset => self.context.reset(),
            AppCommand::Status => self.print_status(),
            AppCommand::Help => println!("{USAGE}"),
            AppCommand::PointerDown { x, y } => {
                if let Some(point) = self.surface_point(x, y) {
                    self.context.pointer_down(point);
                }
            }
            AppCommand::PointerMove { x, y } => {
                if let Some(point) = self.surface_point(x, y) {
                    self.context.pointer_move(point);
                }
            }
            AppCommand::PointerUp => self.context.pointer_up(),
            AppCommand::ChunkAvailable { recording, chunk } => {
                self.context.on_chunk(recording, chunk);
            }
            AppCommand::DurationElapsed { recording } => {
                if let Err(e) = self.context.on_duration_elapsed(recording) {
                    self.report(e);
                }
            }
            AppCommand::Shutdown => return ControlFlow::Break(()),
        }

        if self.context.state() != before {
            self.announce();
        }

        ControlFlow::Continue(())
    }

    fn acquire(&mut self) {
        if let Err(e) = self.context.acquire() {
            self.report(e);
        }
    }

    fn start_recording(&mut self) {
        let policy = self.config.recording_policy();
        match self.context.start_recording(policy) {
            Ok(recording) => debug!(recording_id = %recording, "Record button started recording"),
            Err(e) => self.report(e),
        }
    }

    fn stop_recording(&mut self) {
        if let Err(e) = self.context.stop_recording() {
            self.report(e);
        }
    }

    /// Client coordinates to surface pixels, once the surface has a size.
    fn surface_point(&self, x: f64, y: f64) -> Option<SurfacePoint> {
        let geometry = self.context.overlay().geometry()?;
        let rect = self.config.display_rect(geometry);
        Some(to_surface_local(
            PointerInput::Client { x, y },
            &rect,
            geometry,
        ))
    }

    fn report(&self, e: SessionError) {
        match &e {
            SessionError::CaptureUnavailable { .. } => {
                error!(error = %e, "Camera unavailable");
                println!("{CAMERA_UNAVAILABLE}");
            }
            SessionError::StateError {
                operation, state, ..
            } => {
                warn!(error = %e, "Operation rejected");
                println!("Cannot {operation} while {state}.");
            }
        }
    }

    fn announce(&self) {
        let state = self.context.state();
        println!("[{}] {}", status_label(state), state);
    }

    fn print_status(&self) {
        let state = self.context.state();
        let overlay = self.context.overlay();

        println!("state:   {state} ({})", status_label(state));
        println!("camera:  {} open stream(s)", self.open_streams.load(Ordering::SeqCst));
        match self.context.clip() {
            Some(clip) => println!(
                "clip:    {} {} bytes in {} chunk(s), {}x{}, looping",
                clip.resource_id(),
                clip.byte_len(),
                clip.chunk_count(),
                clip.geometry().width,
                clip.geometry().height,
            ),
            None => println!("clip:    none"),
        }
        println!(
            "overlay: {}, {} stroke(s)",
            if overlay.is_active() { "active" } else { "inactive" },
            overlay.strokes().len(),
        );
    }
}
