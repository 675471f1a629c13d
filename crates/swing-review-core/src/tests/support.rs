//! Fake collaborators with shared probes for observing them after they are
//! boxed into a controller.

use crate::{
    MediaProviders, MemoryClipStore, RecordingId, RecordingPolicy, ReleaseGuard, ReviewContext,
    StrokeStyle,
    media::{
        CaptureConstraints, CaptureFault, CaptureProvider, ClipChunk, DurationTimer, LiveStream,
        RecordingSink,
    },
    overlay::{Geometry, RenderSurface, SurfacePoint},
};

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

pub(crate) const GEOMETRY: Geometry = Geometry::new(640, 480);

// --- camera ---------------------------------------------------------------

#[derive(Clone, Default)]
pub(crate) struct CameraProbe {
    pub(crate) unavailable: Arc<AtomicBool>,
    pub(crate) opened: Arc<AtomicUsize>,
    pub(crate) released: Arc<AtomicUsize>,
    pub(crate) last_constraints: Arc<Mutex<Option<CaptureConstraints>>>,
}

impl CameraProbe {
    pub(crate) fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

struct FakeCamera {
    geometry: Geometry,
    probe: CameraProbe,
}

impl CaptureProvider for FakeCamera {
    fn request_stream(
        &mut self,
        constraints: &CaptureConstraints,
    ) -> Result<LiveStream, CaptureFault> {
        *self.probe.last_constraints.lock().unwrap() = Some(*constraints);
        if self.probe.unavailable.load(Ordering::SeqCst) {
            return Err(CaptureFault::PermissionDenied);
        }
        self.probe.opened.fetch_add(1, Ordering::SeqCst);
        let released = Arc::clone(&self.probe.released);
        Ok(LiveStream::new(
            self.geometry,
            ReleaseGuard::new(move || {
                released.fetch_add(1, Ordering::SeqCst);
            }),
        ))
    }
}

// --- recorder -------------------------------------------------------------

#[derive(Clone, Default)]
pub(crate) struct RecorderProbe {
    pub(crate) started: Arc<Mutex<Vec<(RecordingId, RecordingPolicy)>>>,
    pub(crate) stops: Arc<AtomicUsize>,
    pub(crate) flush_on_stop: Arc<Mutex<Vec<ClipChunk>>>,
}

impl RecorderProbe {
    pub(crate) fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub(crate) fn starts(&self) -> usize {
        self.started.lock().unwrap().len()
    }

    pub(crate) fn flush_next_stop(&self, chunk: ClipChunk) {
        self.flush_on_stop.lock().unwrap().push(chunk);
    }
}

struct FakeRecorder {
    probe: RecorderProbe,
}

impl RecordingSink for FakeRecorder {
    fn start(&mut self, recording: RecordingId, _stream: &LiveStream, policy: &RecordingPolicy) {
        self.probe
            .started
            .lock()
            .unwrap()
            .push((recording, policy.clone()));
    }

    fn stop(&mut self) -> Vec<ClipChunk> {
        self.probe.stops.fetch_add(1, Ordering::SeqCst);
        std::mem::take(&mut *self.probe.flush_on_stop.lock().unwrap())
    }
}

// --- timer ----------------------------------------------------------------

#[derive(Default)]
struct TimerState {
    now: Duration,
    pending: Vec<(RecordingId, Duration)>,
    cancelled: usize,
}

/// Virtual clock; firing is driven by [`TimerProbe::advance`].
#[derive(Clone, Default)]
pub(crate) struct TimerProbe {
    state: Arc<Mutex<TimerState>>,
}

impl TimerProbe {
    /// Moves the clock and returns the recordings whose timer fired.
    pub(crate) fn advance(&self, by: Duration) -> Vec<RecordingId> {
        let mut state = self.state.lock().unwrap();
        state.now += by;
        let now = state.now;
        let (fired, pending): (Vec<_>, Vec<_>) =
            state.pending.drain(..).partition(|(_, deadline)| *deadline <= now);
        state.pending = pending;
        fired.into_iter().map(|(id, _)| id).collect()
    }

    pub(crate) fn pending(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    pub(crate) fn cancelled(&self) -> usize {
        self.state.lock().unwrap().cancelled
    }
}

struct ManualTimer {
    probe: TimerProbe,
}

impl DurationTimer for ManualTimer {
    fn schedule(&mut self, recording: RecordingId, after: Duration) {
        let mut state = self.probe.state.lock().unwrap();
        let deadline = state.now + after;
        state.pending.push((recording, deadline));
    }

    fn cancel(&mut self, recording: RecordingId) {
        let mut state = self.probe.state.lock().unwrap();
        let before = state.pending.len();
        state.pending.retain(|(id, _)| *id != recording);
        if state.pending.len() != before {
            state.cancelled += 1;
        }
    }
}

// --- surface --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceOp {
    Resize(Geometry),
    Clear,
    BeginPath,
    MoveTo(SurfacePoint),
    LineTo(SurfacePoint),
    Stroke,
}

#[derive(Clone, Default)]
pub(crate) struct SurfaceProbe {
    pub(crate) ops: Arc<Mutex<Vec<SurfaceOp>>>,
}

impl SurfaceProbe {
    pub(crate) fn ops(&self) -> Vec<SurfaceOp> {
        self.ops.lock().unwrap().clone()
    }

    pub(crate) fn line_targets(&self) -> Vec<SurfacePoint> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                SurfaceOp::LineTo(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn strokes_painted(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke))
            .count()
    }
}

pub(crate) struct TraceSurface {
    probe: SurfaceProbe,
}

impl TraceSurface {
    pub(crate) fn new() -> (Self, SurfaceProbe) {
        let probe = SurfaceProbe::default();
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }

    fn log(&self, op: SurfaceOp) {
        self.probe.ops.lock().unwrap().push(op);
    }
}

impl RenderSurface for TraceSurface {
    fn resize(&mut self, geometry: Geometry) {
        self.log(SurfaceOp::Resize(geometry));
    }

    fn clear(&mut self) {
        self.log(SurfaceOp::Clear);
    }

    fn begin_path(&mut self) {
        self.log(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, point: SurfacePoint) {
        self.log(SurfaceOp::MoveTo(point));
    }

    fn line_to(&mut self, point: SurfacePoint) {
        self.log(SurfaceOp::LineTo(point));
    }

    fn stroke(&mut self, _style: &StrokeStyle) {
        self.log(SurfaceOp::Stroke);
    }
}

// --- harness --------------------------------------------------------------

/// Probes onto every fake wired into a controller or context.
#[derive(Clone, Default)]
pub(crate) struct Harness {
    pub(crate) camera: CameraProbe,
    pub(crate) recorder: RecorderProbe,
    pub(crate) timer: TimerProbe,
    pub(crate) store: MemoryClipStore,
    pub(crate) surface: SurfaceProbe,
}

impl Harness {
    pub(crate) fn providers(&self) -> MediaProviders {
        MediaProviders {
            capture: Box::new(FakeCamera {
                geometry: GEOMETRY,
                probe: self.camera.clone(),
            }),
            recorder: Box::new(FakeRecorder {
                probe: self.recorder.clone(),
            }),
            assembler: Box::new(self.store.clone()),
            timer: Box::new(ManualTimer {
                probe: self.timer.clone(),
            }),
        }
    }

    pub(crate) fn context(&mut self) -> ReviewContext {
        let (surface, probe) = TraceSurface::new();
        self.surface = probe;
        ReviewContext::new(self.providers(), Box::new(surface), StrokeStyle::default())
    }
}

pub(crate) fn chunk(bytes: &[u8]) -> ClipChunk {
    ClipChunk::new(bytes.to_vec())
}

pub(crate) fn point(x: f64, y: f64) -> SurfacePoint {
    SurfacePoint::new(x, y)
}
