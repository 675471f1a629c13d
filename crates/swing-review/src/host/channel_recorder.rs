use crate::AppCommand;

use std::time::Duration;

use swing_review_core::{
    RecordingId, RecordingPolicy,
    media::{ClipChunk, LiveStream, RecordingSink},
    overlay::Geometry,
};
use tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, warn};

/// Emits one synthetic frame chunk per timeslice while recording.
///
/// Chunks travel through the app's command channel, so a chunk produced just
/// before `stop` may arrive after it. The session drops those by recording id.
pub(crate) struct ChannelRecorder {
    command_tx: mpsc::Sender<AppCommand>,
    active: Option<ActiveSink>,
}

struct ActiveSink {
    recording: RecordingId,
    geometry: Geometry,
    task: Option<JoinHandle<()>>,
}

impl ChannelRecorder {
    pub(crate) fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            command_tx,
            active: None,
        }
    }
}

impl RecordingSink for ChannelRecorder {
    fn start(&mut self, recording: RecordingId, stream: &LiveStream, policy: &RecordingPolicy) {
        if let Some(previous) = self.active.take() {
            warn!(recording_id = %previous.recording, "Recorder restarted without stop");
            previous.abort();
        }

        let geometry = stream.geometry();
        // Without a timeslice everything arrives as the final chunk on stop.
        let task = match (policy.timeslice, tokio::runtime::Handle::try_current()) {
            (Some(timeslice), Ok(handle)) if !timeslice.is_zero() => Some(handle.spawn(
                emit_chunks(self.command_tx.clone(), recording, geometry, timeslice),
            )),
            (Some(_), Err(e)) => {
                warn!(error = %e, "No async runtime, recording without timeslices");
                None
            }
            _ => None,
        };

        debug!(recording_id = %recording, timeslice = ?policy.timeslice, "Recorder started");

        self.active = Some(ActiveSink {
            recording,
            geometry,
            task,
        });
    }

    fn stop(&mut self) -> Vec<ClipChunk> {
        let Some(active) = self.active.take() else {
            return Vec::new();
        };

        let recording = active.recording;
        let last = frame(recording, active.geometry, u64::MAX);
        active.abort();

        debug!(recording_id = %recording, "Recorder stopped");

        vec![last]
    }
}

impl ActiveSink {
    fn abort(self) {
        if let Some(task) = self.task {
            task.abort();
        }
    }
}

async fn emit_chunks(
    command_tx: mpsc::Sender<AppCommand>,
    recording: RecordingId,
    geometry: Geometry,
    timeslice: Duration,
) {
    let mut interval = tokio::time::interval(timeslice);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes immediately.
    interval.tick().await;

    let mut sequence = 0u64;
    loop {
        interval.tick().await;
        let chunk = frame(recording, geometry, sequence);
        if command_tx
            .send(AppCommand::ChunkAvailable { recording, chunk })
            .await
            .is_err()
        {
            break;
        }
        sequence += 1;
    }
}

fn frame(recording: RecordingId, geometry: Geometry, sequence: u64) -> ClipChunk {
    let label = if sequence == u64::MAX {
        "final".to_string()
    } else {
        sequence.to_string()
    };
    ClipChunk::new(
        format!(
            "{recording} frame {label} {}x{}\n",
            geometry.width, geometry.height
        )
        .into_bytes(),
    )
}
