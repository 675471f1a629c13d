use crate::{
    media::{ClipChunk, LiveStream},
    session::{RecordingId, RecordingPolicy},
};

/// Records a live stream into ordered binary chunks.
///
/// Chunks emitted while recording are delivered by the host through
/// [`ReviewContext::on_chunk`](crate::ReviewContext::on_chunk).
pub trait RecordingSink {
    /// Opens the sink against `stream`.
    fn start(&mut self, recording: RecordingId, stream: &LiveStream, policy: &RecordingPolicy);

    /// Closes the sink and returns any data flushed on stop.
    fn stop(&mut self) -> Vec<ClipChunk>;
}
