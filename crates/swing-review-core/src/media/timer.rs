use crate::session::RecordingId;

use std::time::Duration;

/// Single-shot timer used for fixed-duration recordings.
///
/// The host reports expiry through
/// [`ReviewContext::on_duration_elapsed`](crate::ReviewContext::on_duration_elapsed).
pub trait DurationTimer {
    /// Arms a timer for `recording` that fires once after `after`.
    fn schedule(&mut self, recording: RecordingId, after: Duration);

    /// Disarms the timer for `recording`, if still pending.
    fn cancel(&mut self, recording: RecordingId);
}
