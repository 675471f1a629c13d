use std::time::Duration;

/// Container type used when the host does not ask for another one.
pub const DEFAULT_CLIP_MIME: &str = "video/webm";

/// How a recording ends and how the recorder slices its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingPolicy {
    /// Auto-stop after this long. `None` leaves stopping to the operator.
    pub duration: Option<Duration>,
    /// Interval at which the recorder emits data chunks. `None` lets the
    /// recorder emit a single chunk when it stops.
    pub timeslice: Option<Duration>,
    /// Container type of the assembled clip.
    pub mime_type: String,
}

impl RecordingPolicy {
    /// Recording that runs until [`stop_recording`](crate::SessionController::stop_recording).
    pub fn operator_controlled() -> Self {
        Self {
            duration: None,
            timeslice: None,
            mime_type: DEFAULT_CLIP_MIME.to_string(),
        }
    }

    /// Recording that stops by itself after `duration` unless stopped earlier.
    pub fn fixed(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..Self::operator_controlled()
        }
    }

    /// Builds a policy from an optional duration in milliseconds.
    pub fn from_duration_ms(duration_ms: Option<u64>) -> Self {
        match duration_ms {
            Some(ms) => Self::fixed(Duration::from_millis(ms)),
            None => Self::operator_controlled(),
        }
    }

    /// Sets the chunk interval.
    pub fn with_timeslice(mut self, timeslice: Duration) -> Self {
        self.timeslice = Some(timeslice);
        self
    }

    /// Sets the clip container type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

impl Default for RecordingPolicy {
    fn default() -> Self {
        Self::operator_controlled()
    }
}
