use crate::config::{default_mime_type, default_timeslice_ms};

use serde::{Deserialize, Serialize};

/// Recording behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Auto-stop after this many milliseconds. Omit to stop by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Interval between recorder data chunks.
    #[serde(default = "default_timeslice_ms")]
    pub timeslice_ms: u64,
    /// Container type of assembled clips.
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            duration_ms: None,
            timeslice_ms: default_timeslice_ms(),
            mime_type: default_mime_type(),
        }
    }
}
