use std::fmt;

/// Lifecycle state of the capture/review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No camera held. Initial state, and the state after a failed acquisition.
    Idle,
    /// Live camera preview is showing.
    Previewing,
    /// The live stream is being recorded into chunks.
    Recording,
    /// Chunks are being assembled into a clip. Transient.
    Assembling,
    /// The recorded clip is looping and the overlay accepts ink.
    Reviewing,
    /// The clip is being released before live preview resumes. Transient.
    Discarding,
}

impl SessionState {
    /// All states, in lifecycle order.
    pub const ALL: [SessionState; 6] = [
        SessionState::Idle,
        SessionState::Previewing,
        SessionState::Recording,
        SessionState::Assembling,
        SessionState::Reviewing,
        SessionState::Discarding,
    ];

    /// Whether the session is expected to own a live camera stream.
    pub fn holds_live_stream(self) -> bool {
        matches!(self, SessionState::Previewing | SessionState::Recording)
    }

    /// Whether the session is expected to own an assembled clip.
    pub fn holds_clip(self) -> bool {
        matches!(self, SessionState::Reviewing | SessionState::Discarding)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Previewing => "previewing",
            SessionState::Recording => "recording",
            SessionState::Assembling => "assembling",
            SessionState::Reviewing => "reviewing",
            SessionState::Discarding => "discarding",
        };
        f.write_str(name)
    }
}
