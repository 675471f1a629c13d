/// Events consumed by [`transition`](crate::session::transition).
///
/// Payloads (streams, chunks, clips) stay with the controller; the transition
/// function only decides legality and the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The capture provider handed over a live stream.
    StreamAcquired,
    /// The capture provider refused or failed.
    AcquireFailed,
    /// The recording sink was opened on the live stream.
    RecordingStarted,
    /// The operator asked to stop recording.
    StopRequested,
    /// The fixed-duration timer of the active recording fired.
    DurationElapsed,
    /// The recorded chunks were assembled into a playable clip.
    ClipAssembled,
    /// The operator asked to throw the clip away.
    DiscardRequested,
    /// Explicit reset of the whole session.
    Reset,
}

impl SessionEvent {
    /// Operation name used in [`SessionError::StateError`](crate::SessionError::StateError).
    pub fn operation(self) -> &'static str {
        match self {
            SessionEvent::StreamAcquired | SessionEvent::AcquireFailed => "acquire",
            SessionEvent::RecordingStarted => "start recording",
            SessionEvent::StopRequested => "stop recording",
            SessionEvent::DurationElapsed => "expire recording",
            SessionEvent::ClipAssembled => "assemble clip",
            SessionEvent::DiscardRequested => "discard",
            SessionEvent::Reset => "reset",
        }
    }
}
