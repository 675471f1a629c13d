use crate::{
    CoreResult, SessionError,
    session::{SessionEvent, SessionState},
};

use std::panic::Location;

use error_location::ErrorLocation;

/// Computes the state that follows `event` in `state`.
///
/// Pure and synchronous. Illegal pairs are rejected with
/// [`SessionError::StateError`]; the caller keeps its current state.
#[track_caller]
pub fn transition(state: SessionState, event: SessionEvent) -> CoreResult<SessionState> {
    use SessionEvent as E;
    use SessionState as S;

    let next = match (state, event) {
        (_, E::Reset) => S::Idle,
        (S::Idle | S::Previewing | S::Discarding, E::StreamAcquired) => S::Previewing,
        (S::Idle | S::Previewing | S::Discarding, E::AcquireFailed) => S::Idle,
        (S::Previewing, E::RecordingStarted) => S::Recording,
        (S::Recording, E::StopRequested | E::DurationElapsed) => S::Assembling,
        (S::Assembling, E::ClipAssembled) => S::Reviewing,
        (S::Reviewing, E::DiscardRequested) => S::Discarding,
        (state, event) => {
            return Err(SessionError::StateError {
                operation: event.operation(),
                state,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    Ok(next)
}
