use crate::{
    SessionError,
    session::{SessionEvent, SessionState, transition},
};

const EVENTS: [SessionEvent; 8] = [
    SessionEvent::StreamAcquired,
    SessionEvent::AcquireFailed,
    SessionEvent::RecordingStarted,
    SessionEvent::StopRequested,
    SessionEvent::DurationElapsed,
    SessionEvent::ClipAssembled,
    SessionEvent::DiscardRequested,
    SessionEvent::Reset,
];

fn expected(state: SessionState, event: SessionEvent) -> Option<SessionState> {
    use SessionEvent as E;
    use SessionState as S;
    match (state, event) {
        (_, E::Reset) => Some(S::Idle),
        (S::Idle | S::Previewing | S::Discarding, E::StreamAcquired) => Some(S::Previewing),
        (S::Idle | S::Previewing | S::Discarding, E::AcquireFailed) => Some(S::Idle),
        (S::Previewing, E::RecordingStarted) => Some(S::Recording),
        (S::Recording, E::StopRequested) => Some(S::Assembling),
        (S::Recording, E::DurationElapsed) => Some(S::Assembling),
        (S::Assembling, E::ClipAssembled) => Some(S::Reviewing),
        (S::Reviewing, E::DiscardRequested) => Some(S::Discarding),
        _ => None,
    }
}

/// WHAT: Every (state, event) pair matches the lifecycle table
/// WHY: The transition function is the single source of legality
#[test]
fn given_every_state_and_event_when_transitioning_then_matches_lifecycle_table() {
    for state in SessionState::ALL {
        for event in EVENTS {
            // Given/When: One step of the transition function
            let result = transition(state, event);

            // Then: Legal pairs land on the documented state, others are rejected
            match (expected(state, event), result) {
                (Some(next), Ok(actual)) => assert_eq!(actual, next, "{state:?} + {event:?}"),
                (None, Err(SessionError::StateError { state: rejected, .. })) => {
                    assert_eq!(rejected, state)
                }
                (want, got) => panic!("{state:?} + {event:?}: expected {want:?}, got {got:?}"),
            }
        }
    }
}

/// WHAT: Stopping while idle is a state error naming the operation
/// WHY: Contract violations must be loud, not silently ignored
#[test]
fn given_idle_when_stop_requested_then_state_error_names_operation() {
    // Given: Idle state

    // When: Applying StopRequested
    let result = transition(SessionState::Idle, SessionEvent::StopRequested);

    // Then: StateError carries the operation and source state
    match result {
        Err(SessionError::StateError {
            operation, state, ..
        }) => {
            assert_eq!(operation, "stop recording");
            assert_eq!(state, SessionState::Idle);
        }
        other => panic!("expected StateError, got {other:?}"),
    }
}

/// WHAT: Any event sequence keeps the state inside the six lifecycle states
/// WHY: No undefined or mixed state is reachable through legal steps
#[test]
fn given_all_event_sequences_when_applied_then_state_always_enumerated() {
    // Given: Every sequence of four events from Idle
    let mut frontier = vec![SessionState::Idle];

    for _ in 0..4 {
        let mut next_frontier = Vec::new();
        for state in &frontier {
            for event in EVENTS {
                // When: Applying the event, keeping state on rejection
                let next = transition(*state, event).unwrap_or(*state);

                // Then: The result is one of the enumerated states
                assert!(SessionState::ALL.contains(&next));
                next_frontier.push(next);
            }
        }
        frontier = next_frontier;
    }
}

/// WHAT: Resource ownership expectations per state
/// WHY: Live stream and clip are never expected together
#[test]
fn given_each_state_when_checking_ownership_then_stream_and_clip_exclusive() {
    for state in SessionState::ALL {
        assert!(!(state.holds_live_stream() && state.holds_clip()), "{state}");
    }
    assert!(!SessionState::Idle.holds_live_stream());
    assert!(!SessionState::Idle.holds_clip());
}
