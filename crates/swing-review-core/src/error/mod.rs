use crate::{media::CaptureFault, session::SessionState};

use error_location::ErrorLocation;
use thiserror::Error;

/// Session lifecycle errors with source location tracking.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The camera could not be acquired (denied, absent or busy).
    ///
    /// Never retried automatically; the operator must re-invoke acquisition.
    #[error("Camera unavailable: {source} {location}")]
    CaptureUnavailable {
        /// Fault reported by the capture provider.
        #[source]
        source: CaptureFault,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// An operation was attempted from a state that does not allow it.
    #[error("Cannot {operation} while {state} {location}")]
    StateError {
        /// Name of the rejected operation.
        operation: &'static str,
        /// State the session was in when the call was rejected.
        state: SessionState,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`SessionError`].
pub type Result<T> = std::result::Result<T, SessionError>;
