//! tokio-backed collaborators wired into the review session.
//!
//! Each one reports back to the [`App`](crate::App) loop by sending
//! [`AppCommand`](crate::AppCommand)s, never by touching the session directly.

mod channel_recorder;
mod synthetic_camera;
mod tokio_timer;

pub(crate) use {
    channel_recorder::ChannelRecorder, synthetic_camera::SyntheticCamera,
    tokio_timer::TokioTimer,
};
