//! Capture session lifecycle.

mod controller;
mod directive;
mod event;
mod policy;
mod recording_id;
mod state;
mod transition;

pub use {
    controller::{MediaProviders, SessionController},
    directive::OverlayDirective,
    event::SessionEvent,
    policy::{DEFAULT_CLIP_MIME, RecordingPolicy},
    recording_id::RecordingId,
    state::SessionState,
    transition::transition,
};
