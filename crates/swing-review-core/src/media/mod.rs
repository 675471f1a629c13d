//! Host collaborator boundary: camera, recorder, clip assembly and timers.

mod capture;
mod clip;
mod memory;
mod recorder;
mod release;
mod timer;

pub use {
    capture::{CaptureConstraints, CaptureFault, CaptureProvider, LiveStream},
    clip::{ClipAssembler, ClipChunk, ClipHandle, ClipInfo, ResourceId},
    memory::MemoryClipStore,
    recorder::RecordingSink,
    release::ReleaseGuard,
    timer::DurationTimer,
};
