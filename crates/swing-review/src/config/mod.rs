mod camera_config;
#[allow(clippy::module_inception)]
mod config;
mod overlay_config;
mod recording_config;

pub(crate) use {
    camera_config::CameraConfig, config::Config, overlay_config::OverlayConfig,
    recording_config::RecordingConfig,
};

pub(crate) const DEFAULT_WIDTH: u32 = 640;
pub(crate) const DEFAULT_HEIGHT: u32 = 480;
pub(crate) const DEFAULT_TIMESLICE_MS: u64 = 250;
pub(crate) const DEFAULT_STROKE_COLOR: &str = "#ff0000";
pub(crate) const DEFAULT_STROKE_WIDTH: f64 = 3.0;

pub(crate) fn default_width() -> u32 {
    DEFAULT_WIDTH
}

pub(crate) fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

pub(crate) fn default_available() -> bool {
    true
}

pub(crate) fn default_timeslice_ms() -> u64 {
    DEFAULT_TIMESLICE_MS
}

pub(crate) fn default_mime_type() -> String {
    swing_review_core::session::DEFAULT_CLIP_MIME.to_string()
}

pub(crate) fn default_stroke_color() -> String {
    DEFAULT_STROKE_COLOR.to_string()
}

pub(crate) fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

pub(crate) fn default_display_scale() -> f64 {
    1.0
}
