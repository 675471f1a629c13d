use crate::config::{default_available, default_height, default_width};

use serde::{Deserialize, Serialize};

/// Synthetic camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Intrinsic frame width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Intrinsic frame height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Whether the camera grants access. `false` simulates a denied prompt.
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            available: default_available(),
        }
    }
}
