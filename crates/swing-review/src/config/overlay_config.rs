use crate::config::{default_display_scale, default_stroke_color, default_stroke_width};

use serde::{Deserialize, Serialize};

/// Annotation ink and on-screen placement of the drawing surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Ink colour as `#rrggbb`.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Ink width in surface pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Left edge of the surface in client coordinates.
    #[serde(default)]
    pub display_left: f64,
    /// Top edge of the surface in client coordinates.
    #[serde(default)]
    pub display_top: f64,
    /// Displayed size relative to intrinsic size.
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            display_left: 0.0,
            display_top: 0.0,
            display_scale: default_display_scale(),
        }
    }
}
