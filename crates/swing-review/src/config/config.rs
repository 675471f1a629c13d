//! Configuration management for swing-review.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{CameraConfig, OverlayConfig, RecordingConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use swing_review_core::{
    RecordingPolicy, StrokeStyle,
    overlay::{DisplayRect, Geometry, MAX_SURFACE_SIDE, StrokeColor},
};
use tracing::{debug, info, instrument};

/// Environment variable naming an alternative config file.
pub(crate) const CONFIG_PATH_ENV: &str = "SWING_REVIEW_CONFIG";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recording behaviour.
    #[serde(default)]
    pub recording: RecordingConfig,
    /// Synthetic camera.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Annotation overlay.
    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    ///
    /// `SWING_REVIEW_CONFIG` overrides the platform config location.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load and validate configuration from `path`.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::parse(&contents)?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Parse and validate TOML configuration text.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the session cannot work with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let caller = Location::caller();
        let invalid = |reason: String| AppError::ConfigError {
            reason,
            location: ErrorLocation::from(caller),
        };

        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(invalid(format!(
                "Camera geometry must be non-zero, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        if self.camera.width > MAX_SURFACE_SIDE || self.camera.height > MAX_SURFACE_SIDE {
            return Err(invalid(format!(
                "Camera geometry must be at most {MAX_SURFACE_SIDE} per side, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }
        if self.recording.timeslice_ms == 0 {
            return Err(invalid("Recording timeslice_ms must be positive".to_string()));
        }
        if self.recording.duration_ms == Some(0) {
            return Err(invalid(
                "Recording duration_ms must be positive, omit it to stop by hand".to_string(),
            ));
        }
        if !(self.overlay.stroke_width.is_finite() && self.overlay.stroke_width > 0.0) {
            return Err(invalid(format!(
                "Stroke width must be positive, got {}",
                self.overlay.stroke_width
            )));
        }
        if !(self.overlay.display_scale.is_finite() && self.overlay.display_scale > 0.0) {
            return Err(invalid(format!(
                "Display scale must be positive, got {}",
                self.overlay.display_scale
            )));
        }
        if StrokeColor::from_hex(&self.overlay.stroke_color).is_none() {
            return Err(invalid(format!(
                "Stroke colour must be #rrggbb, got {:?}",
                self.overlay.stroke_color
            )));
        }

        Ok(())
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            debug!(config_dir = ?parent, "Created config directory");
        }

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Recording policy for new recordings.
    pub fn recording_policy(&self) -> RecordingPolicy {
        RecordingPolicy::from_duration_ms(self.recording.duration_ms)
            .with_timeslice(Duration::from_millis(self.recording.timeslice_ms))
            .with_mime_type(self.recording.mime_type.clone())
    }

    /// Ink style. Falls back to the default colour if unparsable.
    pub fn stroke_style(&self) -> StrokeStyle {
        let defaults = StrokeStyle::default();
        StrokeStyle {
            color: StrokeColor::from_hex(&self.overlay.stroke_color).unwrap_or(defaults.color),
            width: self.overlay.stroke_width,
        }
    }

    /// Intrinsic frame size of the synthetic camera.
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.camera.width, self.camera.height)
    }

    /// Where the surface showing `geometry` sits on screen.
    pub fn display_rect(&self, geometry: Geometry) -> DisplayRect {
        DisplayRect::scaled(
            self.overlay.display_left,
            self.overlay.display_top,
            geometry,
            self.overlay.display_scale,
        )
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "swing-review", "Swing-Review").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
