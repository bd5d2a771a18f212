//! Render settings, loadable from JSON.

use crate::Camera;
use glint_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Camera placement and lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Point3,
    pub look_at: Point3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f64,
    /// Distance to the plane in focus; defaults to the look-at distance
    pub focus_dist: Option<f64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Point3::new(0.0, 1.0, 7.0),
            look_at: Point3::new(0.0, 1.0, 0.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 50.0,
            aperture: 0.05,
            focus_dist: None,
        }
    }
}

impl CameraConfig {
    /// Focus distance, falling back to the distance to `look_at`.
    pub fn focus_dist(&self) -> f64 {
        self.focus_dist
            .unwrap_or_else(|| (self.look_at - self.look_from).length())
    }

    /// Build an uninitialized camera from these settings.
    pub fn build(&self, aspect_ratio: f64) -> Camera {
        Camera::new()
            .with_position(self.look_from, self.look_at, self.vup)
            .with_lens(self.vfov, self.aperture, self.focus_dist())
            .with_aspect_ratio(aspect_ratio)
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Width / height
    pub aspect_ratio: f64,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 800,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Largest accepted width or height in pixels.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from JSON text.
    ///
    /// Values are not checked here so command line overrides can still fix
    /// them; call [`RenderConfig::validate`] once they are applied.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Image height derived from width and aspect ratio (at least 1).
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// Reject settings that can't produce an image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 {
            return Err(ConfigError::Invalid("image_width must be positive".into()));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "aspect_ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        // Checked before the u32 cast in image_height, which saturates
        let height = self.image_width as f64 / self.aspect_ratio;
        if self.image_width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION as f64 {
            return Err(ConfigError::Invalid(format!(
                "image is {}x{:.0}, larger than {} pixels on a side",
                self.image_width,
                height,
                Self::MAX_DIMENSION
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::Invalid(
                "samples_per_pixel must be positive".into(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be positive".into()));
        }
        if self.camera.look_from == self.camera.look_at {
            return Err(ConfigError::Invalid(
                "camera look_from and look_at must differ".into(),
            ));
        }
        Ok(())
    }
}
