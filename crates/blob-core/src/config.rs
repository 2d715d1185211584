//! Tunables for one surface. `BlobConfig::default()` reproduces the
//! reference look; hosts override individual fields.

use crate::constants::*;
use crate::error::BlobError;
use crate::frame::{FrameUpdater, SmoothingConfig, SmoothingMode};
use crate::geometry::TorusKnotDescriptor;
use crate::material::PhysicalMaterial;

#[derive(Clone, Debug, PartialEq)]
pub struct BlobConfig {
    pub smoothing: SmoothingConfig,
    /// Intensity at construction.
    pub base_intensity: f32,
    pub idle_intensity: f32,
    pub hover_intensity: f32,
    /// Noise scroll speed through time.
    pub speed: f32,
    /// Tilt in radians per unit of raw pointer.
    pub tilt: f32,
    pub geometry: TorusKnotDescriptor,
    pub material: PhysicalMaterial,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            base_intensity: BASE_INTENSITY,
            idle_intensity: IDLE_INTENSITY,
            hover_intensity: HOVER_INTENSITY,
            speed: NOISE_SPEED,
            tilt: POINTER_TILT,
            geometry: TorusKnotDescriptor::default(),
            material: PhysicalMaterial::default(),
        }
    }
}

fn check_factor(name: &str, value: f32) -> Result<(), BlobError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(BlobError::InvalidConfig(format!(
            "{name} smoothing must be in (0, 1], got {value}"
        )))
    }
}

fn check_finite(name: &str, value: f32) -> Result<(), BlobError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BlobError::InvalidConfig(format!("{name} must be finite, got {value}")))
    }
}

impl BlobConfig {
    pub fn with_smoothing_mode(mut self, mode: SmoothingMode) -> Self {
        self.smoothing.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), BlobError> {
        check_factor("pointer", self.smoothing.pointer)?;
        check_factor("intensity", self.smoothing.intensity)?;
        check_factor("rotation", self.smoothing.rotation)?;
        self.smoothing.mode.validate()?;
        check_finite("base_intensity", self.base_intensity)?;
        check_finite("idle_intensity", self.idle_intensity)?;
        check_finite("hover_intensity", self.hover_intensity)?;
        check_finite("speed", self.speed)?;
        check_finite("tilt", self.tilt)?;
        if self.base_intensity < 0.0 || self.idle_intensity < 0.0 || self.hover_intensity < 0.0 {
            return Err(BlobError::InvalidConfig(
                "intensities must be non-negative".to_string(),
            ));
        }
        self.geometry.validate()?;
        self.material.validate()?;
        Ok(())
    }

    pub fn frame_updater(&self) -> FrameUpdater {
        FrameUpdater {
            smoothing: self.smoothing,
            idle_intensity: self.idle_intensity,
            hover_intensity: self.hover_intensity,
            tilt: self.tilt,
        }
    }
}
