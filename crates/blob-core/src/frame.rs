use crate::constants::*;
use crate::error::BlobError;
use crate::state::{Rotation, UniformState};
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// How smoothing factors relate to wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SmoothingMode {
    /// Apply each factor once per frame. Settling speed follows the frame rate.
    #[default]
    PerFrame,
    /// Scale each factor by the elapsed time so the curve matches a run at
    /// `reference_fps` regardless of the actual frame rate.
    TimeCorrected { reference_fps: f32 },
}

impl SmoothingMode {
    pub fn time_corrected() -> Self {
        SmoothingMode::TimeCorrected {
            reference_fps: REFERENCE_FPS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SmoothingMode::PerFrame => SmoothingMode::time_corrected(),
            SmoothingMode::TimeCorrected { .. } => SmoothingMode::PerFrame,
        }
    }

    /// A time-corrected mode needs a finite, positive reference rate.
    pub fn validate(self) -> Result<(), BlobError> {
        match self {
            SmoothingMode::PerFrame => Ok(()),
            SmoothingMode::TimeCorrected { reference_fps } => {
                if reference_fps.is_finite() && reference_fps > 0.0 {
                    Ok(())
                } else {
                    Err(BlobError::InvalidConfig(format!(
                        "reference fps must be positive, got {reference_fps}"
                    )))
                }
            }
        }
    }

    /// Effective lerp factor for one update covering `dt_sec` seconds.
    #[inline]
    pub fn factor(self, base: f32, dt_sec: f32) -> f32 {
        match self {
            SmoothingMode::PerFrame => base,
            SmoothingMode::TimeCorrected { reference_fps } => {
                let steps = dt_sec.max(0.0) * reference_fps;
                1.0 - (1.0 - base).powf(steps)
            }
        }
    }
}

impl fmt::Display for SmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothingMode::PerFrame => write!(f, "per-frame"),
            SmoothingMode::TimeCorrected { reference_fps } => {
                write!(f, "time-corrected@{:.0}fps", reference_fps)
            }
        }
    }
}

impl FromStr for SmoothingMode {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frame" | "per-frame" | "perframe" => Ok(SmoothingMode::PerFrame),
            "time" | "time-corrected" | "timecorrected" => Ok(SmoothingMode::time_corrected()),
            other => Err(BlobError::InvalidConfig(format!(
                "unknown smoothing mode '{other}' (expected 'frame' or 'time')"
            ))),
        }
    }
}

/// Smoothing factors and hover targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingConfig {
    pub pointer: f32,
    pub intensity: f32,
    pub rotation: f32,
    pub mode: SmoothingMode,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            pointer: POINTER_SMOOTHING,
            intensity: INTENSITY_SMOOTHING,
            rotation: ROTATION_SMOOTHING,
            mode: SmoothingMode::PerFrame,
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-frame control routine: advances time, smooths the pointer and the
/// intensity toward the hover target and derives the mesh tilt.
#[derive(Clone, Debug)]
pub struct FrameUpdater {
    pub smoothing: SmoothingConfig,
    pub idle_intensity: f32,
    pub hover_intensity: f32,
    pub tilt: f32,
}

impl Default for FrameUpdater {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            idle_intensity: IDLE_INTENSITY,
            hover_intensity: HOVER_INTENSITY,
            tilt: POINTER_TILT,
        }
    }
}

impl FrameUpdater {
    #[inline]
    pub fn target_intensity(&self, hovered: bool) -> f32 {
        if hovered {
            self.hover_intensity
        } else {
            self.idle_intensity
        }
    }

    /// Run one frame. `elapsed_sec` is seconds since engine start as read from
    /// the host clock; `raw_pointer` is the unsmoothed pointer in [-1, 1].
    pub fn update(
        &self,
        state: &mut UniformState,
        rotation: &mut Rotation,
        elapsed_sec: f32,
        raw_pointer: Vec2,
    ) {
        let prev_time = state.time;
        state.time = prev_time.max(elapsed_sec);
        let dt = state.time - prev_time;

        let mode = self.smoothing.mode;
        let a_pointer = mode.factor(self.smoothing.pointer, dt);
        let a_intensity = mode.factor(self.smoothing.intensity, dt);
        let a_rotation = mode.factor(self.smoothing.rotation, dt);

        state.pointer = state.pointer.lerp(raw_pointer, a_pointer);

        let target = self.target_intensity(state.hover.get());
        state.intensity = lerp(state.intensity, target, a_intensity);

        rotation.x = lerp(rotation.x, raw_pointer.y * self.tilt, a_rotation);
        rotation.y = lerp(rotation.y, raw_pointer.x * self.tilt, a_rotation);
    }
}
