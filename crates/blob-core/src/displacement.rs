//! Host-side reference of the per-vertex displacement in `shaders/blob.wgsl`.
//!
//! The GPU program is authoritative at runtime; these functions compute the
//! same math on the CPU for tests, bounds and picking.

use crate::constants::{NOISE_BOUND, NOISE_POSITION_SCALE, RIPPLE_FREQUENCY};
use crate::noise::NoiseField;
use crate::state::UniformSnapshot;
use glam::Vec3;

/// Version of the displacement routine. Must match `PROGRAM_VERSION` in the
/// WGSL source; bump both whenever the uniform layout or the math changes.
pub const PROGRAM_VERSION: u32 = 1;

/// Where the noise field is sampled for a vertex.
#[inline]
pub fn noise_position(position: Vec3, u: &UniformSnapshot) -> Vec3 {
    Vec3::new(
        position.x * NOISE_POSITION_SCALE + u.pointer.x,
        position.y * NOISE_POSITION_SCALE + u.pointer.y,
        position.z * NOISE_POSITION_SCALE + u.time * u.speed,
    )
}

/// Travelling ripple in [0, 1], independent of the noise field.
#[inline]
pub fn thickness(position: Vec3, time: f32) -> f32 {
    0.5 + 0.5 * (position.x * RIPPLE_FREQUENCY + time).sin()
}

/// Offset along `normal` for one vertex.
#[inline]
pub fn offset<N: NoiseField + ?Sized>(
    noise: &N,
    position: Vec3,
    normal: Vec3,
    u: &UniformSnapshot,
) -> Vec3 {
    let n = noise.sample(noise_position(position, u));
    normal * n * u.intensity * (1.0 + thickness(position, u.time))
}

/// Displaced object-space position, before any model/view/projection transform.
#[inline]
pub fn displace<N: NoiseField + ?Sized>(
    noise: &N,
    position: Vec3,
    normal: Vec3,
    u: &UniformSnapshot,
) -> Vec3 {
    position + offset(noise, position, normal, u)
}

/// Upper bound on the displacement length for unit normals at `intensity`.
#[inline]
pub fn max_displacement(intensity: f32) -> f32 {
    NOISE_BOUND * intensity.abs() * 2.0
}
