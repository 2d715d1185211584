// Host-side tests for the shared tuning constants and their relationships.

use blob_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_lerp_fractions() {
    for f in [POINTER_SMOOTHING, INTENSITY_SMOOTHING, ROTATION_SMOOTHING] {
        assert!(f > 0.0 && f <= 1.0, "factor {f} out of (0, 1]");
    }
    assert!(REFERENCE_FPS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_raises_displacement() {
    assert!(HOVER_INTENSITY > IDLE_INTENSITY);
    assert!(IDLE_INTENSITY >= 0.0);
    assert_eq!(BASE_INTENSITY, IDLE_INTENSITY);
    assert!(NOISE_BOUND >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_starts_inside_orbit_range() {
    assert!(ORBIT_MIN_DISTANCE < CAMERA_Z && CAMERA_Z < ORBIT_MAX_DISTANCE);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_ZFAR > ORBIT_MAX_DISTANCE);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert_eq!(OrbitControls::default().distance, CAMERA_Z);
}

#[test]
fn web_and_core_defaults_agree() {
    let config = BlobConfig::default();
    assert_eq!(config.idle_intensity, IDLE_INTENSITY);
    assert_eq!(config.hover_intensity, HOVER_INTENSITY);
    assert_eq!(config.speed, NOISE_SPEED);
    assert_eq!(config.smoothing.mode, SmoothingMode::PerFrame);
}
