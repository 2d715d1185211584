// Shared tuning constants used by both web and native frontends.

// Per-frame smoothing factors (fraction of the remaining gap closed per step)
pub const POINTER_SMOOTHING: f32 = 0.1;
pub const INTENSITY_SMOOTHING: f32 = 0.05;
pub const ROTATION_SMOOTHING: f32 = 0.05;

// Displacement amplitude
pub const BASE_INTENSITY: f32 = 0.3; // amplitude at construction
pub const IDLE_INTENSITY: f32 = 0.3; // target while the pointer is elsewhere
pub const HOVER_INTENSITY: f32 = 0.8; // target while the pointer is over the surface

// Noise scroll speed through time
pub const NOISE_SPEED: f32 = 0.4;

// Noise sampling scale applied to object-space positions
pub const NOISE_POSITION_SCALE: f32 = 0.5;

// Ribbon thickness ripple
pub const RIPPLE_FREQUENCY: f32 = 3.0;

// Pointer-to-tilt coupling (radians per normalized pointer unit)
pub const POINTER_TILT: f32 = 0.2;

// Frame rate the per-frame factors were tuned at
pub const REFERENCE_FPS: f32 = 60.0;

// Upper bound on |noise| used for conservative bounds
pub const NOISE_BOUND: f32 = 1.05;

// Camera
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_MIN_DISTANCE: f32 = 1.5;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_RADIANS_PER_UNIT: f32 = 2.5; // orbit per NDC unit of drag

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 5.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
