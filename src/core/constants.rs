// Shared animation and gesture tuning constants used by the web frontend.

// Particle cloud
pub const PARTICLE_COUNT: usize = 1600;
pub const POINT_SIZE: f32 = 0.045; // world-space sprite diameter
pub const POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Per-frame easing factors (fraction of the remaining error removed each frame)
pub const PARTICLE_EASE: f32 = 0.07;
pub const SCALE_EASE: f32 = 0.08;

// Constant yaw drift applied to the whole cloud
pub const ROTATION_SPEED: f32 = 0.0006; // radians per frame

// Gesture mapping
pub const SCALE_NEUTRAL_Y: f32 = 0.5; // hand height (normalized) that maps to scale 1
pub const PINCH_THRESHOLD: f32 = 0.04; // thumb/index distance in normalized image units
pub const PINCH_COOLDOWN_MS: u64 = 900;

// MediaPipe hand landmark indices
pub const LANDMARK_THUMB_TIP: usize = 4;
pub const LANDMARK_INDEX_TIP: usize = 8;
pub const LANDMARK_MIDDLE_MCP: usize = 9;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 70.0;
pub const CAMERA_Z: f32 = 4.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const MAX_PIXEL_RATIO: f64 = 1.5;
