// Page wiring and hand-tracking integration settings.

// DOM element ids expected in index.html
pub const CANVAS_ID: &str = "three-canvas";
pub const VIDEO_ID: &str = "handCam";
pub const STATUS_ID: &str = "status-overlay";
pub const HINT_ID: &str = "hint-overlay";

// MediaPipe Hands options
pub const HANDS_CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands/";
pub const MAX_NUM_HANDS: u32 = 1;
pub const MODEL_COMPLEXITY: u32 = 0; // lite model
pub const MIN_DETECTION_CONFIDENCE: f64 = 0.6;
pub const MIN_TRACKING_CONFIDENCE: f64 = 0.6;

// Camera capture
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;
pub const CAPTURE_FACING_MODE: &str = "user";
