// Shared tuning constants for the tree, its particle groups and the camera.
// World units are arbitrary; the tree is centred on the origin with +Y up.

// Tree silhouette
pub const TREE_HEIGHT: f32 = 14.0;
pub const TREE_BASE_RADIUS: f32 = 5.5;
pub const FOLIAGE_WINDING_TURNS: f32 = 250.0; // turns around the trunk, bottom to top
pub const FOLIAGE_TAPER_EXPONENT: f32 = 0.9;
pub const SHELL_INNER_FRACTION: f32 = 0.2; // innermost radius as a fraction of the local max
pub const SCATTER_RADIUS: f32 = 25.0;

// Group sizes
pub const FOLIAGE_COUNT: usize = 15_000;
pub const ORNAMENT_COUNT: usize = 300;
pub const ORNAMENT_MAX: usize = 400;
pub const PHOTO_SLOT_COUNT: usize = 9;
pub const SNOW_COUNT: usize = 1_500;
pub const STAR_COUNT: usize = 2_500;
pub const FIREWORK_PARTICLES: usize = 160;

// Transition smoothing, applied once per frame
pub const FOLIAGE_SMOOTHING: f32 = 0.02;
pub const ORNAMENT_SMOOTHING: f32 = 0.04;
pub const PHOTO_SMOOTHING: f32 = 0.03;
pub const REFERENCE_FPS: f32 = 60.0; // frame rate the per-frame constants were tuned at

// Seed buckets: top 5% accent, next 45% bright, rest base
pub const ACCENT_THRESHOLD: f32 = 0.95;
pub const BRIGHT_THRESHOLD: f32 = 0.50;

// Foliage look
pub const FOLIAGE_SIZE: f32 = 0.11;
pub const ACCENT_SIZE_BOOST: f32 = 1.6;
pub const FOLIAGE_BASE_COLOR: [f32; 3] = [0.03, 0.30, 0.10];
pub const FOLIAGE_BRIGHT_COLOR: [f32; 3] = [0.25, 0.80, 0.38];
pub const FOLIAGE_ACCENT_COLOR: [f32; 3] = [2.2, 1.8, 0.7]; // HDR gold, feeds bloom
pub const TWINKLE_SPEED: f32 = 2.5;

// Foliage wind: sin(time * 1.5 + y * 0.5 + x)
pub const WIND_TIME_SCALE: f32 = 1.5;
pub const WIND_HEIGHT_SCALE: f32 = 0.5;
pub const WIND_AMPLITUDE: f32 = 0.18;
pub const WIND_ASSEMBLED_DAMPING: f32 = 0.6;

// Ornaments
pub const GOLDEN_ANGLE: f32 = 2.399_963;
pub const ORNAMENT_SURFACE_FRACTION: f32 = 0.92; // sit just inside the foliage shell
pub const ORNAMENT_HEIGHT_MIN_FRACTION: f32 = 0.05;
pub const ORNAMENT_HEIGHT_MAX_FRACTION: f32 = 0.92;
pub const ORNAMENT_SPIN_MIN: f32 = 0.004; // radians per frame
pub const ORNAMENT_SPIN_MAX: f32 = 0.025;
pub const BAUBLE_SIZE: f32 = 0.38;
pub const GIFT_SIZE: f32 = 0.46;
pub const LIGHT_SIZE: f32 = 0.22;

// Snow
pub const SNOW_BAND_HEIGHT: f32 = 30.0;
pub const SNOW_SPREAD: f32 = 32.0; // x/z extent of the snow box
pub const SNOW_FALL_MIN: f32 = 0.6; // units per second
pub const SNOW_FALL_MAX: f32 = 1.6;
pub const SNOW_SWAY: f32 = 0.45;
pub const SNOW_SIZE: f32 = 0.12;

// Starfield
pub const STAR_RADIUS_MIN: f32 = 60.0;
pub const STAR_RADIUS_MAX: f32 = 110.0;
pub const STAR_SIZE: f32 = 0.35;

// Photo slots
pub const PHOTO_HEIGHT_MIN_FRACTION: f32 = 0.12;
pub const PHOTO_HEIGHT_MAX_FRACTION: f32 = 0.80;
pub const PHOTO_AZIMUTH_STEP: f32 = 2.2; // radians between consecutive slots
pub const PHOTO_RADIUS_OFFSET: f32 = 0.7; // hang just outside the foliage
pub const PHOTO_WIDTH: f32 = 1.2;
pub const PHOTO_HEIGHT: f32 = 1.5;
pub const PHOTO_PICK_RADIUS: f32 = 0.85; // scaled by the slot's current scale
pub const PHOTO_HOVER_SCALE: f32 = 1.15;
pub const PHOTO_FOCUS_SCALE: f32 = 2.6;
pub const PHOTO_FOCUS_DISTANCE: f32 = 9.0; // in front of the camera eye
pub const FOCUS_SMOOTHING: f32 = 0.1;
pub const SCALE_SMOOTHING: f32 = 0.15;
pub const RETURN_TOLERANCE: f32 = 0.01;

// Photo sway while scattered
pub const PHOTO_SCATTER_PITCH: f32 = 0.35;
pub const PHOTO_SCATTER_YAW: f32 = 0.6;
pub const PHOTO_SCATTER_ROLL: f32 = 0.2;

// Background hit-target: z plane behind the assembled tree
pub const BACKGROUND_DEPTH: f32 = -20.0;

// Fireworks
pub const FIREWORK_LIFETIME: f32 = 1.5; // seconds
pub const FIREWORK_SPEED_MIN: f32 = 2.5;
pub const FIREWORK_SPEED_MAX: f32 = 6.0;
pub const FIREWORK_SPEED_SCALE: f32 = 1.0;
pub const FIREWORK_GRAVITY: f32 = 1.2;
pub const FIREWORK_SIZE: f32 = 0.3;
pub const FIREWORK_BRIGHTNESS: f32 = 2.5;
pub const CELEBRATION_BURSTS_MIN: usize = 2;
pub const CELEBRATION_BURSTS_MAX: usize = 3;
pub const CELEBRATION_SPREAD: [f32; 3] = [7.0, 3.0, 3.0]; // half extents around the centre
pub const CELEBRATION_CENTER: [f32; 3] = [0.0, 5.0, 0.0];

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.5, 26.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0;
