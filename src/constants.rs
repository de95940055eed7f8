/// Front-end tuning constants: DOM wiring, asset paths, upload limits and
/// post-processing defaults. Scene tuning lives in `tree_core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const TOGGLE_MODE_ID: &str = "toggle-mode";
pub const PHOTO_INPUT_ID: &str = "photo-input";
pub const TOGGLE_MUSIC_ID: &str = "toggle-music";
pub const HINT_ID: &str = "hint-overlay";
pub const STATUS_ID: &str = "status";

// Class toggled on the canvas while a photo is under the pointer
pub const HOVER_CLASS: &str = "hovering";

// Button labels
pub const MODE_LABEL_SCATTERED: &str = "Assemble";
pub const MODE_LABEL_ASSEMBLED: &str = "Scatter";
pub const MUSIC_LABEL_OFF: &str = "Music: off";
pub const MUSIC_LABEL_ON: &str = "Music: on";

// Audio
pub const MUSIC_URL: &str = "assets/jingle-bells.mp3";
pub const MUSIC_VOLUME: f64 = 0.6;

// Uploads are downscaled to fit this square before becoming textures
pub const MAX_UPLOAD_DIMENSION: u32 = 2048;

// Pointer travel (canvas px) under which a press/release counts as a click
pub const CLICK_SLOP_PX: f32 = 6.0;

// Frame deltas are clamped so a backgrounded tab does not jump on return
pub const MAX_FRAME_DT: f32 = 0.1;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 1.1;
pub const BLOOM_THRESHOLD: f32 = 0.7;
pub const CLEAR_COLOR: [f64; 3] = [0.004, 0.006, 0.018];

// Shown on photo slots until their image has loaded
pub const PLACEHOLDER_RGBA: [u8; 4] = [196, 32, 48, 255];

// Initial GPU instance capacity for layers that grow at runtime
pub const MIN_INSTANCE_CAPACITY: usize = 64;
