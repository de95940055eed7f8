pub use tree_core::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static PHOTOS_WGSL: &str = include_str!("../../shaders/photos.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
