//! Platform-free engine for the particle Christmas tree.
//!
//! Everything here is pure computation over `glam` types: shape generation,
//! the scattered/assembled transition, per-group frame updates, photo focus
//! and the firework lifecycle. The web front end owns the canvas, the GPU and
//! the DOM; it drives [`Scene::frame`] once per displayed frame and uploads
//! whichever instance buffers came back dirty.
pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod focus;
pub mod generator;
pub mod groups;
pub mod photos;
pub mod pick;
pub mod render;
pub mod scene;
pub mod transition;

pub use camera::*;
pub use config::*;
pub use error::{Error, Result};
pub use focus::*;
pub use photos::*;
pub use render::*;
pub use scene::*;
pub use transition::*;
