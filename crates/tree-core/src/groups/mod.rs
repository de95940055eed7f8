//! Animated particle groups.
//!
//! Each group owns its generated geometry, its own transition state where it
//! has one, and the instance buffer it writes every frame. Groups read the
//! shared mode signal and clock through [`FrameInput`] and never write scene
//! state.
pub mod fireworks;
pub mod foliage;
pub mod ornaments;
pub mod photos;
pub mod snow;
pub mod stars;

pub use fireworks::{Burst, Fireworks};
pub use foliage::Foliage;
pub use ornaments::{OrnamentKind, Ornaments};
pub use photos::{PhotoSlot, PhotoSlots};
pub use snow::Snow;
pub use stars::Stars;

/// Read-only per-frame context handed to every group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the scene started.
    pub time: f64,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Mode signal: 0 = scattered, 1 = assembled.
    pub mode: f32,
}
