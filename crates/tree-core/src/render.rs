//! GPU-shareable per-instance data written by the particle groups.
//!
//! The renderer never reaches into group state; it only reads these buffers.
//! A group rewrites its buffer in place every frame it changes and marks it
//! dirty, and the renderer uploads whatever [`InstanceBuffer::take_dirty`]
//! hands back.

use bytemuck::{Pod, Zeroable};

/// Sprite silhouette drawn by the particle shader.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteShape {
    Glow = 0,
    Bauble = 1,
    Gift = 2,
    Flake = 3,
    Spark = 4,
}

/// One camera-facing sprite: 48 bytes, matches `Instance` in `particles.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    /// In-plane rotation in radians.
    pub rotation: f32,
    pub shape: u32,
    pub _pad: [f32; 2],
}

impl ParticleInstance {
    #[inline]
    pub fn new(position: glam::Vec3, size: f32, color: [f32; 4], shape: SpriteShape) -> Self {
        Self {
            position: position.to_array(),
            size,
            color,
            rotation: 0.0,
            shape: shape as u32,
            _pad: [0.0; 2],
        }
    }
}

/// One photo quad: model matrix plus tint, matches `PhotoInstance` in `photos.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PhotoInstance {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

impl Default for PhotoInstance {
    fn default() -> Self {
        Self {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            tint: [1.0; 4],
        }
    }
}

/// Draw order of the particle layers (back to front for additive blending).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Stars,
    Foliage,
    Ornaments,
    Snow,
    Fireworks,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::Stars,
        Layer::Foliage,
        Layer::Ornaments,
        Layer::Snow,
        Layer::Fireworks,
    ];
}

#[derive(Clone, Debug)]
pub struct InstanceBuffer<T> {
    data: Vec<T>,
    dirty: bool,
}

impl<T: Pod + Default> InstanceBuffer<T> {
    pub fn with_len(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
            dirty: true,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            dirty: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access; marks the buffer dirty.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.dirty = true;
        &mut self.data
    }

    /// Drop all instances but keep the allocation; marks dirty.
    pub fn clear(&mut self) {
        self.data.clear();
        self.dirty = true;
    }

    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Contents if changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> Option<&[T]> {
        if self.dirty {
            self.dirty = false;
            Some(&self.data)
        } else {
            None
        }
    }
}

/// Fully saturated colour for a hue in `[0, 1)`.
pub fn hue_to_rgb(hue: f32) -> [f32; 3] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}

#[inline]
pub fn scale_rgb(rgb: [f32; 3], k: f32, alpha: f32) -> [f32; 4] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layouts_match_shaders() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 48);
        assert_eq!(std::mem::size_of::<PhotoInstance>(), 80);
    }

    #[test]
    fn take_dirty_clears_flag() {
        let mut buf = InstanceBuffer::<ParticleInstance>::with_len(4);
        assert!(buf.take_dirty().is_some());
        assert!(buf.take_dirty().is_none());
        buf.as_mut_slice()[0].size = 1.0;
        assert_eq!(buf.take_dirty().map(|s| s.len()), Some(4));
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hue_to_rgb(0.0), [1.0, 0.0, 0.0]);
        let g = hue_to_rgb(1.0 / 3.0);
        assert!(g[1] > 0.99 && g[0] < 0.01 && g[2] < 0.01);
        let b = hue_to_rgb(2.0 / 3.0);
        assert!(b[2] > 0.99 && b[0] < 0.01 && b[1] < 0.01);
    }
}
