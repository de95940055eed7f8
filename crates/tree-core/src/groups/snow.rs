use glam::Vec3;
use rand::Rng;

use super::FrameInput;
use crate::constants::*;
use crate::render::{InstanceBuffer, ParticleInstance, SpriteShape};

/// Endless snowfall inside a fixed box; ignores the mode signal.
pub struct Snow {
    /// `x`, `z` rest position and the starting height `y0` in `[0, band)`.
    base: Vec<Vec3>,
    speed: Vec<f32>,
    phase: Vec<f32>,
    band_height: f32,
    buffer: InstanceBuffer<ParticleInstance>,
}

impl Snow {
    pub fn new<R: Rng + ?Sized>(count: usize, band_height: f32, rng: &mut R) -> Self {
        let half = SNOW_SPREAD * 0.5;
        let base: Vec<Vec3> = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen::<f32>() * band_height,
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        let speed = (0..count)
            .map(|_| rng.gen_range(SNOW_FALL_MIN..SNOW_FALL_MAX))
            .collect();
        let phase = (0..count)
            .map(|_| rng.gen::<f32>() * std::f32::consts::TAU)
            .collect();
        let mut buffer = InstanceBuffer::with_len(count);
        for inst in buffer.as_mut_slice() {
            *inst = ParticleInstance::new(
                Vec3::ZERO,
                SNOW_SIZE * rng.gen_range(0.6..1.4),
                [0.9, 0.95, 1.0, 0.8],
                SpriteShape::Flake,
            );
        }
        Self {
            base,
            speed,
            phase,
            band_height,
            buffer,
        }
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn band_height(&self) -> f32 {
        self.band_height
    }

    /// Position of flake `i` after `time` seconds.
    pub fn position_at(&self, i: usize, time: f64) -> Vec3 {
        let b = self.base[i];
        let fall = time * self.speed[i] as f64;
        // f64 keeps the wrap exact for very long sessions
        let wrapped = (b.y as f64 - fall).rem_euclid(self.band_height as f64) as f32;
        let y = wrapped.min(self.band_height) - self.band_height * 0.5;
        let t = time as f32;
        let phase = self.phase[i];
        Vec3::new(
            b.x + (t * 0.5 + phase).sin() * SNOW_SWAY,
            y,
            b.z + (t * 0.4 + phase).cos() * SNOW_SWAY,
        )
    }

    pub fn buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer<ParticleInstance> {
        &mut self.buffer
    }

    pub fn update(&mut self, input: &FrameInput) {
        for i in 0..self.base.len() {
            let p = self.position_at(i, input.time);
            self.buffer.as_mut_slice()[i].position = p.to_array();
        }
        self.buffer.mark_dirty();
    }
}
