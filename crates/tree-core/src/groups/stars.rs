use rand::Rng;

use super::FrameInput;
use crate::constants::*;
use crate::generator::sphere_direction;
use crate::render::{InstanceBuffer, ParticleInstance, SpriteShape};

/// Static twinkling backdrop on a thick spherical shell around the scene.
pub struct Stars {
    phase: Vec<f32>,
    speed: Vec<f32>,
    buffer: InstanceBuffer<ParticleInstance>,
}

impl Stars {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut buffer = InstanceBuffer::with_len(count);
        let mut phase = Vec::with_capacity(count);
        let mut speed = Vec::with_capacity(count);
        for inst in buffer.as_mut_slice() {
            let r = rng.gen_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
            let pos = sphere_direction(rng) * r;
            *inst = ParticleInstance::new(
                pos,
                STAR_SIZE * rng.gen_range(0.5..1.5),
                [1.0, 1.0, 1.0, 1.0],
                SpriteShape::Glow,
            );
            phase.push(rng.gen::<f32>() * std::f32::consts::TAU);
            speed.push(rng.gen_range(0.5..2.0));
        }
        Self {
            phase,
            speed,
            buffer,
        }
    }

    pub fn len(&self) -> usize {
        self.phase.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }

    pub fn buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer<ParticleInstance> {
        &mut self.buffer
    }

    pub fn update(&mut self, input: &FrameInput) {
        let t = input.time as f32;
        for (i, inst) in self.buffer.as_mut_slice().iter_mut().enumerate() {
            let b = 0.6 + 0.4 * (t * self.speed[i] + self.phase[i]).sin();
            inst.color = [b, b, b * 1.05, 1.0];
        }
    }
}
