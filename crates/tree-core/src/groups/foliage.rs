use glam::Vec3;
use rand::Rng;

use super::FrameInput;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::generator::{Bucket, ParticleSet};
use crate::render::{scale_rgb, InstanceBuffer, ParticleInstance, SpriteShape};
use crate::transition::Transition;

/// The needle cloud that forms the body of the tree.
pub struct Foliage {
    particles: ParticleSet,
    transition: Transition,
    buffer: InstanceBuffer<ParticleInstance>,
}

impl Foliage {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let particles = ParticleSet::foliage(
            config.foliage_count,
            &config.tree,
            config.scatter_radius,
            rng,
        );
        let mut buffer = InstanceBuffer::with_len(particles.len());
        for (i, inst) in buffer.as_mut_slice().iter_mut().enumerate() {
            let seed = particles.seed[i];
            *inst = ParticleInstance::new(
                particles.scatter[i],
                size_for(particles.bucket[i], seed),
                color_for(particles.bucket[i], seed, 0.0),
                SpriteShape::Glow,
            );
        }
        Self {
            particles,
            transition: Transition::with_smoothing(config.foliage_smoothing, config.smoothing),
            buffer,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer<ParticleInstance> {
        &mut self.buffer
    }

    pub fn update(&mut self, input: &FrameInput) {
        self.transition.step_dt(input.mode, input.dt);
        let blend = self.transition.blend();
        let time = input.time as f32;
        let calm = 1.0 - blend * WIND_ASSEMBLED_DAMPING;
        let p = &self.particles;
        for (i, inst) in self.buffer.as_mut_slice().iter_mut().enumerate() {
            let pos = p.blended(i, blend);
            let sway = wind(time, pos) * calm;
            inst.position = (pos + Vec3::new(sway, 0.0, sway * 0.5)).to_array();
            if p.bucket[i] == Bucket::Accent {
                inst.color = color_for(Bucket::Accent, p.seed[i], time);
            }
        }
    }
}

/// Horizontal wind offset before damping.
#[inline]
pub fn wind(time: f32, pos: Vec3) -> f32 {
    (time * WIND_TIME_SCALE + pos.y * WIND_HEIGHT_SCALE + pos.x).sin() * WIND_AMPLITUDE
}

fn size_for(bucket: Bucket, seed: f32) -> f32 {
    let base = FOLIAGE_SIZE * (0.6 + 0.8 * seed);
    match bucket {
        Bucket::Accent => base * ACCENT_SIZE_BOOST,
        _ => base,
    }
}

fn color_for(bucket: Bucket, seed: f32, time: f32) -> [f32; 4] {
    match bucket {
        Bucket::Accent => {
            let twinkle = 0.7 + 0.3 * (time * TWINKLE_SPEED + seed * 97.0).sin();
            scale_rgb(FOLIAGE_ACCENT_COLOR, twinkle, 1.0)
        }
        Bucket::Bright => scale_rgb(FOLIAGE_BRIGHT_COLOR, 0.8 + 0.4 * seed, 0.9),
        Bucket::Base => scale_rgb(FOLIAGE_BASE_COLOR, 0.8 + 0.4 * seed, 0.85),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> SceneConfig {
        SceneConfig {
            foliage_count: 400,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn sway_is_calmer_when_assembled() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut foliage = Foliage::new(&small_config(), &mut rng);
        // drive far into the assembled state
        for _ in 0..2_000 {
            foliage.update(&FrameInput { time: 0.0, dt: 1.0 / 60.0, mode: 1.0 });
        }
        let blend = foliage.transition().blend();
        assert!(blend > 0.999);
        let p = foliage.particles();
        for (i, inst) in foliage.buffer().as_slice().iter().enumerate() {
            let rendered = Vec3::from_array(inst.position);
            let offset = (rendered - p.blended(i, blend)).length();
            // full sway amplitude is sqrt(1.25) * WIND_AMPLITUDE
            assert!(offset <= 1.25f32.sqrt() * WIND_AMPLITUDE * 0.41);
        }
    }

    #[test]
    fn update_marks_buffer_dirty() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut foliage = Foliage::new(&small_config(), &mut rng);
        foliage.buffer_mut().take_dirty();
        assert!(!foliage.buffer().is_dirty());
        foliage.update(&FrameInput { time: 0.5, dt: 1.0 / 60.0, mode: 0.0 });
        assert!(foliage.buffer().is_dirty());
    }
}
