//! Short-lived firework bursts.
//!
//! A burst carries its own birth time and is dropped by [`Fireworks::update`]
//! once its age passes [`FIREWORK_LIFETIME`]; no timers are involved, so
//! tearing the scene down leaves nothing pending.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::*;
use crate::generator::sphere_direction;
use crate::render::{hue_to_rgb, scale_rgb, InstanceBuffer, ParticleInstance, SpriteShape};

#[derive(Clone, Debug)]
pub struct Burst {
    pub born: f64,
    pub origin: Vec3,
    pub hue: f32,
    pub velocities: Vec<Vec3>,
}

impl Burst {
    pub fn new<R: Rng + ?Sized>(born: f64, origin: Vec3, hue: f32, particles: usize, rng: &mut R) -> Self {
        let velocities = (0..particles)
            .map(|_| sphere_direction(rng) * rng.gen_range(FIREWORK_SPEED_MIN..FIREWORK_SPEED_MAX))
            .collect();
        Self {
            born,
            origin,
            hue,
            velocities,
        }
    }

    /// Seconds since birth, never negative.
    pub fn age(&self, now: f64) -> f32 {
        (now - self.born).max(0.0) as f32
    }

    pub fn is_alive(&self, now: f64) -> bool {
        self.age(now) < FIREWORK_LIFETIME
    }

    pub fn particle_position(&self, i: usize, age: f32) -> Vec3 {
        self.origin + self.velocities[i] * age * FIREWORK_SPEED_SCALE
            - Vec3::Y * FIREWORK_GRAVITY * age * age
    }

    /// Sprite size at `age`; zero at the end of the lifetime.
    pub fn size_at(age: f32) -> f32 {
        FIREWORK_SIZE * (1.0 - age / FIREWORK_LIFETIME).clamp(0.0, 1.0)
    }
}

pub struct Fireworks {
    bursts: SmallVec<[Burst; 4]>,
    particles_per_burst: usize,
    rng: StdRng,
    buffer: InstanceBuffer<ParticleInstance>,
}

impl Fireworks {
    pub fn new(particles_per_burst: usize, rng: StdRng) -> Self {
        Self {
            bursts: SmallVec::new(),
            particles_per_burst,
            rng,
            buffer: InstanceBuffer::with_capacity(particles_per_burst * CELEBRATION_BURSTS_MAX),
        }
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    /// Any burst still within its lifetime at `now`.
    pub fn is_active(&self, now: f64) -> bool {
        self.bursts.iter().any(|b| b.is_alive(now))
    }

    pub fn spawn(&mut self, now: f64, origin: Vec3, hue: f32) {
        let burst = Burst::new(now, origin, hue, self.particles_per_burst, &mut self.rng);
        self.bursts.push(burst);
    }

    /// Fires 2–3 bursts around the tree unless a celebration is still
    /// running. Returns how many were spawned.
    pub fn celebrate(&mut self, now: f64) -> usize {
        if self.is_active(now) {
            log::debug!("[fireworks] celebration already running");
            return 0;
        }
        let count = self
            .rng
            .gen_range(CELEBRATION_BURSTS_MIN..=CELEBRATION_BURSTS_MAX);
        let centre = Vec3::from(CELEBRATION_CENTER);
        let spread = Vec3::from(CELEBRATION_SPREAD);
        for _ in 0..count {
            let jitter = Vec3::new(
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
            );
            let hue = self.rng.gen::<f32>();
            self.spawn(now, centre + jitter * spread, hue);
        }
        log::info!("[fireworks] celebration with {count} bursts");
        count
    }

    /// Drops expired bursts and rewrites the sprite buffer.
    pub fn update(&mut self, now: f64) {
        let before = self.bursts.len();
        self.bursts.retain(|b| b.is_alive(now));
        if before == 0 && self.buffer.is_empty() {
            return;
        }
        self.buffer.clear();
        for burst in &self.bursts {
            let age = burst.age(now);
            let size = Burst::size_at(age);
            let fade = 1.0 - age / FIREWORK_LIFETIME;
            let color = scale_rgb(hue_to_rgb(burst.hue), FIREWORK_BRIGHTNESS, fade);
            for i in 0..burst.velocities.len() {
                self.buffer.push(ParticleInstance::new(
                    burst.particle_position(i, age),
                    size,
                    color,
                    SpriteShape::Spark,
                ));
            }
        }
    }

    pub fn buffer(&self) -> &InstanceBuffer<ParticleInstance> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer<ParticleInstance> {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn fireworks() -> Fireworks {
        Fireworks::new(16, StdRng::seed_from_u64(7))
    }

    #[test]
    fn burst_expires_after_lifetime() {
        let mut fw = fireworks();
        fw.spawn(10.0, Vec3::ZERO, 0.3);
        fw.update(11.0);
        assert_eq!(fw.len(), 1);
        assert_eq!(fw.buffer().len(), 16);
        fw.update(11.6);
        assert!(fw.is_empty());
        assert!(fw.buffer().is_empty());
    }

    #[test]
    fn celebration_is_edge_triggered() {
        let mut fw = fireworks();
        let n = fw.celebrate(0.0);
        assert!((CELEBRATION_BURSTS_MIN..=CELEBRATION_BURSTS_MAX).contains(&n));
        assert_eq!(fw.celebrate(0.5), 0);
        assert_eq!(fw.len(), n);
        fw.update(2.0);
        assert!(fw.celebrate(2.0) > 0);
    }

    #[test]
    fn sparks_fall_and_shrink() {
        let burst = Burst {
            born: 0.0,
            origin: Vec3::ZERO,
            hue: 0.0,
            velocities: vec![Vec3::ZERO],
        };
        assert!(burst.particle_position(0, 1.0).y < 0.0);
        assert!(Burst::size_at(1.0) < Burst::size_at(0.2));
        assert_eq!(Burst::size_at(FIREWORK_LIFETIME), 0.0);
    }
}
