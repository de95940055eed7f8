use rand::Rng;

use super::FrameInput;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::generator::{ornament_spiral, scatter_shape, ParticleSet};
use crate::render::{InstanceBuffer, ParticleInstance, SpriteShape};
use crate::transition::Transition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Bauble,
    Gift,
    Light,
}

impl OrnamentKind {
    pub fn from_seed(seed: f32) -> Self {
        if seed < 0.6 {
            OrnamentKind::Bauble
        } else if seed < 0.85 {
            OrnamentKind::Gift
        } else {
            OrnamentKind::Light
        }
    }

    fn shape(self) -> SpriteShape {
        match self {
            OrnamentKind::Bauble => SpriteShape::Bauble,
            OrnamentKind::Gift => SpriteShape::Gift,
            OrnamentKind::Light => SpriteShape::Glow,
        }
    }

    fn size(self) -> f32 {
        match self {
            OrnamentKind::Bauble => BAUBLE_SIZE,
            OrnamentKind::Gift => GIFT_SIZE,
            OrnamentKind::Light => LIGHT_SIZE,
        }
    }
}

const BAUBLE_COLORS: [[f32; 4]; 4] = [
    [0.85, 0.08, 0.10, 1.0], // red
    [1.00, 0.75, 0.20, 1.0], // gold
    [0.80, 0.82, 0.90, 1.0], // silver
    [0.55, 0.05, 0.25, 1.0], // berry
];

const GIFT_COLORS: [[f32; 4]; 3] = [
    [0.80, 0.10, 0.12, 1.0],
    [0.10, 0.45, 0.20, 1.0],
    [0.20, 0.30, 0.75, 1.0],
];

const LIGHT_COLOR: [f32; 4] = [2.4, 2.0, 1.3, 1.0]; // warm HDR white

/// Baubles, gift boxes and fairy lights hung on the tree.
pub struct Ornaments {
    particles: ParticleSet,
    kind: Vec<OrnamentKind>,
    /// Radians added to `angle` every frame.
    spin: Vec<f32>,
    angle: Vec<f32>,
    transition: Transition,
    buffer: InstanceBuffer<ParticleInstance>,
}

impl Ornaments {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let n = config.ornament_count;
        let target = ornament_spiral(n, &config.tree);
        let scatter = scatter_shape(n, config.scatter_radius, rng);
        let particles = ParticleSet::from_parts(target, scatter, rng);

        let kind: Vec<_> = particles.seed.iter().map(|s| OrnamentKind::from_seed(*s)).collect();
        let spin = (0..n)
            .map(|_| rng.gen_range(ORNAMENT_SPIN_MIN..ORNAMENT_SPIN_MAX))
            .collect();
        let angle = (0..n).map(|_| rng.gen::<f32>() * std::f32::consts::TAU).collect();

        let mut buffer = InstanceBuffer::with_len(n);
        for (i, inst) in buffer.as_mut_slice().iter_mut().enumerate() {
            let k = kind[i];
            let color = match k {
                OrnamentKind::Bauble => BAUBLE_COLORS[rng.gen_range(0..BAUBLE_COLORS.len())],
                OrnamentKind::Gift => GIFT_COLORS[rng.gen_range(0..GIFT_COLORS.len())],
                OrnamentKind::Light => LIGHT_COLOR,
            };
            *inst = ParticleInstance::new(particles.scatter[i], k.size(), color, k.shape());
        }

        Self {
            particles,
            kind,
            spin,
            angle,
            transition: Transition::with_smoothing(config.ornament_smoothing, config.smoothing),
            buffer,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn kind(&self, i: usize) -> OrnamentKind {
        self.kind[i]
    }

    pub fn angle(&self, i: usize) -> f32 {
        self.angle[i]
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
        let p = &self.particles;
        for (i, inst) in self.buffer.as_mut_slice().iter_mut().enumerate() {
            // unbounded; the shader only feeds it to sin/cos
            self.angle[i] += self.spin[i];
            inst.position = p.blended(i, blend).to_array();
            inst.rotation = self.angle[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rotation_accumulates_by_fixed_rate() {
        let mut rng = StdRng::seed_from_u64(9);
        let cfg = SceneConfig {
            ornament_count: 20,
            ..SceneConfig::default()
        };
        let mut orn = Ornaments::new(&cfg, &mut rng);
        let start: Vec<f32> = (0..orn.len()).map(|i| orn.angle(i)).collect();
        let input = FrameInput { time: 0.0, dt: 1.0 / 60.0, mode: 1.0 };
        for _ in 0..10 {
            orn.update(&input);
        }
        for (i, a0) in start.iter().enumerate() {
            let delta = orn.angle(i) - a0;
            assert!(delta >= ORNAMENT_SPIN_MIN * 10.0 - 1e-4);
            assert!(delta <= ORNAMENT_SPIN_MAX * 10.0 + 1e-4);
            assert_eq!(orn.buffer().as_slice()[i].rotation, orn.angle(i));
        }
    }

    #[test]
    fn kinds_follow_seed() {
        assert_eq!(OrnamentKind::from_seed(0.1), OrnamentKind::Bauble);
        assert_eq!(OrnamentKind::from_seed(0.7), OrnamentKind::Gift);
        assert_eq!(OrnamentKind::from_seed(0.9), OrnamentKind::Light);
    }
}
