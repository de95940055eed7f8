//! Procedural shape generation.
//!
//! Every tree group is built from two position sets of equal length: where a
//! particle sits on the assembled tree (`target`) and where it floats when the
//! tree is scattered (`scatter`). They share one index per particle and are
//! never modified after generation.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::constants::*;

/// Visual class of a particle, decided by its random seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    /// Top 5% of seeds.
    Accent,
    /// Next 45%.
    Bright,
    Base,
}

impl Bucket {
    #[inline]
    pub fn classify(seed: f32) -> Self {
        if seed >= ACCENT_THRESHOLD {
            Bucket::Accent
        } else if seed >= BRIGHT_THRESHOLD {
            Bucket::Bright
        } else {
            Bucket::Base
        }
    }
}

/// Cone parameters shared by foliage, ornaments and photo slots.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeShape {
    pub height: f32,
    pub base_radius: f32,
    pub turns: f32,
    pub taper: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            height: TREE_HEIGHT,
            base_radius: TREE_BASE_RADIUS,
            turns: FOLIAGE_WINDING_TURNS,
            taper: FOLIAGE_TAPER_EXPONENT,
        }
    }
}

impl TreeShape {
    /// Outer radius at normalised height `t` (0 = base, 1 = tip).
    #[inline]
    pub fn radius_at(&self, t: f32) -> f32 {
        (1.0 - t.clamp(0.0, 1.0).powf(self.taper)) * self.base_radius
    }

    /// World-space y for normalised height `t`.
    #[inline]
    pub fn y_at(&self, t: f32) -> f32 {
        t * self.height - self.height * 0.5
    }
}

/// Struct-of-arrays particle storage: one index across all columns.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    pub target: Vec<Vec3>,
    pub scatter: Vec<Vec3>,
    /// Uniform random in `[0, 1)`; drives bucket, size and phase.
    pub seed: Vec<f32>,
    pub bucket: Vec<Bucket>,
}

impl ParticleSet {
    /// Pair pre-computed target and scatter sets with fresh seeds.
    ///
    /// Panics if the two position sets differ in length.
    pub fn from_parts<R: Rng + ?Sized>(target: Vec<Vec3>, scatter: Vec<Vec3>, rng: &mut R) -> Self {
        assert_eq!(target.len(), scatter.len(), "target/scatter length mismatch");
        let seed = random_seeds(target.len(), rng);
        let bucket = seed.iter().copied().map(Bucket::classify).collect();
        Self {
            target,
            scatter,
            seed,
            bucket,
        }
    }

    /// Shell-sampled cone for the foliage plus a uniform scatter sphere.
    pub fn foliage<R: Rng + ?Sized>(n: usize, shape: &TreeShape, scatter_radius: f32, rng: &mut R) -> Self {
        let target = tree_shape(n, shape, rng);
        let scatter = scatter_shape(n, scatter_radius, rng);
        Self::from_parts(target, scatter, rng)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Blended position of particle `i`; never stored.
    #[inline]
    pub fn blended(&self, i: usize, blend: f32) -> Vec3 {
        self.scatter[i].lerp(self.target[i], blend)
    }
}

/// Dense winding cone. `y` sweeps linearly from `-H/2`; the radius favours the
/// outer shell so the tree reads as voluminous rather than solid.
pub fn tree_shape<R: Rng + ?Sized>(n: usize, shape: &TreeShape, rng: &mut R) -> Vec<Vec3> {
    let inv_n = 1.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let t = i as f32 * inv_n;
            let y = shape.y_at(t);
            let angle = t * shape.turns * TAU;
            let max_r = shape.radius_at(t);
            let r = max_r
                * (SHELL_INNER_FRACTION + (1.0 - SHELL_INNER_FRACTION) * rng.gen::<f32>().sqrt());
            Vec3::new(r * angle.cos(), y, r * angle.sin())
        })
        .collect()
}

/// Uniform-in-volume samples inside a sphere of radius `r_max`.
pub fn scatter_shape<R: Rng + ?Sized>(n: usize, r_max: f32, rng: &mut R) -> Vec<Vec3> {
    (0..n)
        .map(|_| {
            let r = r_max * rng.gen::<f32>().cbrt();
            sphere_direction(rng) * r
        })
        .collect()
}

/// Uniformly distributed unit vector.
#[inline]
pub fn sphere_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let azimuth = rng.gen::<f32>() * TAU;
    let polar = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        polar.sin() * azimuth.cos(),
        polar.cos(),
        polar.sin() * azimuth.sin(),
    )
}

pub fn random_seeds<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f32> {
    (0..n).map(|_| rng.gen::<f32>()).collect()
}

/// Golden-angle spiral just inside the foliage shell.
pub fn ornament_spiral(n: usize, shape: &TreeShape) -> Vec<Vec3> {
    let span = ORNAMENT_HEIGHT_MAX_FRACTION - ORNAMENT_HEIGHT_MIN_FRACTION;
    (0..n)
        .map(|i| {
            let t = ORNAMENT_HEIGHT_MIN_FRACTION + span * (i as f32 + 0.5) / n as f32;
            let r = shape.radius_at(t) * ORNAMENT_SURFACE_FRACTION;
            let angle = i as f32 * GOLDEN_ANGLE;
            Vec3::new(r * angle.cos(), shape.y_at(t), r * angle.sin())
        })
        .collect()
}

/// Photo slots: ascending height, shrinking radius, increasing azimuth.
pub fn photo_spiral(count: usize, shape: &TreeShape) -> Vec<Vec3> {
    let span = PHOTO_HEIGHT_MAX_FRACTION - PHOTO_HEIGHT_MIN_FRACTION;
    let denom = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| {
            let t = PHOTO_HEIGHT_MIN_FRACTION + span * i as f32 / denom;
            let r = shape.radius_at(t) + PHOTO_RADIUS_OFFSET;
            let angle = i as f32 * PHOTO_AZIMUTH_STEP;
            Vec3::new(r * angle.cos(), shape.y_at(t), r * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bucket_thresholds() {
        assert_eq!(Bucket::classify(0.99), Bucket::Accent);
        assert_eq!(Bucket::classify(0.95), Bucket::Accent);
        assert_eq!(Bucket::classify(0.94), Bucket::Bright);
        assert_eq!(Bucket::classify(0.5), Bucket::Bright);
        assert_eq!(Bucket::classify(0.49), Bucket::Base);
        assert_eq!(Bucket::classify(0.0), Bucket::Base);
    }

    #[test]
    fn tree_radius_stays_within_shell() {
        let mut rng = StdRng::seed_from_u64(3);
        let shape = TreeShape::default();
        let n = 5_000;
        for (i, p) in tree_shape(n, &shape, &mut rng).iter().enumerate() {
            let t = i as f32 / n as f32;
            let max_r = shape.radius_at(t);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r <= max_r + 1e-4, "particle {i} outside cone");
            assert!(r >= max_r * SHELL_INNER_FRACTION - 1e-4, "particle {i} inside hollow core");
        }
    }

    #[test]
    fn photo_spiral_ascends_and_narrows() {
        let shape = TreeShape::default();
        let slots = photo_spiral(PHOTO_SLOT_COUNT, &shape);
        assert_eq!(slots.len(), PHOTO_SLOT_COUNT);
        for w in slots.windows(2) {
            let r0 = (w[0].x * w[0].x + w[0].z * w[0].z).sqrt();
            let r1 = (w[1].x * w[1].x + w[1].z * w[1].z).sqrt();
            assert!(w[1].y > w[0].y);
            assert!(r1 < r0);
        }
    }

    #[test]
    fn ornament_spiral_is_deterministic() {
        let shape = TreeShape::default();
        assert_eq!(ornament_spiral(50, &shape), ornament_spiral(50, &shape));
    }
}
