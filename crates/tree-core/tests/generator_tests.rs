// Shape generation: counts, tree height band, scatter volume distribution.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::generator::{photo_spiral, scatter_shape, tree_shape, ParticleSet, TreeShape};

#[test]
fn generators_return_requested_count() {
    let shape = TreeShape::default();
    let mut rng = StdRng::seed_from_u64(3);
    for n in [0, 1, 17, 15_000] {
        assert_eq!(tree_shape(n, &shape, &mut rng).len(), n);
        assert_eq!(scatter_shape(n, 25.0, &mut rng).len(), n);
    }
    assert_eq!(photo_spiral(9, &shape).len(), 9);
}

#[test]
fn tree_height_spans_band() {
    let shape = TreeShape::default();
    let half = shape.height * 0.5;
    let mut rng = StdRng::seed_from_u64(11);
    let pts = tree_shape(5_000, &shape, &mut rng);

    assert!((pts[0].y + half).abs() < 1e-5, "first sample at {}", pts[0].y);
    for p in &pts {
        assert!(p.y >= -half - 1e-5 && p.y <= half + 1e-5, "y = {}", p.y);
    }
    // heights ascend with the index
    assert!(pts.windows(2).all(|w| w[1].y >= w[0].y));
}

#[test]
fn tree_narrows_towards_the_top() {
    let shape = TreeShape::default();
    let mut rng = StdRng::seed_from_u64(5);
    let pts = tree_shape(4_000, &shape, &mut rng);
    let radial = |p: &glam::Vec3| (p.x * p.x + p.z * p.z).sqrt();
    let low = pts[..400].iter().map(radial).fold(0.0f32, f32::max);
    let high = pts[3_600..].iter().map(radial).fold(0.0f32, f32::max);
    assert!(high < low * 0.5, "top {high} vs bottom {low}");
}

#[test]
fn scatter_is_uniform_in_volume() {
    let r = 25.0;
    let mut rng = StdRng::seed_from_u64(42);
    let pts = scatter_shape(200_000, r, &mut rng);
    let inner = pts.iter().filter(|p| p.length() < r * 0.5).count();
    let fraction = inner as f64 / pts.len() as f64;
    assert!((fraction - 0.125).abs() < 0.01, "fraction {fraction}");
    assert!(pts.iter().all(|p| p.length() <= r + 1e-3));
}

#[test]
fn photo_spiral_rises_and_narrows() {
    let shape = TreeShape::default();
    let slots = photo_spiral(9, &shape);
    for w in slots.windows(2) {
        let r0 = (w[0].x * w[0].x + w[0].z * w[0].z).sqrt();
        let r1 = (w[1].x * w[1].x + w[1].z * w[1].z).sqrt();
        assert!(w[1].y > w[0].y);
        assert!(r1 < r0);
    }
}

#[test]
fn particle_set_arrays_stay_parallel() {
    let mut rng = StdRng::seed_from_u64(9);
    let set = ParticleSet::foliage(1_000, &TreeShape::default(), 25.0, &mut rng);
    assert_eq!(set.len(), 1_000);
    assert_eq!(set.scatter.len(), set.target.len());
    assert_eq!(set.seed.len(), set.target.len());
    assert_eq!(set.bucket.len(), set.target.len());
    assert!(set.seed.iter().all(|s| (0.0..1.0).contains(s)));
    assert_eq!(set.blended(10, 0.0), set.scatter[10]);
    assert!(set.blended(10, 1.0).distance(set.target[10]) < 1e-4);
}
