use glam::Vec3;

use crate::groups::PhotoSlot;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Distance along the ray to the plane `z = plane_z`, if in front of the origin.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<f32> {
    if ray_dir.z.abs() <= 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then_some(t)
}

/// Index of the closest sphere hit by the ray.
pub fn nearest_sphere<I>(ray_origin: Vec3, ray_dir: Vec3, spheres: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, Vec3, f32)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, center, radius) in spheres {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Photo slot under the ray, sized by its current scale.
pub fn pick_slot(ray_origin: Vec3, ray_dir: Vec3, slots: &[PhotoSlot]) -> Option<usize> {
    nearest_sphere(
        ray_origin,
        ray_dir,
        slots.iter().map(|s| (s.index, s.position, s.pick_radius())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_sphere_prefers_closer_hit() {
        let spheres = [
            (0, Vec3::new(0.0, 0.0, -10.0), 1.0),
            (1, Vec3::new(0.0, 0.0, -5.0), 1.0),
            (2, Vec3::new(5.0, 0.0, -5.0), 1.0),
        ];
        let hit = nearest_sphere(Vec3::ZERO, Vec3::NEG_Z, spheres);
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn plane_behind_origin_is_missed() {
        assert_eq!(ray_plane_z(Vec3::ZERO, Vec3::Z, -3.0), None);
        assert_eq!(ray_plane_z(Vec3::ZERO, Vec3::NEG_Z, -3.0), Some(3.0));
        assert_eq!(ray_plane_z(Vec3::ZERO, Vec3::X, -3.0), None);
    }
}
