//! Camera description shared with the web renderer.
//!
//! The camera is fixed for the whole session; the scene reads it to place the
//! focused photo in front of the viewer and to turn pointer positions into
//! picking rays.

use glam::{Mat4, Quat, Vec3, Vec4};

use crate::constants::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::from_array(CAMERA_TARGET),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    /// World rotation of the camera. An object given this rotation shows its
    /// local +Z face to the viewer.
    pub fn orientation(&self) -> Quat {
        Quat::from_mat4(&self.view_matrix().inverse()).normalize()
    }

    /// Point `distance` units along the view direction.
    #[inline]
    pub fn point_in_front(&self, distance: f32) -> Vec3 {
        self.eye + self.forward() * distance
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World-space ray through normalised device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the eye.
    pub fn screen_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}

/// Pixel coordinates in a `width x height` backing store to NDC.
#[inline]
pub fn pixel_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> (f32, f32) {
    let w = width.max(1.0);
    let h = height.max(1.0);
    ((2.0 * sx / w) - 1.0, 1.0 - (2.0 * sy / h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_ray_points_at_target() {
        let cam = Camera::default();
        let (ro, rd) = cam.screen_ray(0.0, 0.0);
        assert_eq!(ro, cam.eye);
        assert!(rd.dot(cam.forward()) > 0.9999);
    }

    #[test]
    fn orientation_faces_viewer() {
        let cam = Camera::default();
        let normal = cam.orientation() * Vec3::Z;
        // the +Z face points back along the view direction
        assert!(normal.dot(-cam.forward()) > 0.9999);
    }

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
    }
}
