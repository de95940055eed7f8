//! Photo ornaments: nine framed pictures hung on a spiral around the tree.
//!
//! A slot normally follows the shared scatter/tree transition and faces
//! outward from the trunk. The focused slot instead glides to a point in
//! front of the camera, grows, and turns to face the viewer. Hover is purely
//! cosmetic.

use std::f32::consts::PI;

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

use super::FrameInput;
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::generator::{photo_spiral, scatter_shape};
use crate::render::{InstanceBuffer, PhotoInstance};
use crate::transition::{Smoothing, Transition};

#[derive(Clone, Debug)]
pub struct PhotoSlot {
    pub index: usize,
    pub target: Vec3,
    pub scatter: Vec3,
    /// Where the slot is drawn this frame.
    pub position: Vec3,
    pub scale: f32,
    pub rotation: Quat,
    /// Still gliding back from the focus point.
    returning: bool,
}

impl PhotoSlot {
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }

    /// Model matrix stretched to the frame size; the shader draws a
    /// `[-1, 1]` quad.
    pub fn quad_matrix(&self) -> Mat4 {
        self.model_matrix() * Mat4::from_scale(Vec3::new(PHOTO_WIDTH * 0.5, PHOTO_HEIGHT * 0.5, 1.0))
    }

    pub fn pick_radius(&self) -> f32 {
        PHOTO_PICK_RADIUS * self.scale
    }
}

pub struct PhotoSlots {
    slots: Vec<PhotoSlot>,
    transition: Transition,
    hover: Option<usize>,
    smoothing: Smoothing,
    buffer: InstanceBuffer<PhotoInstance>,
}

impl PhotoSlots {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let count = config.photo_slots;
        let targets = photo_spiral(count, &config.tree);
        // keep scattered photos in the inner half of the cloud so they stay on screen
        let scatters = scatter_shape(count, config.scatter_radius * 0.5, rng);
        let slots = targets
            .into_iter()
            .zip(scatters)
            .enumerate()
            .map(|(index, (target, scatter))| PhotoSlot {
                index,
                target,
                scatter,
                position: scatter,
                scale: 1.0,
                rotation: Quat::IDENTITY,
                returning: false,
            })
            .collect();
        Self {
            slots,
            transition: Transition::with_smoothing(config.photo_smoothing, config.smoothing),
            hover: None,
            smoothing: config.smoothing,
            buffer: InstanceBuffer::with_len(count),
        }
    }

    pub fn slots(&self) -> &[PhotoSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.hover = hover.filter(|i| *i < self.slots.len());
    }

    pub fn buffer(&self) -> &InstanceBuffer<PhotoInstance> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut InstanceBuffer<PhotoInstance> {
        &mut self.buffer
    }

    pub fn update(&mut self, input: &FrameInput, focused: Option<usize>, camera: &Camera) {
        self.transition.step_dt(input.mode, input.dt);
        let blend = self.transition.blend();
        let time = input.time as f32;
        let focus_point = camera.point_in_front(PHOTO_FOCUS_DISTANCE);
        let facing_camera = camera.orientation();
        let hover = self.hover;
        let focus_k = self.smoothing.factor(FOCUS_SMOOTHING, input.dt);
        let scale_k = self.smoothing.factor(SCALE_SMOOTHING, input.dt);

        for (slot, inst) in self.slots.iter_mut().zip(self.buffer.as_mut_slice()) {
            if focused == Some(slot.index) {
                slot.position = slot.position.lerp(focus_point, focus_k);
                slot.scale += (PHOTO_FOCUS_SCALE - slot.scale) * focus_k;
                slot.rotation = facing_camera;
                slot.returning = true;
            } else {
                let placed = slot.scatter.lerp(slot.target, blend);
                if slot.returning {
                    slot.position = slot.position.lerp(placed, focus_k);
                    if slot.position.distance(placed) < RETURN_TOLERANCE {
                        slot.returning = false;
                        slot.position = placed;
                    }
                } else {
                    slot.position = placed;
                }
                let euler = blended_euler(slot.index, time, slot.position, blend);
                slot.rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);
                let want = if hover == Some(slot.index) {
                    PHOTO_HOVER_SCALE
                } else {
                    1.0
                };
                slot.scale += (want - slot.scale) * scale_k;
            }

            let highlight = if focused == Some(slot.index) || hover == Some(slot.index) {
                1.15
            } else {
                1.0
            };
            *inst = PhotoInstance {
                model: slot.quad_matrix().to_cols_array_2d(),
                tint: [highlight, highlight, highlight, 1.0],
            };
        }
    }
}

/// Upright, facing away from the trunk: look at the axis point at the slot's
/// own height, then turn half a revolution. Returned as `(pitch, yaw, roll)`.
pub fn outward_euler(position: Vec3) -> Vec3 {
    let to_axis = Vec3::new(-position.x, 0.0, -position.z);
    let look_yaw = to_axis.x.atan2(to_axis.z);
    Vec3::new(0.0, look_yaw + PI, 0.0)
}

/// Gentle drifting orientation used while the tree is scattered.
pub fn scatter_euler(index: usize, time: f32) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (time * 0.6 + i).sin() * PHOTO_SCATTER_PITCH,
        (time * 0.4 + i * 1.7).cos() * PHOTO_SCATTER_YAW,
        (time * 0.5 + i * 0.9).sin() * PHOTO_SCATTER_ROLL,
    )
}

/// Component-wise mix of the scatter and outward angles by the eased blend.
pub fn blended_euler(index: usize, time: f32, position: Vec3, blend: f32) -> Vec3 {
    scatter_euler(index, time).lerp(outward_euler(position), blend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outward_face_points_away_from_axis() {
        for p in [
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(-2.0, 4.0, 2.0),
            Vec3::new(0.5, -3.0, -4.0),
        ] {
            let e = outward_euler(p);
            let q = Quat::from_euler(EulerRot::XYZ, e.x, e.y, e.z);
            let face = q * Vec3::Z;
            let radial = Vec3::new(p.x, 0.0, p.z).normalize();
            assert!(face.dot(radial) > 0.9999, "face {face:?} not outward at {p:?}");
            // upright: local up stays world up
            assert!((q * Vec3::Y).dot(Vec3::Y) > 0.9999);
        }
    }

    #[test]
    fn fully_assembled_orientation_ignores_time() {
        let p = Vec3::new(2.0, 0.0, 2.0);
        assert_eq!(blended_euler(3, 0.0, p, 1.0), blended_euler(3, 57.0, p, 1.0));
    }

    #[test]
    fn scattered_orientation_drifts_over_time() {
        let p = Vec3::new(2.0, 0.0, 2.0);
        assert_ne!(blended_euler(3, 0.0, p, 0.0), blended_euler(3, 1.0, p, 0.0));
    }

    #[test]
    fn quad_corner_lands_on_frame_corner() {
        let rotation = Quat::from_rotation_y(0.7);
        let slot = PhotoSlot {
            index: 0,
            target: Vec3::ZERO,
            scatter: Vec3::ZERO,
            position: Vec3::new(1.0, 2.0, 3.0),
            scale: 2.0,
            rotation,
            returning: false,
        };
        let corner = slot.quad_matrix().transform_point3(Vec3::new(1.0, 1.0, 0.0));
        let expected = slot.position + rotation * Vec3::new(PHOTO_WIDTH, PHOTO_HEIGHT, 0.0);
        assert!(corner.distance(expected) < 1e-5, "{corner:?} vs {expected:?}");
    }
}
