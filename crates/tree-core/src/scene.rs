//! Scene composer: owns the mode signal, focus, the photo queue and every
//! particle group, and turns user actions into state changes.
//!
//! Groups only ever see a read-only [`FrameInput`]; all writes go through the
//! action methods here, called from input handlers between frames.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::Result;
use crate::focus::{FocusChange, FocusController};
use crate::groups::{Fireworks, Foliage, FrameInput, Ornaments, PhotoSlots, Snow, Stars};
use crate::photos::{ImageId, PhotoQueue};
use crate::pick::{pick_slot, ray_plane_z};
use crate::render::{InstanceBuffer, Layer, ParticleInstance, PhotoInstance};

/// Scattered cloud or assembled tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Scattered,
    Assembled,
}

impl Mode {
    /// Target value fed to every transition.
    pub fn signal(self) -> f32 {
        match self {
            Mode::Scattered => 0.0,
            Mode::Assembled => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Scattered => Mode::Assembled,
            Mode::Assembled => Mode::Scattered,
        }
    }
}

/// Result of a pointer click routed through [`Scene::pointer_click`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Slot(FocusChange),
    Background(FocusChange),
    Miss,
}

pub struct Scene {
    config: SceneConfig,
    mode: Mode,
    focus: FocusController,
    photos: PhotoQueue,
    next_image: u64,
    camera: Camera,
    foliage: Foliage,
    ornaments: Ornaments,
    slots: PhotoSlots,
    snow: Snow,
    stars: Stars,
    fireworks: Fireworks,
    time: f64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let foliage = Foliage::new(&config, &mut rng);
        let ornaments = Ornaments::new(&config, &mut rng);
        let slots = PhotoSlots::new(&config, &mut rng);
        let snow = Snow::new(config.snow_count, SNOW_BAND_HEIGHT, &mut rng);
        let stars = Stars::new(config.star_count, &mut rng);
        let fireworks = Fireworks::new(config.firework_particles, StdRng::seed_from_u64(rng.gen()));
        log::info!(
            "[scene] {} foliage, {} ornaments, {} slots, {} snow, {} stars",
            config.foliage_count,
            config.ornament_count,
            config.photo_slots,
            config.snow_count,
            config.star_count
        );
        Ok(Self {
            mode: Mode::default(),
            focus: FocusController::new(config.photo_slots),
            photos: PhotoQueue::new(config.photo_slots),
            next_image: 0,
            camera: Camera::default(),
            foliage,
            ornaments,
            slots,
            snow,
            stars,
            fireworks,
            time: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("[scene] mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Click on slot `index`; a slot that becomes focused sets off fireworks.
    pub fn click_slot(&mut self, index: usize, now: f64) -> Result<FocusChange> {
        let change = self.focus.click_slot(index)?;
        if change.newly_focused().is_some() {
            self.fireworks.celebrate(now);
        }
        Ok(change)
    }

    pub fn click_background(&mut self) -> FocusChange {
        self.focus.click_background()
    }

    pub fn clear_focus(&mut self) -> FocusChange {
        self.focus.click_background()
    }

    pub fn hover(&self) -> Option<usize> {
        self.slots.hover()
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.slots.set_hover(hover);
    }

    /// Fresh id for an image the front end is about to load.
    pub fn allocate_image_id(&mut self) -> ImageId {
        let id = ImageId(self.next_image);
        self.next_image += 1;
        id
    }

    /// Appends uploaded images, returning the ids pushed out of the queue.
    /// Uploading anything while scattered assembles the tree.
    pub fn upload<I: IntoIterator<Item = ImageId>>(&mut self, ids: I) -> Vec<ImageId> {
        let before = self.photos.len();
        let evicted = self.photos.extend(ids);
        let added = self.photos.len() - before + evicted.len();
        if added > 0 && self.mode == Mode::Scattered {
            self.set_mode(Mode::Assembled);
        }
        evicted
    }

    pub fn photos(&self) -> &PhotoQueue {
        &self.photos
    }

    pub fn image_for_slot(&self, slot: usize) -> Option<ImageId> {
        self.photos.image_for_slot(slot)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Slot under the ray, nearest first.
    pub fn pick(&self, origin: Vec3, dir: Vec3) -> Option<usize> {
        pick_slot(origin, dir, self.slots.slots())
    }

    /// Routes a click ray to a slot, or to the background target while a
    /// slot is focused.
    pub fn pointer_click(&mut self, origin: Vec3, dir: Vec3, now: f64) -> Result<ClickOutcome> {
        if let Some(i) = self.pick(origin, dir) {
            return Ok(ClickOutcome::Slot(self.click_slot(i, now)?));
        }
        if self.focus.background_active() && ray_plane_z(origin, dir, BACKGROUND_DEPTH).is_some() {
            return Ok(ClickOutcome::Background(self.click_background()));
        }
        Ok(ClickOutcome::Miss)
    }

    /// Advances every group to `now` (seconds since start).
    pub fn frame(&mut self, now: f64, dt: f32) {
        self.time = now;
        let input = FrameInput {
            time: now,
            dt,
            mode: self.mode.signal(),
        };
        self.stars.update(&input);
        self.foliage.update(&input);
        self.ornaments.update(&input);
        self.snow.update(&input);
        self.slots.update(&input, self.focus.focused(), &self.camera);
        self.fireworks.update(now);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn foliage(&self) -> &Foliage {
        &self.foliage
    }

    pub fn ornaments(&self) -> &Ornaments {
        &self.ornaments
    }

    pub fn slots(&self) -> &PhotoSlots {
        &self.slots
    }

    pub fn snow(&self) -> &Snow {
        &self.snow
    }

    pub fn stars(&self) -> &Stars {
        &self.stars
    }

    pub fn fireworks(&self) -> &Fireworks {
        &self.fireworks
    }

    pub fn layer_buffer(&self, layer: Layer) -> &InstanceBuffer<ParticleInstance> {
        match layer {
            Layer::Stars => self.stars.buffer(),
            Layer::Foliage => self.foliage.buffer(),
            Layer::Ornaments => self.ornaments.buffer(),
            Layer::Snow => self.snow.buffer(),
            Layer::Fireworks => self.fireworks.buffer(),
        }
    }

    pub fn layer_buffer_mut(&mut self, layer: Layer) -> &mut InstanceBuffer<ParticleInstance> {
        match layer {
            Layer::Stars => self.stars.buffer_mut(),
            Layer::Foliage => self.foliage.buffer_mut(),
            Layer::Ornaments => self.ornaments.buffer_mut(),
            Layer::Snow => self.snow.buffer_mut(),
            Layer::Fireworks => self.fireworks.buffer_mut(),
        }
    }

    pub fn photo_buffer_mut(&mut self) -> &mut InstanceBuffer<PhotoInstance> {
        self.slots.buffer_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scene() -> Scene {
        Scene::new(SceneConfig {
            foliage_count: 200,
            ornament_count: 20,
            snow_count: 50,
            star_count: 50,
            seed: Some(1),
            ..SceneConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn upload_assembles_scattered_tree() {
        let mut s = small_scene();
        assert_eq!(s.mode(), Mode::Scattered);
        let id = s.allocate_image_id();
        s.upload([id]);
        assert_eq!(s.mode(), Mode::Assembled);
        s.toggle_mode();
        s.upload(std::iter::empty());
        assert_eq!(s.mode(), Mode::Scattered);
    }

    #[test]
    fn background_only_listens_while_focused() {
        let mut s = small_scene();
        let origin = Vec3::new(100.0, 0.0, 26.0);
        assert_eq!(s.pointer_click(origin, -Vec3::Z, 0.0).unwrap(), ClickOutcome::Miss);
        s.click_slot(0, 0.0).unwrap();
        assert_eq!(
            s.pointer_click(origin, -Vec3::Z, 0.1).unwrap(),
            ClickOutcome::Background(FocusChange::Cleared(0))
        );
        assert_eq!(s.focused(), None);
    }

    #[test]
    fn focusing_a_slot_starts_fireworks() {
        let mut s = small_scene();
        s.click_slot(4, 0.0).unwrap();
        assert!(s.fireworks().is_active(0.1));
        assert_eq!(s.focused(), Some(4));
        assert_eq!(s.clear_focus(), FocusChange::Cleared(4));
    }
}
