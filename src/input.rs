use crate::core::{pixel_to_ndc, Camera};
use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    /// Where the current press started, in canvas pixels.
    pub down_at: Vec2,
}

impl MouseState {
    pub fn press(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.down = true;
        self.down_at = pos;
    }

    /// Ends the press; true if the pointer barely moved since it started.
    pub fn release(&mut self, pos: Vec2, slop_px: f32) -> bool {
        let was_down = self.down;
        self.down = false;
        self.x = pos.x;
        self.y = pos.y;
        was_down && is_click(self.down_at, pos, slop_px)
    }
}

#[inline]
pub fn is_click(down: Vec2, up: Vec2, slop_px: f32) -> bool {
    down.distance(up) <= slop_px
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// World-space ray under a canvas pixel.
pub fn canvas_ray(camera: &Camera, px: Vec2, width: u32, height: u32) -> (Vec3, Vec3) {
    let (nx, ny) = pixel_to_ndc(px.x, px.y, width as f32, height as f32);
    camera.screen_ray(nx, ny)
}
