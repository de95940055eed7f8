use crate::constants::MAX_FRAME_DT;
use crate::core::Scene;
use crate::render;
use crate::upload::PendingPhotos;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub pending: Rc<RefCell<PendingPhotos>>,

    pub start: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        pending: Rc<RefCell<PendingPhotos>>,
    ) -> Self {
        let now = Instant::now();
        Self {
            scene,
            canvas,
            gpu,
            pending,
            start: now,
            last_instant: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT);
        self.last_instant = now;
        let elapsed = (now - self.start).as_secs_f64();

        let w = self.canvas.width();
        let h = self.canvas.height();
        let mut scene = self.scene.borrow_mut();
        scene.set_viewport(w, h);
        scene.frame(elapsed, dt_sec);

        let Some(g) = &mut self.gpu else {
            return;
        };
        apply_pending(g, &scene, &mut self.pending.borrow_mut());
        g.resize_if_needed(w, h);
        match g.render(dt_sec, &mut scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Moves decoded photos onto the GPU and frees textures the queue dropped.
fn apply_pending(gpu: &mut render::GpuState<'_>, scene: &Scene, pending: &mut PendingPhotos) {
    for id in pending.evicted.drain(..) {
        gpu.remove_photo(id);
    }
    for (id, bitmap) in pending.ready.drain(..) {
        // evicted while decoding
        if scene.photos().contains(id) {
            gpu.add_photo(id, &bitmap);
        }
        bitmap.close();
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    slot_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, slot_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop around a [`FrameContext`]. `stop` cancels the
/// pending frame and drops the closure; `resume` builds it again.
pub struct FrameLoop {
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> Self {
        let frame_loop = Self {
            frame_ctx,
            tick: Rc::new(RefCell::new(None)),
            handle: Rc::new(Cell::new(None)),
        };
        frame_loop.resume();
        frame_loop
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn resume(&self) {
        if self.is_running() {
            return;
        }
        // time spent stopped is not a frame delta
        self.frame_ctx.borrow_mut().last_instant = Instant::now();
        let frame_ctx = self.frame_ctx.clone();
        let tick_clone = self.tick.clone();
        let handle_clone = self.handle.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_ctx.borrow_mut().frame();
            handle_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        self.handle.set(request_frame(&self.tick));
        log::info!("[frame] loop running");
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> tick cycle
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
