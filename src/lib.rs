#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, MUSIC_URL, MUSIC_VOLUME, TOGGLE_MODE_ID, TOGGLE_MUSIC_ID};
use crate::core::{Scene, SceneConfig};
use crate::lifecycle::{loop_action, LoopAction, PageEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod overlay;
mod playback;
mod render;
mod upload;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

fn scene_config(window: &web::Window) -> SceneConfig {
    let query = window.location().search().unwrap_or_default();
    match SceneConfig::from_query(&query) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] ignoring query {:?}: {}", query, e);
            SceneConfig::default()
        }
    }
}

fn wire_buttons(document: &web::Document, scene: &Rc<RefCell<Scene>>, music: &Rc<audio::Music>) {
    let scene_mode = scene.clone();
    let doc_mode = document.clone();
    dom::add_click_listener(document, TOGGLE_MODE_ID, move || {
        let mode = scene_mode.borrow_mut().toggle_mode();
        overlay::update_mode_button(&doc_mode, mode);
    });

    let music_btn = music.clone();
    dom::add_click_listener(document, TOGGLE_MUSIC_ID, move || music_btn.toggle());
}

/// Stops the loop and music while the page is hidden; restarts the loop when
/// the page returns from the back/forward cache.
fn wire_page_lifecycle(frame_loop: Rc<frame::FrameLoop>, music: Rc<audio::Music>) {
    let apply = move |event: PageEvent| match loop_action(event, frame_loop.is_running()) {
        LoopAction::Stop => {
            frame_loop.stop();
            music.pause();
        }
        LoopAction::Resume => frame_loop.resume(),
        LoopAction::Keep => {}
    };
    let Some(window) = web::window() else {
        return;
    };
    let apply = Rc::new(apply);
    for name in ["pagehide", "pageshow"] {
        let apply = apply.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let event = match ev.type_().as_str() {
                "pageshow" => PageEvent::Show {
                    persisted: ev.persisted(),
                },
                _ => PageEvent::Hide,
            };
            apply(event);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(Scene::new(scene_config(&window))?));
    let slot_count = scene.borrow().config().photo_slots;
    let doc_music = document.clone();
    let music = Rc::new(audio::Music::new(MUSIC_URL, MUSIC_VOLUME, move |playing| {
        overlay::update_music_button(&doc_music, playing);
    })?);
    let pending = Rc::new(RefCell::new(upload::PendingPhotos::default()));

    let gpu = frame::init_gpu(&canvas, slot_count).await;
    if gpu.is_none() {
        overlay::set_status(&document, "WebGPU is not available in this browser");
    }

    {
        let s = scene.borrow();
        overlay::update_mode_button(&document, s.mode());
    }
    overlay::update_music_button(&document, music.is_playing());
    wire_buttons(&document, &scene, &music);
    upload::wire_photo_input(&document, scene.clone(), pending.clone());

    events::wire_global_keydown(events::KeyWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        music: music.clone(),
    });
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas,
        gpu,
        pending,
    )));
    let frame_loop = Rc::new(frame::FrameLoop::start(frame_ctx));
    wire_page_lifecycle(frame_loop, music);
    log::info!("[init] ready");
    Ok(())
}
