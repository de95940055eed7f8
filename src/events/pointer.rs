use crate::constants::{CLICK_SLOP_PX, HOVER_CLASS};
use crate::core::{ClickOutcome, Scene};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        {
            let mut ms = w.mouse_state.borrow_mut();
            ms.x = pos.x;
            ms.y = pos.y;
        }
        let mut scene = w.scene.borrow_mut();
        let (ro, rd) = input::canvas_ray(scene.camera(), pos, w.canvas.width(), w.canvas.height());
        let hit = scene.pick(ro, rd);
        if hit != scene.hover() {
            scene.set_hover(hit);
            let cl = w.canvas.class_list();
            _ = if hit.is_some() {
                cl.add_1(HOVER_CLASS)
            } else {
                cl.remove_1(HOVER_CLASS)
            };
        }
    }) as Box<dyn FnMut(_)>);

    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.mouse_state.borrow_mut().press(pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let clicked = w.mouse_state.borrow_mut().release(pos, CLICK_SLOP_PX);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if !clicked {
            return;
        }
        let mut scene = w.scene.borrow_mut();
        let (ro, rd) = input::canvas_ray(scene.camera(), pos, w.canvas.width(), w.canvas.height());
        let now = scene.time();
        match scene.pointer_click(ro, rd, now) {
            Ok(ClickOutcome::Slot(change)) => log::info!("[click] {:?}", change),
            Ok(ClickOutcome::Background(change)) => log::info!("[click] background {:?}", change),
            Ok(ClickOutcome::Miss) => {}
            Err(e) => log::warn!("[click] {}", e),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
