use super::keymap::{action_for_key, suppresses_default, KeyAction};
use crate::audio::Music;
use crate::core::Scene;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub music: Rc<Music>,
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &KeyWiring) {
    // modified or auto-repeated presses are not shortcuts
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleMode => {
            let mode = w.scene.borrow_mut().toggle_mode();
            overlay::update_mode_button(&w.document, mode);
            log::info!("[keys] mode {:?}", mode);
        }
        KeyAction::ToggleMusic => {
            w.music.toggle();
        }
        KeyAction::ClearFocus => {
            w.scene.borrow_mut().clear_focus();
        }
        KeyAction::ToggleHint => overlay::toggle_hint(&w.document),
        KeyAction::ToggleFullscreen => dom::toggle_fullscreen(&w.canvas),
    }
    if suppresses_default(action) {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(w: KeyWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
