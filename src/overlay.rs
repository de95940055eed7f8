use crate::constants::*;
use crate::core::Mode;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    if hint_hidden(document) {
        show_hint(document);
    } else {
        hide_hint(document);
    }
}

pub fn update_mode_button(document: &web::Document, mode: Mode) {
    let label = match mode {
        Mode::Scattered => MODE_LABEL_SCATTERED,
        Mode::Assembled => MODE_LABEL_ASSEMBLED,
    };
    dom::set_text(document, TOGGLE_MODE_ID, label);
}

pub fn update_music_button(document: &web::Document, playing: bool) {
    let label = if playing { MUSIC_LABEL_ON } else { MUSIC_LABEL_OFF };
    dom::set_text(document, TOGGLE_MUSIC_ID, label);
}

/// One-line status under the controls, e.g. after uploads or on GPU failure.
pub fn set_status(document: &web::Document, text: &str) {
    dom::set_text(document, STATUS_ID, text);
}
