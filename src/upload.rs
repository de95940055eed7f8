//! Photo uploads: `<input type=file>` to decoded, orientation-corrected,
//! size-limited `ImageBitmap`s handed to the renderer.
//!
//! Slots are claimed synchronously in selection order so the queue order
//! never depends on decode speed; a slot shows the placeholder until its
//! bitmap arrives in [`PendingPhotos`].

use crate::constants::{MAX_UPLOAD_DIMENSION, PHOTO_INPUT_ID};
use crate::core::{fit_within, DecodeOrientation, ImageId, Scene, DECODE_ATTEMPTS};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Hand-off between async decodes and the frame loop.
#[derive(Default)]
pub struct PendingPhotos {
    pub ready: Vec<(ImageId, web::ImageBitmap)>,
    pub evicted: Vec<ImageId>,
}

pub fn wire_photo_input(
    document: &web::Document,
    scene: Rc<RefCell<Scene>>,
    pending: Rc<RefCell<PendingPhotos>>,
) {
    let Some(el) = document.get_element_by_id(PHOTO_INPUT_ID) else {
        log::warn!("[upload] missing #{}", PHOTO_INPUT_ID);
        return;
    };
    let input = match el.dyn_into::<web::HtmlInputElement>() {
        Ok(i) => i,
        Err(_) => {
            log::warn!("[upload] #{} is not an input", PHOTO_INPUT_ID);
            return;
        }
    };
    let input_cb = input.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(list) = input_cb.files() else {
            return;
        };
        let files: Vec<web::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        if files.is_empty() {
            return;
        }

        let (ids, evicted, mode) = {
            let mut s = scene.borrow_mut();
            let ids: Vec<ImageId> = files.iter().map(|_| s.allocate_image_id()).collect();
            let evicted = s.upload(ids.iter().copied());
            (ids, evicted, s.mode())
        };
        pending.borrow_mut().evicted.extend(evicted);
        overlay::update_mode_button(&doc, mode);
        overlay::set_status(&doc, &format!("Added {} photo(s)", files.len()));
        log::info!("[upload] {} file(s) selected", files.len());

        for (id, file) in ids.into_iter().zip(files) {
            // pushed straight out again by a larger selection
            if !scene.borrow().photos().contains(id) {
                continue;
            }
            let pending = pending.clone();
            spawn_local(async move {
                match decode(&file).await {
                    Ok(bitmap) => pending.borrow_mut().ready.push((id, bitmap)),
                    Err(e) => log::warn!("[upload] could not decode {}: {:?}", file.name(), e),
                }
            });
        }
        // clearing lets the same files be picked again
        input_cb.set_value("");
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn decode(file: &web::File) -> Result<web::ImageBitmap, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let mut last_err = JsValue::from_str("no decode attempted");
    let mut decoded = None;
    for orientation in DECODE_ATTEMPTS {
        match decode_with(&window, file, orientation).await {
            Ok(bitmap) => {
                decoded = Some(bitmap);
                break;
            }
            Err(e) => {
                log::warn!("[upload] {:?} decode of {} failed: {:?}", orientation, file.name(), e);
                last_err = e;
            }
        }
    }
    let Some(bitmap) = decoded else {
        return Err(last_err);
    };
    match downscale(&window, &bitmap).await {
        Ok(Some(small)) => {
            bitmap.close();
            Ok(small)
        }
        Ok(None) => Ok(bitmap),
        Err(e) => {
            log::warn!("[upload] downscale failed, using original: {:?}", e);
            Ok(bitmap)
        }
    }
}

async fn decode_with(
    window: &web::Window,
    file: &web::File,
    orientation: DecodeOrientation,
) -> Result<web::ImageBitmap, JsValue> {
    let promise = match orientation {
        DecodeOrientation::FromImage => {
            let opts = web::ImageBitmapOptions::new();
            opts.set_image_orientation(web::ImageOrientation::FromImage);
            window.create_image_bitmap_with_blob_and_image_bitmap_options(file, &opts)?
        }
        DecodeOrientation::AsStored => window.create_image_bitmap_with_blob(file)?,
    };
    JsFuture::from(promise).await?.dyn_into()
}

/// Redraws `bitmap` through a 2D canvas when it exceeds the upload limit.
async fn downscale(
    window: &web::Window,
    bitmap: &web::ImageBitmap,
) -> Result<Option<web::ImageBitmap>, JsValue> {
    let (w, h) = (bitmap.width(), bitmap.height());
    let (tw, th) = fit_within(w, h, MAX_UPLOAD_DIMENSION);
    if (tw, th) == (w, h) {
        return Ok(None);
    }
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(tw);
    canvas.set_height(th);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.draw_image_with_image_bitmap_and_dw_and_dh(bitmap, 0.0, 0.0, tw as f64, th as f64)?;
    let promise = window.create_image_bitmap_with_html_canvas_element(&canvas)?;
    let small: web::ImageBitmap = JsFuture::from(promise).await?.dyn_into()?;
    log::info!("[upload] downscaled {}x{} -> {}x{}", w, h, tw, th);
    Ok(Some(small))
}
