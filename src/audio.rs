//! Background music: one looping `<audio>` element created on demand.

use crate::playback::PlayState;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct Music {
    element: web::HtmlAudioElement,
    // desired state; the element may still be buffering or blocked
    state: PlayState,
}

impl Music {
    /// `on_change` runs whenever the playing state flips, including when the
    /// browser rejects playback after the fact.
    pub fn new(url: &str, volume: f64, on_change: impl Fn(bool) + 'static) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(url)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        element.set_loop(true);
        element.set_volume(volume.clamp(0.0, 1.0));
        element.set_preload("auto");
        log::info!("[audio] music source {}", url);
        Ok(Self {
            element,
            state: PlayState::new(on_change),
        })
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Starts playback. Browsers reject `play()` without a user gesture;
    /// that is logged and the toggle stays usable.
    pub fn play(&self) {
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play failed: {:?}", e);
                return;
            }
        };
        self.state.set(true);
        let state = self.state.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback blocked: {:?}", e);
                state.set(false);
            }
        });
    }

    pub fn pause(&self) {
        _ = self.element.pause();
        self.state.set(false);
    }

    pub fn toggle(&self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
        log::info!("[audio] music {}", if self.is_playing() { "on" } else { "off" });
    }
}
