use std::cell::Cell;
use std::rc::Rc;

/// Desired music state, shared with async playback callbacks. Every flip is
/// reported to the listener so the UI cannot drift from it.
#[derive(Clone)]
pub struct PlayState {
    playing: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(bool)>,
}

impl PlayState {
    pub fn new(on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            playing: Rc::new(Cell::new(false)),
            on_change: Rc::new(on_change),
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    /// Returns true if the state changed.
    pub fn set(&self, playing: bool) -> bool {
        if self.playing.replace(playing) == playing {
            return false;
        }
        (self.on_change)(playing);
        true
    }
}
