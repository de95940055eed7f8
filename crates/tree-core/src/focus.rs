//! Exclusive photo focus.
//!
//! At most one slot is focused at a time. Each slot decides on its own
//! whether it is the focused one (`focused == Some(index)`), so switching from
//! one slot to another needs no intermediate state.

use crate::error::{Error, Result};

/// What a click did to the focus state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusChange {
    /// Nothing was focused; `slot` now is.
    Focused(usize),
    /// Focus moved from one slot to another.
    Switched { from: usize, to: usize },
    /// The focused slot went back to normal.
    Cleared(usize),
    Unchanged,
}

impl FocusChange {
    /// Slot that just entered the focused state, if any.
    pub fn newly_focused(self) -> Option<usize> {
        match self {
            FocusChange::Focused(i) | FocusChange::Switched { to: i, .. } => Some(i),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FocusController {
    focused: Option<usize>,
    slot_count: usize,
}

impl FocusController {
    pub fn new(slot_count: usize) -> Self {
        Self {
            focused: None,
            slot_count,
        }
    }

    #[inline]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[inline]
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// The background hit-target only listens while something is focused.
    #[inline]
    pub fn background_active(&self) -> bool {
        self.focused.is_some()
    }

    /// Click on a photo slot: focus it, or clear it if it already was.
    pub fn click_slot(&mut self, index: usize) -> Result<FocusChange> {
        if index >= self.slot_count {
            return Err(Error::SlotOutOfRange {
                index,
                count: self.slot_count,
            });
        }
        let change = match self.focused {
            Some(cur) if cur == index => {
                self.focused = None;
                FocusChange::Cleared(index)
            }
            Some(cur) => {
                self.focused = Some(index);
                FocusChange::Switched {
                    from: cur,
                    to: index,
                }
            }
            None => {
                self.focused = Some(index);
                FocusChange::Focused(index)
            }
        };
        log::debug!("[focus] {:?}", change);
        Ok(change)
    }

    pub fn click_background(&mut self) -> FocusChange {
        match self.focused.take() {
            Some(i) => {
                log::debug!("[focus] background cleared slot {}", i);
                FocusChange::Cleared(i)
            }
            None => FocusChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_reports_both_slots() {
        let mut f = FocusController::new(9);
        assert_eq!(f.click_slot(2), Ok(FocusChange::Focused(2)));
        assert_eq!(f.click_slot(5), Ok(FocusChange::Switched { from: 2, to: 5 }));
        assert!(f.is_focused(5));
        assert!(!f.is_focused(2));
    }

    #[test]
    fn background_inactive_without_focus() {
        let mut f = FocusController::new(9);
        assert!(!f.background_active());
        assert_eq!(f.click_background(), FocusChange::Unchanged);
        f.click_slot(0).unwrap();
        assert!(f.background_active());
        assert_eq!(f.click_background(), FocusChange::Cleared(0));
        assert_eq!(f.focused(), None);
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut f = FocusController::new(9);
        assert_eq!(
            f.click_slot(9),
            Err(Error::SlotOutOfRange { index: 9, count: 9 })
        );
        assert_eq!(f.focused(), None);
    }
}
