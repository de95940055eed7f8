//! Uploaded photo bookkeeping.
//!
//! The core never sees pixels. Uploads are tracked as opaque [`ImageId`]s in a
//! bounded FIFO; the front end maps ids to whatever texture it managed to load.

use std::collections::VecDeque;

use crate::constants::PHOTO_SLOT_COUNT;

/// Opaque handle for one uploaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// Most recent uploads, oldest first. Pushing past capacity evicts the oldest.
#[derive(Clone, Debug)]
pub struct PhotoQueue {
    images: VecDeque<ImageId>,
    capacity: usize,
}

impl Default for PhotoQueue {
    fn default() -> Self {
        Self::new(PHOTO_SLOT_COUNT)
    }
}

impl PhotoQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            images: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append one image, returning the evicted one if the queue was full.
    pub fn push(&mut self, id: ImageId) -> Option<ImageId> {
        let evicted = if self.images.len() == self.capacity {
            self.images.pop_front()
        } else {
            None
        };
        self.images.push_back(id);
        evicted
    }

    /// Append in order; returns everything evicted, oldest first.
    pub fn extend<I: IntoIterator<Item = ImageId>>(&mut self, ids: I) -> Vec<ImageId> {
        ids.into_iter().filter_map(|id| self.push(id)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.images.iter().copied()
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.images.contains(&id)
    }

    /// Image shown by `slot`: slots cycle through the uploads when there are
    /// fewer uploads than slots.
    pub fn image_for_slot(&self, slot: usize) -> Option<ImageId> {
        if self.images.is_empty() {
            return None;
        }
        self.images.get(slot % self.images.len()).copied()
    }
}

/// Size that fits `(width, height)` inside a `max_dim` square, preserving the
/// aspect ratio. Images already inside the bound are left alone.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dim || longest == 0 {
        return (width, height);
    }
    let scale = max_dim as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_dim);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_dim);
    (w, h)
}

/// How a decode attempt treats EXIF orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOrientation {
    FromImage,
    /// Pixels as stored; for browsers that reject the orientation option.
    AsStored,
}

/// Decode attempts in order. A file is dropped only when every one fails.
pub const DECODE_ATTEMPTS: [DecodeOrientation; 2] =
    [DecodeOrientation::FromImage, DecodeOrientation::AsStored];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cycle_through_fewer_uploads() {
        let mut q = PhotoQueue::default();
        q.extend([ImageId(10), ImageId(11)]);
        let shown: Vec<_> = (0..5).filter_map(|s| q.image_for_slot(s)).collect();
        assert_eq!(
            shown,
            vec![ImageId(10), ImageId(11), ImageId(10), ImageId(11), ImageId(10)]
        );
    }

    #[test]
    fn empty_queue_shows_nothing() {
        assert_eq!(PhotoQueue::default().image_for_slot(0), None);
    }

    #[test]
    fn push_reports_eviction() {
        let mut q = PhotoQueue::new(2);
        assert_eq!(q.push(ImageId(1)), None);
        assert_eq!(q.push(ImageId(2)), None);
        assert_eq!(q.push(ImageId(3)), Some(ImageId(1)));
    }

    #[test]
    fn fit_within_preserves_aspect() {
        assert_eq!(fit_within(4096, 2048, 2048), (2048, 1024));
        assert_eq!(fit_within(3000, 4000, 2048), (1536, 2048));
        assert_eq!(fit_within(640, 480, 2048), (640, 480));
        assert_eq!(fit_within(10_000, 1, 2048), (2048, 1));
    }

    #[test]
    fn unoriented_decode_follows_oriented_attempt() {
        assert_eq!(DECODE_ATTEMPTS.first(), Some(&DecodeOrientation::FromImage));
        assert_eq!(DECODE_ATTEMPTS.last(), Some(&DecodeOrientation::AsStored));
    }
}
