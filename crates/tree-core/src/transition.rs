//! Scattered/assembled transition state shared by every tree group.
//!
//! Each group owns one [`Transition`]. Once per frame it is stepped toward the
//! scene's mode signal (0 = scattered, 1 = assembled) by exponential
//! smoothing; the eased [`Transition::blend`] is what positions are mixed by.

use crate::constants::REFERENCE_FPS;
use crate::ease::ease_out_cubic;

/// How the smoothing constant is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    /// `progress += (target - progress) * k` once per frame, whatever the
    /// frame time. Convergence speed follows the display refresh rate.
    #[default]
    PerFrame,
    /// `progress += (target - progress) * (1 - exp(-rate * dt))` with the rate
    /// derived from `k` so that both modes agree at 60 fps.
    FrameRateIndependent,
}

impl Smoothing {
    /// Fraction of the remaining distance to cover this frame for a per-frame
    /// constant `k`.
    pub fn factor(self, k: f32, dt_sec: f32) -> f32 {
        match self {
            Smoothing::PerFrame => k,
            Smoothing::FrameRateIndependent => 1.0 - (-rate_for(k) * dt_sec.max(0.0)).exp(),
        }
    }
}

/// Continuous decay rate (per second) equivalent to `k` at 60 fps.
#[inline]
pub fn rate_for(k: f32) -> f32 {
    -(1.0 - k).ln() * REFERENCE_FPS
}

#[derive(Clone, Debug)]
pub struct Transition {
    progress: f32,
    k: f32,
    smoothing: Smoothing,
}

impl Transition {
    pub fn new(k: f32) -> Self {
        Self::with_smoothing(k, Smoothing::PerFrame)
    }

    pub fn with_smoothing(k: f32, smoothing: Smoothing) -> Self {
        Self {
            progress: 0.0,
            k,
            smoothing,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn k(&self) -> f32 {
        self.k
    }

    #[inline]
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Advance one frame with the fixed per-call constant.
    pub fn step(&mut self, target_mode: f32) -> f32 {
        self.progress += (target_mode - self.progress) * self.k;
        self.progress
    }

    /// Advance one frame honouring the configured [`Smoothing`].
    pub fn step_dt(&mut self, target_mode: f32, dt_sec: f32) -> f32 {
        let alpha = self.smoothing.factor(self.k, dt_sec);
        self.progress += (target_mode - self.progress) * alpha;
        self.progress
    }

    /// Eased blend fraction for mixing scatter and target positions.
    #[inline]
    pub fn blend(&self) -> f32 {
        ease_out_cubic(self.progress)
    }
}
