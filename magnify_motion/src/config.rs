// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::decay::ExponentialDecay;
use crate::easing::Easing;

/// Motion parameters for animated zoom and fling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Running time of double‑tap zoom and reset.
    pub zoom_duration: Duration,
    /// Timing curve of double‑tap zoom and reset.
    pub zoom_easing: Easing,
    /// Fling model.
    pub decay: ExponentialDecay,
}

impl MotionConfig {
    /// Default zoom running time.
    pub const DEFAULT_ZOOM_DURATION: Duration = Duration::from_millis(300);

    /// Sets [`zoom_duration`](Self::zoom_duration).
    #[must_use]
    pub fn with_zoom_duration(mut self, duration: Duration) -> Self {
        self.zoom_duration = duration;
        self
    }

    /// Sets [`zoom_easing`](Self::zoom_easing).
    #[must_use]
    pub fn with_zoom_easing(mut self, easing: Easing) -> Self {
        self.zoom_easing = easing;
        self
    }

    /// Sets [`decay`](Self::decay).
    #[must_use]
    pub fn with_decay(mut self, decay: ExponentialDecay) -> Self {
        self.decay = decay;
        self
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            zoom_duration: Self::DEFAULT_ZOOM_DURATION,
            zoom_easing: Easing::FastOutSlowIn,
            decay: ExponentialDecay::default(),
        }
    }
}
