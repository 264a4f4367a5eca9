// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Thresholds used to classify pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Distance a contact must travel from its press before it is a drag.
    pub touch_slop: f64,
    /// Longest gap between a first release and a second press of a double tap.
    pub double_tap_timeout: Duration,
    /// Largest distance between the two taps of a double tap.
    pub double_tap_slop: f64,
    /// Release speed, in pixels per second, above which a drag flings.
    pub fling_threshold: f64,
}

impl GestureConfig {
    /// Default touch slop in pixels.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
    /// Default double‑tap window.
    pub const DEFAULT_DOUBLE_TAP_TIMEOUT: Duration = Duration::from_millis(300);
    /// Default double‑tap slop in pixels.
    pub const DEFAULT_DOUBLE_TAP_SLOP: f64 = 100.0;
    /// Default fling threshold: 2 px/ms.
    pub const DEFAULT_FLING_THRESHOLD: f64 = 2000.0;

    /// Sets [`touch_slop`](Self::touch_slop).
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets [`double_tap_timeout`](Self::double_tap_timeout).
    #[must_use]
    pub fn with_double_tap_timeout(mut self, timeout: Duration) -> Self {
        self.double_tap_timeout = timeout;
        self
    }

    /// Sets [`double_tap_slop`](Self::double_tap_slop).
    #[must_use]
    pub fn with_double_tap_slop(mut self, slop: f64) -> Self {
        self.double_tap_slop = slop;
        self
    }

    /// Sets [`fling_threshold`](Self::fling_threshold).
    #[must_use]
    pub fn with_fling_threshold(mut self, threshold: f64) -> Self {
        self.fling_threshold = threshold;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: Self::DEFAULT_TOUCH_SLOP,
            double_tap_timeout: Self::DEFAULT_DOUBLE_TAP_TIMEOUT,
            double_tap_slop: Self::DEFAULT_DOUBLE_TAP_SLOP,
            fling_threshold: Self::DEFAULT_FLING_THRESHOLD,
        }
    }
}
