// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use magnify_gesture::GestureConfig;
use magnify_motion::MotionConfig;
use magnify_viewport::{DEFAULT_MAX_SCALE, MIN_SCALE};

use crate::error::ConfigError;

/// Everything a [`ZoomController`](crate::ZoomController) can be tuned with.
///
/// ```
/// use magnify::{ConfigError, ControllerConfig};
///
/// let config = ControllerConfig::default()
///     .with_double_tap_zoom(3.0)
///     .with_max_scale(5.0);
/// assert!(config.validate().is_ok());
///
/// let config = config.with_max_scale(2.0);
/// assert!(matches!(
///     config.validate(),
///     Err(ConfigError::InvalidDoubleTapZoom { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Scale a double tap zooms to from rest.
    pub double_tap_zoom: f64,
    /// Largest reachable scale.
    pub max_scale: f64,
    /// Pointer classification thresholds.
    pub gesture: GestureConfig,
    /// Animation parameters.
    pub motion: MotionConfig,
}

impl ControllerConfig {
    /// Default double‑tap zoom factor.
    pub const DEFAULT_DOUBLE_TAP_ZOOM: f64 = 2.0;

    /// Sets [`double_tap_zoom`](Self::double_tap_zoom).
    #[must_use]
    pub fn with_double_tap_zoom(mut self, zoom: f64) -> Self {
        self.double_tap_zoom = zoom;
        self
    }

    /// Sets [`max_scale`](Self::max_scale).
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets [`gesture`](Self::gesture).
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Sets [`motion`](Self::motion).
    #[must_use]
    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Checks every field and the constraints between them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_scale.is_finite() || self.max_scale < MIN_SCALE {
            return Err(ConfigError::InvalidMaxScale(self.max_scale));
        }
        let zoom = self.double_tap_zoom;
        if !zoom.is_finite() || zoom <= MIN_SCALE || zoom > self.max_scale {
            return Err(ConfigError::InvalidDoubleTapZoom {
                zoom,
                max_scale: self.max_scale,
            });
        }

        let gesture = &self.gesture;
        for (name, value) in [
            ("touch slop", gesture.touch_slop),
            ("double-tap slop", gesture.double_tap_slop),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSlop { name, value });
            }
        }
        if !gesture.fling_threshold.is_finite() || gesture.fling_threshold <= 0.0 {
            return Err(ConfigError::InvalidFlingThreshold(gesture.fling_threshold));
        }

        let decay = &self.motion.decay;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(decay.friction_multiplier) || !positive(decay.abs_velocity_threshold) {
            return Err(ConfigError::InvalidDecay {
                friction_multiplier: decay.friction_multiplier,
                abs_velocity_threshold: decay.abs_velocity_threshold,
            });
        }
        if self.motion.zoom_duration.is_zero() {
            return Err(ConfigError::ZeroZoomDuration);
        }
        Ok(())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            double_tap_zoom: Self::DEFAULT_DOUBLE_TAP_ZOOM,
            max_scale: DEFAULT_MAX_SCALE,
            gesture: GestureConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}
