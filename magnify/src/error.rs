// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rejected [`ControllerConfig`](crate::ControllerConfig) field.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Maximum scale is below `1.0` or not finite.
    #[error("max scale must be finite and at least 1, got {0}")]
    InvalidMaxScale(f64),

    /// Double‑tap zoom does not zoom in, or zooms past the maximum scale.
    #[error("double-tap zoom must be in (1, {max_scale}], got {zoom}")]
    InvalidDoubleTapZoom {
        /// The rejected zoom factor.
        zoom: f64,
        /// The configured maximum scale.
        max_scale: f64,
    },

    /// A distance tolerance is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSlop {
        /// Name of the field.
        name: &'static str,
        /// The rejected distance.
        value: f64,
    },

    /// Fling threshold is not a finite positive speed.
    #[error("fling threshold must be finite and positive, got {0}")]
    InvalidFlingThreshold(f64),

    /// Decay friction multiplier or stop threshold is not finite and positive.
    #[error("decay friction multiplier {friction_multiplier} and stop threshold {abs_velocity_threshold} must be finite and positive")]
    InvalidDecay {
        /// The rejected friction multiplier.
        friction_multiplier: f64,
        /// The rejected stop threshold.
        abs_velocity_threshold: f64,
    },

    /// Zoom animation has no running time.
    #[error("zoom duration must be non-zero")]
    ZeroZoomDuration,
}
