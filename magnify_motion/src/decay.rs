// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Base friction of the fling model, per second.
const FRICTION: f64 = -4.2;

/// Exponential velocity decay used for flings.
///
/// Velocity decays as `v(t) = v0 · e^(f·t)` with `f = -4.2 · friction_multiplier`,
/// so position approaches `x0 - v0 / f` without ever overshooting it. The
/// motion is considered finished once the speed drops to
/// `abs_velocity_threshold`.
///
/// Units are whatever the caller uses for position per second; the viewer
/// uses box pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExponentialDecay {
    /// Scales the base friction. Larger values stop sooner.
    pub friction_multiplier: f64,
    /// Speed at or below which motion stops.
    pub abs_velocity_threshold: f64,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction_multiplier: 1.0,
            abs_velocity_threshold: 0.1,
        }
    }
}

impl ExponentialDecay {
    /// Creates a decay with the given friction multiplier and stop threshold.
    #[must_use]
    pub fn new(friction_multiplier: f64, abs_velocity_threshold: f64) -> Self {
        Self {
            friction_multiplier,
            abs_velocity_threshold,
        }
    }

    /// Friction exponent per second; always negative.
    #[must_use]
    pub fn friction(&self) -> f64 {
        FRICTION * self.friction_multiplier.max(1e-4)
    }

    fn threshold(&self) -> f64 {
        self.abs_velocity_threshold.abs().max(1e-7)
    }

    /// Returns `true` if a motion starting at `velocity` would move at all.
    #[must_use]
    pub fn is_moving(&self, velocity: f64) -> bool {
        velocity.is_finite() && velocity.abs() > self.threshold()
    }

    /// Time until the speed decays from `velocity` to the stop threshold.
    #[must_use]
    pub fn duration(&self, velocity: f64) -> Duration {
        if !self.is_moving(velocity) {
            return Duration::ZERO;
        }
        let secs = libm::log(self.threshold() / velocity.abs()) / self.friction();
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    /// Position `elapsed` after starting at `origin` with `velocity`.
    #[must_use]
    pub fn value_at(&self, origin: f64, velocity: f64, elapsed: Duration) -> f64 {
        let f = self.friction();
        let decay = libm::exp(f * elapsed.as_secs_f64());
        origin - velocity / f + velocity / f * decay
    }

    /// Velocity `elapsed` after starting with `velocity`.
    #[must_use]
    pub fn velocity_at(&self, velocity: f64, elapsed: Duration) -> f64 {
        velocity * libm::exp(self.friction() * elapsed.as_secs_f64())
    }

    /// Position the motion comes to rest at, ignoring the stop threshold.
    #[must_use]
    pub fn target(&self, origin: f64, velocity: f64) -> f64 {
        origin - velocity / self.friction()
    }
}
