// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use magnify_viewport::{Axis, ViewportState};

use crate::decay::ExponentialDecay;
use crate::easing::Easing;

/// One animatable value of a [`ViewportState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Uniform scale.
    Scale,
    /// Horizontal offset.
    OffsetX,
    /// Vertical offset.
    OffsetY,
}

impl Channel {
    /// All channels in the order they are advanced each frame.
    pub const ALL: [Self; 3] = [Self::Scale, Self::OffsetX, Self::OffsetY];

    /// Offset channel for `axis`.
    #[must_use]
    pub fn offset(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::OffsetX,
            Axis::Y => Self::OffsetY,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Scale => 0,
            Self::OffsetX => 1,
            Self::OffsetY => 2,
        }
    }

    /// Current value of this channel.
    #[must_use]
    pub fn read(self, state: &ViewportState) -> f64 {
        match self {
            Self::Scale => state.scale(),
            Self::OffsetX => state.offset_on(Axis::X),
            Self::OffsetY => state.offset_on(Axis::Y),
        }
    }

    /// Writes `value` through the state's clamping setters and returns the
    /// value actually stored.
    pub fn write(self, state: &mut ViewportState, value: f64) -> f64 {
        match self {
            Self::Scale => state.set_scale(value),
            Self::OffsetX => state.set_offset(Axis::X, value),
            Self::OffsetY => state.set_offset(Axis::Y, value),
        }
        self.read(state)
    }
}

/// How a transition moves its channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionKind {
    /// Eased interpolation toward a fixed target.
    Ease {
        /// Value at the start.
        from: f64,
        /// Value at the end.
        to: f64,
        /// Total running time.
        duration: Duration,
        /// Timing curve.
        easing: Easing,
    },
    /// Free motion under exponentially decaying velocity.
    Decay {
        /// Value at the start.
        from: f64,
        /// Initial velocity in units per second.
        velocity: f64,
        /// Decay model.
        decay: ExponentialDecay,
    },
}

/// Value of a transition at some instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSample {
    /// Value to write.
    pub value: f64,
    /// `true` once the transition has reached its end.
    pub finished: bool,
}

/// An animated change of one [`Channel`].
///
/// Transitions are plain values evaluated against a start time; they hold no
/// reference to the state they drive. Immediate changes (live drag and pinch)
/// are not transitions: they are written straight into the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    channel: Channel,
    start: Duration,
    kind: TransitionKind,
}

impl Transition {
    /// Eases `channel` from `from` to `to` over `duration`, starting at `start`.
    #[must_use]
    pub fn ease(
        channel: Channel,
        from: f64,
        to: f64,
        start: Duration,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            channel,
            start,
            kind: TransitionKind::Ease {
                from,
                to,
                duration,
                easing,
            },
        }
    }

    /// Flings `channel` from `from` with `velocity`, starting at `start`.
    ///
    /// Returns `None` when the velocity is non‑finite or too slow to move.
    #[must_use]
    pub fn decay(
        channel: Channel,
        from: f64,
        velocity: f64,
        start: Duration,
        decay: ExponentialDecay,
    ) -> Option<Self> {
        decay.is_moving(velocity).then_some(Self {
            channel,
            start,
            kind: TransitionKind::Decay {
                from,
                velocity,
                decay,
            },
        })
    }

    /// Channel this transition drives.
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Start time.
    #[must_use]
    pub fn start(&self) -> Duration {
        self.start
    }

    /// Motion model.
    #[must_use]
    pub fn kind(&self) -> &TransitionKind {
        &self.kind
    }

    /// Returns `true` for decay (fling) transitions.
    #[must_use]
    pub fn is_decay(&self) -> bool {
        matches!(self.kind, TransitionKind::Decay { .. })
    }

    /// Value the transition settles at if nothing interrupts it.
    #[must_use]
    pub fn target(&self) -> f64 {
        match self.kind {
            TransitionKind::Ease { to, .. } => to,
            TransitionKind::Decay {
                from,
                velocity,
                decay,
            } => decay.target(from, velocity),
        }
    }

    /// Evaluates the transition at `now`.
    ///
    /// Times before the start evaluate as the start.
    #[must_use]
    pub fn sample(&self, now: Duration) -> TransitionSample {
        let elapsed = now.saturating_sub(self.start);
        match self.kind {
            TransitionKind::Ease {
                from,
                to,
                duration,
                easing,
            } => {
                if elapsed >= duration {
                    return TransitionSample {
                        value: to,
                        finished: true,
                    };
                }
                let t = elapsed.as_secs_f64() / duration.as_secs_f64();
                TransitionSample {
                    value: from + (to - from) * easing.apply(t),
                    finished: false,
                }
            }
            TransitionKind::Decay {
                from,
                velocity,
                decay,
            } => {
                let end = decay.duration(velocity);
                let finished = elapsed >= end;
                let at = if finished { end } else { elapsed };
                TransitionSample {
                    value: decay.value_at(from, velocity, at),
                    finished,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn ease_runs_from_start_to_target() {
        let t = Transition::ease(Channel::Scale, 1.0, 3.0, ms(100), ms(300), Easing::Linear);

        assert_eq!(
            t.sample(ms(50)),
            TransitionSample {
                value: 1.0,
                finished: false
            }
        );
        assert_eq!(t.sample(ms(250)).value, 2.0);
        assert_eq!(
            t.sample(ms(400)),
            TransitionSample {
                value: 3.0,
                finished: true
            }
        );
        assert_eq!(t.target(), 3.0);
    }

    #[test]
    fn zero_duration_ease_finishes_immediately() {
        let t = Transition::ease(
            Channel::OffsetX,
            5.0,
            -5.0,
            ms(0),
            Duration::ZERO,
            Easing::FastOutSlowIn,
        );
        let s = t.sample(ms(0));
        assert!(s.finished);
        assert_eq!(s.value, -5.0);
    }

    #[test]
    fn decay_too_slow_is_not_created() {
        let d = ExponentialDecay::default();
        assert!(Transition::decay(Channel::OffsetX, 0.0, 0.05, ms(0), d).is_none());
        assert!(Transition::decay(Channel::OffsetX, 0.0, f64::NAN, ms(0), d).is_none());
        let moving = Transition::decay(Channel::OffsetX, 0.0, 500.0, ms(0), d);
        assert!(moving.is_some_and(|t| t.is_decay()));
    }

    #[test]
    fn decay_finishes_at_rest_point() {
        let d = ExponentialDecay::default();
        let t = Transition::decay(Channel::OffsetY, 0.0, -1000.0, ms(0), d).unwrap();

        let mid = t.sample(ms(200));
        assert!(!mid.finished);
        assert!(mid.value < 0.0 && mid.value > t.target(), "mid {}", mid.value);

        let done = t.sample(ms(10_000));
        assert!(done.finished);
        assert!((done.value - t.target()).abs() < 0.1, "end {}", done.value);
    }

    #[test]
    fn channel_offsets_match_axes() {
        assert_eq!(Channel::offset(Axis::X), Channel::OffsetX);
        assert_eq!(Channel::offset(Axis::Y), Channel::OffsetY);
        for (i, c) in Channel::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
