// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use magnify_viewport::ViewportState;

use crate::transition::{Channel, Transition};

/// Runs at most one [`Transition`] per [`Channel`].
///
/// Starting a transition on a busy channel discards the one in flight, so two
/// animations never fight over the same value. The scheduler never reads a
/// clock: the host calls [`tick`](Self::tick) once per frame with the frame
/// time.
///
/// ```
/// use core::time::Duration;
/// use kurbo::Size;
/// use magnify_motion::{Channel, Easing, Transition, TransitionScheduler};
/// use magnify_viewport::{ImageGeometry, ViewportState};
///
/// let ms = Duration::from_millis;
/// let geometry = ImageGeometry::new(Size::new(100.0, 100.0), Size::new(100.0, 100.0));
/// let mut state = ViewportState::new(geometry);
/// let mut scheduler = TransitionScheduler::new();
///
/// scheduler.start(Transition::ease(Channel::Scale, 1.0, 2.0, ms(0), ms(100), Easing::Linear));
/// assert!(scheduler.tick(ms(50), &mut state));
/// assert_eq!(state.scale(), 1.5);
///
/// assert!(!scheduler.tick(ms(100), &mut state));
/// assert_eq!(state.scale(), 2.0);
/// assert!(scheduler.is_idle());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionScheduler {
    slots: [Option<Transition>; 3],
}

impl TransitionScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `transition`, replacing whatever ran on its channel.
    ///
    /// Returns the superseded transition, if any.
    pub fn start(&mut self, transition: Transition) -> Option<Transition> {
        let channel = transition.channel();
        log::debug!(
            "{channel:?}: start {:?} toward {}",
            transition.kind(),
            transition.target()
        );
        let previous = self.slots[channel.index()].replace(transition);
        if previous.is_some() {
            log::debug!("{channel:?}: superseded in-flight transition");
        }
        previous
    }

    /// Stops the transition on `channel`, leaving its value where it is.
    ///
    /// Returns `true` if something was running.
    pub fn cancel(&mut self, channel: Channel) -> bool {
        let cancelled = self.slots[channel.index()].take().is_some();
        if cancelled {
            log::trace!("{channel:?}: cancelled");
        }
        cancelled
    }

    /// Stops every transition.
    pub fn cancel_all(&mut self) {
        for channel in Channel::ALL {
            self.cancel(channel);
        }
    }

    /// Transition currently running on `channel`.
    #[must_use]
    pub fn active(&self, channel: Channel) -> Option<&Transition> {
        self.slots[channel.index()].as_ref()
    }

    /// Returns `true` when no transition is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Advances every running transition to `now` and writes the results.
    ///
    /// Channels are advanced scale first, so offsets are clamped against the
    /// bounds of the scale written in the same frame. Finished transitions
    /// are removed; a fling that runs into its bound stops there. Returns
    /// `true` while anything is still running.
    pub fn tick(&mut self, now: Duration, state: &mut ViewportState) -> bool {
        for channel in Channel::ALL {
            let slot = &mut self.slots[channel.index()];
            let Some(transition) = *slot else {
                continue;
            };
            let sample = transition.sample(now);
            let stored = channel.write(state, sample.value);
            let pinned = transition.is_decay() && stored != sample.value;
            log::trace!(
                "{channel:?}: {} (wanted {}) at {now:?}",
                stored,
                sample.value
            );
            if sample.finished || pinned {
                if pinned {
                    log::debug!("{channel:?}: fling stopped at bound {stored}");
                }
                *slot = None;
            }
        }
        !self.is_idle()
    }
}
