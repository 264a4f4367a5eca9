// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double‑tap recognition with spatial and temporal tolerance.
//!
//! A released press that never became a drag is a *tap*. A tap is held back
//! as pending until either a second press lands close enough and soon enough
//! (making it a double tap on release) or the window runs out, at which point
//! it is confirmed as a single tap.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use magnify_gesture::tap::{TapOutcome, TapState};
//!
//! let ms = Duration::from_millis;
//! let mut taps = TapState::new(ms(300), 100.0);
//!
//! assert_eq!(taps.on_down(Point::new(10.0, 10.0), ms(0)), None);
//! assert_eq!(taps.on_up(Point::new(10.0, 10.0), ms(50)), TapOutcome::Pending);
//!
//! assert_eq!(taps.on_down(Point::new(14.0, 12.0), ms(200)), None);
//! assert_eq!(
//!     taps.on_up(Point::new(14.0, 12.0), ms(240)),
//!     TapOutcome::DoubleTap(Point::new(14.0, 12.0))
//! );
//! ```

use core::time::Duration;

use kurbo::Point;

/// Result of releasing a press that stayed within touch slop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    /// First tap recorded; waiting for a possible second one.
    Pending,
    /// Second tap completed a double tap at this point.
    DoubleTap(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingTap {
    point: Point,
    released: Duration,
}

/// Tap recognizer state.
#[derive(Clone, Debug)]
pub struct TapState {
    timeout: Duration,
    slop: f64,
    pending: Option<PendingTap>,
    second_press: bool,
}

impl TapState {
    /// Creates a recognizer.
    ///
    /// `timeout` is the longest gap between the first release and the second
    /// press; `slop` is the largest distance between the two taps.
    pub fn new(timeout: Duration, slop: f64) -> Self {
        Self {
            timeout,
            slop,
            pending: None,
            second_press: false,
        }
    }

    /// Records a press.
    ///
    /// Returns the point of a pending tap that this press can no longer
    /// complete, which the caller should report as a single tap.
    pub fn on_down(&mut self, pos: Point, time: Duration) -> Option<Point> {
        let pending = self.pending?;
        let in_time = time.saturating_sub(pending.released) <= self.timeout;
        if in_time && pending.point.distance(pos) <= self.slop {
            self.second_press = true;
            None
        } else {
            self.pending = None;
            self.second_press = false;
            Some(pending.point)
        }
    }

    /// Records the release of a press that stayed within touch slop.
    pub fn on_up(&mut self, pos: Point, time: Duration) -> TapOutcome {
        if self.second_press {
            self.pending = None;
            self.second_press = false;
            TapOutcome::DoubleTap(pos)
        } else {
            self.pending = Some(PendingTap {
                point: pos,
                released: time,
            });
            TapOutcome::Pending
        }
    }

    /// The current press turned into something other than a tap.
    ///
    /// Returns the pending first tap, if any, as a confirmed single tap.
    pub fn abort(&mut self) -> Option<Point> {
        self.second_press = false;
        self.pending.take().map(|p| p.point)
    }

    /// Confirms a pending tap whose double‑tap window has passed.
    ///
    /// Does nothing while a second press is down.
    pub fn poll(&mut self, now: Duration) -> Option<Point> {
        let pending = self.pending?;
        if self.second_press || now.saturating_sub(pending.released) <= self.timeout {
            return None;
        }
        self.pending = None;
        Some(pending.point)
    }

    /// Returns `true` when a first tap is waiting for a second one.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Forgets any pending tap without reporting it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.second_press = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn taps() -> TapState {
        TapState::new(ms(300), 100.0)
    }

    #[test]
    fn single_tap_is_held_until_window_passes() {
        let mut t = taps();
        t.on_down(Point::new(5.0, 5.0), ms(0));
        assert_eq!(t.on_up(Point::new(5.0, 5.0), ms(30)), TapOutcome::Pending);

        assert_eq!(t.poll(ms(330)), None);
        assert_eq!(t.poll(ms(331)), Some(Point::new(5.0, 5.0)));
        assert!(!t.has_pending());
        assert_eq!(t.poll(ms(1000)), None);
    }

    #[test]
    fn late_second_press_confirms_first_and_starts_over() {
        let mut t = taps();
        t.on_down(Point::ZERO, ms(0));
        t.on_up(Point::ZERO, ms(10));

        assert_eq!(t.on_down(Point::ZERO, ms(400)), Some(Point::ZERO));
        assert_eq!(t.on_up(Point::ZERO, ms(420)), TapOutcome::Pending);
    }

    #[test]
    fn distant_second_press_is_not_a_double_tap() {
        let mut t = taps();
        t.on_down(Point::ZERO, ms(0));
        t.on_up(Point::ZERO, ms(10));

        assert_eq!(t.on_down(Point::new(150.0, 0.0), ms(100)), Some(Point::ZERO));
        assert_eq!(t.on_up(Point::new(150.0, 0.0), ms(120)), TapOutcome::Pending);
    }

    #[test]
    fn poll_waits_while_second_press_is_down() {
        let mut t = taps();
        t.on_down(Point::ZERO, ms(0));
        t.on_up(Point::ZERO, ms(10));
        t.on_down(Point::ZERO, ms(200));

        assert_eq!(t.poll(ms(900)), None);
        assert_eq!(
            t.on_up(Point::new(1.0, 1.0), ms(950)),
            TapOutcome::DoubleTap(Point::new(1.0, 1.0))
        );
    }

    #[test]
    fn abort_confirms_pending_tap() {
        let mut t = taps();
        t.on_down(Point::ZERO, ms(0));
        t.on_up(Point::ZERO, ms(10));
        t.on_down(Point::ZERO, ms(100));

        assert_eq!(t.abort(), Some(Point::ZERO));
        assert_eq!(t.abort(), None);
        assert!(!t.has_pending());
    }

    #[test]
    fn clear_drops_pending_tap_silently() {
        let mut t = taps();
        t.on_down(Point::ZERO, ms(0));
        t.on_up(Point::ZERO, ms(10));

        t.clear();
        assert_eq!(t.poll(ms(1000)), None);
    }
}
