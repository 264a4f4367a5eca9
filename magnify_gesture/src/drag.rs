// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas and release velocity from timed positions.
//!
//! ## Usage
//!
//! 1) Start a drag by calling [`DragState::start`] with the press position and time.
//! 2) On each move, call [`DragState::update`] to get the delta and the
//!    instantaneous velocity since the previous sample.
//! 3) Optionally call [`DragState::total_offset`] for the cumulative movement.
//! 4) On release, [`DragState::end`] returns the last velocity and resets the state.
//!
//! Velocity is measured in pixels per second from the last two samples only.
//! When two samples share a timestamp the velocity is non‑finite; callers
//! that act on it (fling) must check [`f64::is_finite`] first.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use magnify_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0), Duration::from_millis(100));
//! assert!(drag.is_dragging());
//!
//! // 5px right in 10ms is 500 px/s.
//! let sample = drag.update(Point::new(15.0, 20.0), Duration::from_millis(110)).unwrap();
//! assert_eq!(sample.delta, Vec2::new(5.0, 0.0));
//! assert_eq!(sample.velocity, Vec2::new(500.0, 0.0));
//!
//! assert_eq!(drag.end(), Some(Vec2::new(500.0, 0.0)));
//! assert!(!drag.is_dragging());
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

/// One movement step of a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// `delta` divided by the elapsed time, in pixels per second.
    pub velocity: Vec2,
}

/// Tracks a single‑contact drag with timestamps.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded position.
    pub last_pos: Option<Point>,
    /// Timestamp of `last_pos`.
    pub last_time: Option<Duration>,
    /// Velocity computed by the most recent update.
    pub velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag from `pos` at `time`.
    pub fn start(&mut self, pos: Point, time: Duration) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(time);
        self.velocity = Vec2::ZERO;
    }

    /// Record a new position, returning the step since the last one.
    ///
    /// Returns `None` when no drag is active. A timestamp earlier than the
    /// previous one counts as zero elapsed time.
    pub fn update(&mut self, pos: Point, time: Duration) -> Option<DragSample> {
        self.start_pos?;
        let (Some(last_pos), Some(last_time)) = (self.last_pos, self.last_time) else {
            self.last_pos = Some(pos);
            self.last_time = Some(time);
            return None;
        };
        let delta = pos - last_pos;
        let elapsed = time.saturating_sub(last_time).as_secs_f64();
        let velocity = delta / elapsed;
        self.last_pos = Some(pos);
        self.last_time = Some(time);
        self.velocity = velocity;
        Some(DragSample { delta, velocity })
    }

    /// Total movement from the drag start to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the drag, returning the last measured velocity.
    pub fn end(&mut self) -> Option<Vec2> {
        let velocity = self.start_pos.map(|_| self.velocity);
        *self = Self::default();
        velocity
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0), ms(10)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, ms(0));

        let s1 = drag.update(Point::new(5.0, 3.0), ms(10)).unwrap();
        assert_eq!(s1.delta, Vec2::new(5.0, 3.0));

        let s2 = drag.update(Point::new(8.0, 7.0), ms(20)).unwrap();
        assert_eq!(s2.delta, Vec2::new(3.0, 4.0));
        assert_eq!(s2.velocity, Vec2::new(300.0, 400.0));

        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn velocity_uses_only_last_step() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(100.0, 0.0), ms(10));
        drag.update(Point::new(101.0, 0.0), ms(110));

        assert_eq!(drag.end(), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn same_timestamp_gives_non_finite_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, ms(5));

        let s = drag.update(Point::new(3.0, 0.0), ms(5)).unwrap();
        assert_eq!(s.delta, Vec2::new(3.0, 0.0));
        assert!(!s.velocity.x.is_finite());
        assert!(s.velocity.y.is_nan());
    }

    #[test]
    fn time_going_backwards_counts_as_zero_elapsed() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, ms(50));

        let s = drag.update(Point::new(0.0, -2.0), ms(40)).unwrap();
        assert!(s.velocity.y.is_infinite() && s.velocity.y < 0.0);
    }

    #[test]
    fn end_resets_and_reports_nothing_when_idle() {
        let mut drag = DragState::default();
        assert_eq!(drag.end(), None);

        drag.start(Point::new(10.0, 20.0), ms(0));
        assert_eq!(drag.end(), Some(Vec2::ZERO));
        assert!(!drag.is_dragging());
        assert!(drag.last_time.is_none());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::ZERO, ms(0));
        drag.update(Point::new(10.0, 10.0), ms(16));

        drag.start(Point::new(50.0, 60.0), ms(100));

        assert_eq!(drag.velocity, Vec2::ZERO);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }
}
