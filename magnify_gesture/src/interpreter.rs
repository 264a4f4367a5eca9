// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::tap::{TapOutcome, TapState};

/// Phase of a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact pressed.
    Down,
    /// Contact moved.
    Move,
    /// Contact released.
    Up,
    /// Contact taken away by the platform.
    Cancel,
}

/// One raw pointer event in box coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput<K> {
    /// Identifies the contact across its down/move/up events.
    pub contact: K,
    /// What happened to the contact.
    pub phase: PointerPhase,
    /// Contact position in box coordinates.
    pub position: Point,
    /// Event timestamp.
    pub time: Duration,
}

impl<K> PointerInput<K> {
    /// Creates a pointer event.
    pub fn new(contact: K, phase: PointerPhase, position: Point, time: Duration) -> Self {
        Self {
            contact,
            phase,
            position,
            time,
        }
    }
}

/// A classified user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Confirmed single tap.
    Tap {
        /// Where the tap landed.
        point: Point,
    },
    /// Second tap of a double tap.
    DoubleTap {
        /// Where the second tap landed.
        point: Point,
    },
    /// Single‑contact movement.
    DragMove {
        /// Movement since the previous sample.
        delta: Vec2,
        /// Instantaneous velocity in px/s; may be non‑finite.
        velocity_hint: Vec2,
    },
    /// Drag released fast enough to fling.
    DragEnd {
        /// Release velocity in px/s; always finite.
        velocity: Vec2,
    },
    /// Two‑contact step.
    PinchPan {
        /// Relative scale change since the previous step.
        zoom_ratio: f64,
        /// Centroid movement since the previous step.
        pan_delta: Vec2,
        /// Current centroid.
        focal_point: Point,
    },
}

/// Gestures produced by one pointer event.
pub type Gestures = SmallVec<[GestureEvent; 2]>;

/// What a double tap should do to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DoubleTapIntent {
    /// Animate back to scale `1.0` and zero offset.
    Reset,
    /// Animate to `scale`, bringing `point` toward the box center.
    ZoomTo {
        /// Tap point in box coordinates.
        point: Point,
        /// Target scale.
        scale: f64,
    },
}

/// Decides between zooming in and resetting for a double tap at `point`.
///
/// ```
/// use kurbo::Point;
/// use magnify_gesture::{DoubleTapIntent, resolve_double_tap};
///
/// let p = Point::new(40.0, 60.0);
/// assert_eq!(
///     resolve_double_tap(1.0, p, 2.0),
///     DoubleTapIntent::ZoomTo { point: p, scale: 2.0 }
/// );
/// assert_eq!(resolve_double_tap(1.5, p, 2.0), DoubleTapIntent::Reset);
/// ```
pub fn resolve_double_tap(
    current_scale: f64,
    point: Point,
    double_tap_zoom: f64,
) -> DoubleTapIntent {
    if current_scale > 1.0 {
        DoubleTapIntent::Reset
    } else {
        DoubleTapIntent::ZoomTo {
            point,
            scale: double_tap_zoom,
        }
    }
}

#[derive(Clone, Debug)]
enum Mode<K> {
    Idle,
    /// One contact down, still within touch slop.
    Pressed { contact: K, origin: Point },
    Dragging { contact: K },
    Pinching(PinchState<K>),
    /// Waiting for every contact to lift after an aborted or finished pinch.
    Consumed,
}

/// Turns raw pointer events into [`GestureEvent`]s.
///
/// Contacts are identified by a caller‑chosen `K` (touch id, pointer id, …).
/// The interpreter holds no clock; every decision uses the timestamps in the
/// input plus the explicit `now` given to [`poll`](Self::poll).
#[derive(Clone, Debug)]
pub struct GestureInterpreter<K> {
    config: GestureConfig,
    mode: Mode<K>,
    down: SmallVec<[(K, Point); 4]>,
    drag: DragState,
    taps: TapState,
}

impl<K: Copy + PartialEq + Debug> Default for GestureInterpreter<K> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<K: Copy + PartialEq + Debug> GestureInterpreter<K> {
    /// Creates an interpreter with the given thresholds.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            mode: Mode::Idle,
            down: SmallVec::new(),
            drag: DragState::default(),
            taps: TapState::new(config.double_tap_timeout, config.double_tap_slop),
        }
    }

    /// Thresholds in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Number of contacts currently down.
    pub fn active_contacts(&self) -> usize {
        self.down.len()
    }

    /// Returns `true` when no contact is down and no tap is pending.
    pub fn is_idle(&self) -> bool {
        matches!(self.mode, Mode::Idle) && !self.taps.has_pending()
    }

    /// Drops all contact and tap state without emitting anything.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.down.clear();
        self.drag.end();
        self.taps.clear();
    }

    /// Classifies one pointer event.
    pub fn handle(&mut self, input: PointerInput<K>) -> Gestures {
        log::trace!(
            "pointer {:?} {:?} at {:?} t={:?}",
            input.contact,
            input.phase,
            input.position,
            input.time
        );
        let mut out = Gestures::new();
        match input.phase {
            PointerPhase::Down => self.on_down(input, &mut out),
            PointerPhase::Move => self.on_move(input, &mut out),
            PointerPhase::Up => self.on_up(input, &mut out),
            PointerPhase::Cancel => self.on_cancel(input.contact, &mut out),
        }
        out
    }

    /// Confirms a pending single tap once its double‑tap window has passed.
    pub fn poll(&mut self, now: Duration) -> Option<GestureEvent> {
        if !matches!(self.mode, Mode::Idle) {
            return None;
        }
        self.taps.poll(now).map(|point| {
            log::debug!("tap at {point:?}");
            GestureEvent::Tap { point }
        })
    }

    fn position_of(&self, contact: K) -> Option<Point> {
        self.down
            .iter()
            .find(|(id, _)| *id == contact)
            .map(|(_, pos)| *pos)
    }

    fn release(&mut self, contact: K) -> bool {
        match self.down.iter().position(|(id, _)| *id == contact) {
            Some(index) => {
                self.down.remove(index);
                true
            }
            None => false,
        }
    }

    fn settle(&mut self) {
        self.mode = if self.down.is_empty() {
            Mode::Idle
        } else {
            Mode::Consumed
        };
    }

    fn on_down(&mut self, input: PointerInput<K>, out: &mut Gestures) {
        let PointerInput {
            contact,
            position,
            time,
            ..
        } = input;
        if self.position_of(contact).is_some() {
            return;
        }
        self.down.push((contact, position));

        match self.mode {
            Mode::Idle => {
                if let Some(point) = self.taps.on_down(position, time) {
                    log::debug!("tap at {point:?}");
                    out.push(GestureEvent::Tap { point });
                }
                self.drag.start(position, time);
                self.mode = Mode::Pressed {
                    contact,
                    origin: position,
                };
            }
            Mode::Pressed { contact: first, .. } | Mode::Dragging { contact: first } => {
                let first_pos = self.position_of(first).unwrap_or(position);
                if let Some(point) = self.taps.abort() {
                    out.push(GestureEvent::Tap { point });
                }
                self.drag.end();
                log::debug!("pinch started with {first:?} and {contact:?}");
                let pinch = PinchState::new((first, first_pos), (contact, position));
                self.mode = Mode::Pinching(pinch);
            }
            Mode::Pinching(_) | Mode::Consumed => {
                log::trace!("ignoring extra contact {contact:?}");
            }
        }
    }

    fn on_move(&mut self, input: PointerInput<K>, out: &mut Gestures) {
        let PointerInput {
            contact,
            position,
            time,
            ..
        } = input;
        let Some(slot) = self.down.iter_mut().find(|(id, _)| *id == contact) else {
            return;
        };
        slot.1 = position;

        match self.mode {
            Mode::Pressed {
                contact: pressed,
                origin,
            } if pressed == contact => {
                if origin.distance(position) <= self.config.touch_slop {
                    return;
                }
                if let Some(point) = self.taps.abort() {
                    out.push(GestureEvent::Tap { point });
                }
                log::debug!("drag started by {contact:?}");
                self.mode = Mode::Dragging { contact };
                self.push_drag(position, time, out);
            }
            Mode::Dragging { contact: dragging } if dragging == contact => {
                self.push_drag(position, time, out);
            }
            Mode::Pinching(ref mut pinch) => {
                if let Some(sample) = pinch.update(contact, position) {
                    out.push(GestureEvent::PinchPan {
                        zoom_ratio: sample.zoom_ratio,
                        pan_delta: sample.pan_delta,
                        focal_point: sample.focal_point,
                    });
                }
            }
            _ => {}
        }
    }

    fn push_drag(&mut self, position: Point, time: Duration, out: &mut Gestures) {
        if let Some(sample) = self.drag.update(position, time) {
            out.push(GestureEvent::DragMove {
                delta: sample.delta,
                velocity_hint: sample.velocity,
            });
        }
    }

    fn on_up(&mut self, input: PointerInput<K>, out: &mut Gestures) {
        let PointerInput {
            contact,
            position,
            time,
            ..
        } = input;
        if !self.release(contact) {
            return;
        }

        match self.mode {
            Mode::Pressed { contact: pressed, .. } if pressed == contact => {
                self.drag.end();
                if let TapOutcome::DoubleTap(point) = self.taps.on_up(position, time) {
                    log::debug!("double tap at {point:?}");
                    out.push(GestureEvent::DoubleTap { point });
                }
                self.mode = Mode::Idle;
            }
            Mode::Dragging { contact: dragging } if dragging == contact => {
                let velocity = self.drag.end().unwrap_or(Vec2::ZERO);
                if velocity.is_finite() && velocity.hypot() > self.config.fling_threshold {
                    log::debug!("fling at {velocity:?} px/s");
                    out.push(GestureEvent::DragEnd { velocity });
                } else {
                    log::trace!("drag released at {velocity:?} px/s, no fling");
                }
                self.mode = Mode::Idle;
            }
            Mode::Pinching(ref pinch) if pinch.contains(contact) => {
                log::debug!("pinch ended by {contact:?}");
                self.settle();
            }
            Mode::Consumed if self.down.is_empty() => self.mode = Mode::Idle,
            _ => {}
        }
    }

    fn on_cancel(&mut self, contact: K, out: &mut Gestures) {
        if !self.release(contact) {
            return;
        }
        let tracked = match self.mode {
            Mode::Pressed { contact: c, .. } | Mode::Dragging { contact: c } => c == contact,
            Mode::Pinching(ref pinch) => pinch.contains(contact),
            Mode::Consumed => true,
            Mode::Idle => false,
        };
        if tracked {
            log::debug!("gesture cancelled by {contact:?}");
            self.drag.end();
            // The cancelled press never counts, but a finished first tap does.
            if let Some(point) = self.taps.abort() {
                out.push(GestureEvent::Tap { point });
            }
            self.settle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn input(contact: u32, phase: PointerPhase, x: f64, y: f64, t: u64) -> PointerInput<u32> {
        PointerInput::new(contact, phase, Point::new(x, y), ms(t))
    }

    fn down(c: u32, x: f64, y: f64, t: u64) -> PointerInput<u32> {
        input(c, PointerPhase::Down, x, y, t)
    }

    fn mv(c: u32, x: f64, y: f64, t: u64) -> PointerInput<u32> {
        input(c, PointerPhase::Move, x, y, t)
    }

    fn up(c: u32, x: f64, y: f64, t: u64) -> PointerInput<u32> {
        input(c, PointerPhase::Up, x, y, t)
    }

    fn interpreter() -> GestureInterpreter<u32> {
        GestureInterpreter::default()
    }

    #[test]
    fn single_tap_confirmed_by_poll() {
        let mut g = interpreter();
        assert!(g.handle(down(1, 50.0, 60.0, 0)).is_empty());
        assert!(g.handle(mv(1, 53.0, 61.0, 20)).is_empty());
        assert!(g.handle(up(1, 53.0, 61.0, 40)).is_empty());
        assert!(!g.is_idle());

        assert_eq!(g.poll(ms(200)), None);
        assert_eq!(
            g.poll(ms(400)),
            Some(GestureEvent::Tap {
                point: Point::new(53.0, 61.0)
            })
        );
        assert!(g.is_idle());
    }

    #[test]
    fn double_tap_reports_second_point() {
        let mut g = interpreter();
        g.handle(down(1, 50.0, 50.0, 0));
        g.handle(up(1, 50.0, 50.0, 30));
        assert!(g.handle(down(1, 60.0, 70.0, 150)).is_empty());

        let events = g.handle(up(1, 60.0, 70.0, 180));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::DoubleTap {
                point: Point::new(60.0, 70.0)
            }]
        );
        assert_eq!(g.poll(ms(2000)), None);
    }

    #[test]
    fn late_press_confirms_stale_tap() {
        let mut g = interpreter();
        g.handle(down(1, 10.0, 10.0, 0));
        g.handle(up(1, 10.0, 10.0, 20));

        let events = g.handle(down(1, 10.0, 10.0, 500));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::Tap {
                point: Point::new(10.0, 10.0)
            }]
        );
        assert!(g.handle(up(1, 10.0, 10.0, 520)).is_empty());
    }

    #[test]
    fn drag_starts_past_slop_and_flings() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        assert!(g.handle(mv(1, 4.0, 0.0, 5)).is_empty());

        let events = g.handle(mv(1, 20.0, 0.0, 10));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::DragMove {
                delta: Vec2::new(20.0, 0.0),
                velocity_hint: Vec2::new(2000.0, 0.0),
            }]
        );

        let events = g.handle(mv(1, 50.0, 0.0, 20));
        assert!(matches!(
            events.as_slice(),
            [GestureEvent::DragMove { delta, .. }] if *delta == Vec2::new(30.0, 0.0)
        ));

        let events = g.handle(up(1, 50.0, 0.0, 20));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::DragEnd {
                velocity: Vec2::new(3000.0, 0.0)
            }]
        );
        assert!(g.is_idle());
    }

    #[test]
    fn slow_release_does_not_fling() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(mv(1, 0.0, 30.0, 100));
        g.handle(mv(1, 0.0, 31.0, 200));

        assert!(g.handle(up(1, 0.0, 31.0, 210)).is_empty());
    }

    #[test]
    fn zero_time_sample_does_not_fling() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(mv(1, 40.0, 0.0, 16));
        let events = g.handle(mv(1, 80.0, 0.0, 16));
        let [GestureEvent::DragMove { velocity_hint, .. }] = events.as_slice() else {
            panic!("expected a drag move, got {events:?}");
        };
        assert!(!velocity_hint.is_finite());

        assert!(g.handle(up(1, 80.0, 0.0, 16)).is_empty());
    }

    #[test]
    fn drag_confirms_pending_tap_first() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(up(1, 0.0, 0.0, 10));
        g.handle(down(1, 5.0, 5.0, 100));

        let events = g.handle(mv(1, 50.0, 5.0, 110));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], GestureEvent::Tap { point: Point::ZERO });
        assert!(matches!(events[1], GestureEvent::DragMove { .. }));
    }

    #[test]
    fn pinch_reports_relative_steps() {
        let mut g = interpreter();
        g.handle(down(1, 100.0, 100.0, 0));
        assert!(g.handle(down(2, 200.0, 100.0, 5)).is_empty());
        assert_eq!(g.active_contacts(), 2);

        let events = g.handle(mv(2, 300.0, 100.0, 20));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::PinchPan {
                zoom_ratio: 2.0,
                pan_delta: Vec2::new(50.0, 0.0),
                focal_point: Point::new(200.0, 100.0),
            }]
        );

        let events = g.handle(mv(1, 100.0, 200.0, 30));
        let [GestureEvent::PinchPan { pan_delta, .. }] = events.as_slice() else {
            panic!("expected a pinch step, got {events:?}");
        };
        assert_eq!(*pan_delta, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn remaining_contact_is_consumed_after_pinch() {
        let mut g = interpreter();
        g.handle(down(1, 100.0, 100.0, 0));
        g.handle(down(2, 200.0, 100.0, 5));
        g.handle(mv(2, 250.0, 100.0, 20));

        assert!(g.handle(up(2, 250.0, 100.0, 30)).is_empty());
        assert!(g.handle(mv(1, 400.0, 400.0, 40)).is_empty());
        assert!(g.handle(mv(1, 800.0, 400.0, 41)).is_empty());
        assert!(g.handle(up(1, 800.0, 400.0, 42)).is_empty());
        assert!(g.is_idle());

        // A fresh press is a tap candidate again.
        g.handle(down(3, 10.0, 10.0, 100));
        g.handle(up(3, 10.0, 10.0, 110));
        assert!(g.poll(ms(500)).is_some());
    }

    #[test]
    fn second_contact_ends_drag_without_fling() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(mv(1, 100.0, 0.0, 10));
        g.handle(mv(1, 200.0, 0.0, 20));
        g.handle(down(2, 300.0, 0.0, 21));

        assert!(g.handle(up(1, 200.0, 0.0, 22)).is_empty());
        assert!(g.handle(up(2, 300.0, 0.0, 23)).is_empty());
    }

    #[test]
    fn third_contact_is_ignored() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(down(2, 100.0, 0.0, 1));
        g.handle(down(3, 50.0, 50.0, 2));

        assert!(g.handle(mv(3, 90.0, 90.0, 3)).is_empty());
        assert!(g.handle(up(3, 90.0, 90.0, 4)).is_empty());
        assert_eq!(g.handle(mv(2, 200.0, 0.0, 5)).len(), 1);
    }

    #[test]
    fn cancel_aborts_without_events() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(mv(1, 100.0, 0.0, 10));
        assert!(
            g.handle(input(1, PointerPhase::Cancel, 0.0, 0.0, 11))
                .is_empty()
        );
        assert!(g.is_idle());
        assert!(g.handle(up(1, 200.0, 0.0, 12)).is_empty());
    }

    #[test]
    fn cancelled_second_press_confirms_first_tap() {
        let mut g = interpreter();
        g.handle(down(1, 10.0, 10.0, 0));
        assert!(g.handle(up(1, 10.0, 10.0, 30)).is_empty());
        g.handle(down(1, 12.0, 12.0, 100));

        let events = g.handle(input(1, PointerPhase::Cancel, 0.0, 0.0, 120));
        assert_eq!(
            events.as_slice(),
            &[GestureEvent::Tap {
                point: Point::new(10.0, 10.0)
            }]
        );
        assert!(g.is_idle());
        assert_eq!(g.poll(ms(1000)), None);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut g = interpreter();
        assert!(g.handle(mv(7, 10.0, 10.0, 0)).is_empty());
        assert!(g.handle(up(7, 10.0, 10.0, 1)).is_empty());
        assert!(g.is_idle());
    }

    #[test]
    fn reset_forgets_everything() {
        let mut g = interpreter();
        g.handle(down(1, 0.0, 0.0, 0));
        g.handle(up(1, 0.0, 0.0, 10));
        g.handle(down(2, 0.0, 0.0, 20));

        g.reset();
        assert!(g.is_idle());
        assert_eq!(g.active_contacts(), 0);
        assert_eq!(g.poll(ms(1000)), None);
    }

    #[test]
    fn double_tap_intent_depends_on_scale() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(
            resolve_double_tap(1.0, p, 3.0),
            DoubleTapIntent::ZoomTo { point: p, scale: 3.0 }
        );
        assert_eq!(resolve_double_tap(1.0001, p, 3.0), DoubleTapIntent::Reset);
    }
}
