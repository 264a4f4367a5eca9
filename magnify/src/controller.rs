// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use magnify_gesture::{
    DoubleTapIntent, GestureEvent, GestureInterpreter, Gestures, PointerInput, resolve_double_tap,
};
use magnify_motion::{Channel, Transition, TransitionScheduler};
use magnify_viewport::{Axis, ImageGeometry, MIN_SCALE, RenderTransform, ViewportState};

use crate::config::ControllerConfig;
use crate::error::ConfigError;

/// Pan, pinch‑zoom, double‑tap zoom and fling for one displayed image.
///
/// The controller owns the [`ViewportState`], a [`GestureInterpreter`] and a
/// [`TransitionScheduler`]. Feed it pointer input with
/// [`handle_pointer`](Self::handle_pointer), call [`tick`](Self::tick) once
/// per frame while [`is_animating`](Self::is_animating), and draw with
/// [`render_transform`](Self::render_transform).
///
/// Every gesture intent wins over whatever was animating before it: a drag
/// cancels a running fling or zoom on the offsets, a pinch cancels
/// everything, and a new zoom replaces the transitions it targets.
#[derive(Clone, Debug)]
pub struct ZoomController<K> {
    config: ControllerConfig,
    state: ViewportState,
    gestures: GestureInterpreter<K>,
    scheduler: TransitionScheduler,
}

impl<K: Copy + PartialEq + Debug> ZoomController<K> {
    /// Creates a controller with default settings for an image of
    /// `image_size` pixels shown in a box of `box_size`.
    pub fn new(image_size: Size, box_size: Size) -> Self {
        Self::build(image_size, box_size, ControllerConfig::default())
    }

    /// Creates a controller with custom settings.
    pub fn with_config(
        image_size: Size,
        box_size: Size,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(image_size, box_size, config))
    }

    fn build(image_size: Size, box_size: Size, config: ControllerConfig) -> Self {
        Self {
            state: Self::fresh_state(ImageGeometry::new(image_size, box_size), &config),
            gestures: GestureInterpreter::new(config.gesture),
            scheduler: TransitionScheduler::new(),
            config,
        }
    }

    fn fresh_state(geometry: ImageGeometry, config: &ControllerConfig) -> ViewportState {
        log::debug!(
            "image {:?} in box {:?}, fitted {:?}",
            geometry.source_size(),
            geometry.box_size(),
            geometry.fitted_size()
        );
        let mut state = ViewportState::new(geometry);
        state.set_max_scale(config.max_scale);
        state
    }

    /// Settings in use.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current viewport state.
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Current image geometry.
    pub fn geometry(&self) -> &ImageGeometry {
        self.state.geometry()
    }

    /// Snapshot for the renderer.
    pub fn render_transform(&self) -> RenderTransform {
        self.state.render_transform()
    }

    /// Returns `true` while a transition still needs [`tick`](Self::tick).
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Shows a different image in the same box.
    ///
    /// The viewport starts over at rest; running animations and gestures in
    /// progress are dropped.
    pub fn set_image(&mut self, image_size: Size) {
        let geometry = ImageGeometry::new(image_size, self.state.geometry().box_size());
        self.state = Self::fresh_state(geometry, &self.config);
        self.scheduler.cancel_all();
        self.gestures.reset();
    }

    /// Resizes the display box, keeping the scale and re‑clamping offsets.
    ///
    /// A gesture in progress is dropped when the size actually changes.
    pub fn set_box_size(&mut self, box_size: Size) {
        let geometry = self.state.geometry().with_box_size(box_size);
        if geometry == *self.state.geometry() {
            return;
        }
        self.state.set_geometry(geometry);
        self.gestures.reset();
    }

    /// Classifies one pointer event and applies the resulting gestures.
    ///
    /// Returns the gestures so hosts can react to taps themselves.
    pub fn handle_pointer(&mut self, input: PointerInput<K>) -> Gestures {
        let events = self.gestures.handle(input);
        for event in &events {
            self.apply(*event, input.time);
        }
        events
    }

    /// Confirms a pending single tap once its double‑tap window is over.
    pub fn poll(&mut self, now: Duration) -> Option<GestureEvent> {
        let event = self.gestures.poll(now)?;
        self.apply(event, now);
        Some(event)
    }

    /// Applies one gesture at time `now`.
    pub fn apply(&mut self, event: GestureEvent, now: Duration) {
        match event {
            GestureEvent::Tap { point } => {
                log::trace!("tap at {point:?} has no viewport effect");
            }
            GestureEvent::DoubleTap { point } => {
                let intent =
                    resolve_double_tap(self.state.scale(), point, self.config.double_tap_zoom);
                log::debug!("double tap at {point:?}: {intent:?}");
                match intent {
                    DoubleTapIntent::Reset => self.reset(now),
                    DoubleTapIntent::ZoomTo { point, scale } => self.zoom_to(point, scale, now),
                }
            }
            GestureEvent::DragMove { delta, .. } => {
                self.scheduler.cancel(Channel::OffsetX);
                self.scheduler.cancel(Channel::OffsetY);
                self.state.pan_by(delta);
                log::trace!("drag {delta:?} -> offset {:?}", self.state.offset());
            }
            GestureEvent::DragEnd { velocity } => self.fling(velocity, now),
            GestureEvent::PinchPan {
                zoom_ratio,
                pan_delta,
                ..
            } => {
                self.scheduler.cancel_all();
                self.state.set_scale(self.state.scale() * zoom_ratio);
                self.state.pan_by(pan_delta);
                log::trace!(
                    "pinch x{zoom_ratio} {pan_delta:?} -> scale {}, offset {:?}",
                    self.state.scale(),
                    self.state.offset()
                );
            }
        }
    }

    /// Animates to the double‑tap zoom, keeping `point` where it is on screen.
    pub fn zoom_to_point(&mut self, point: Point, now: Duration) {
        self.zoom_to(point, self.config.double_tap_zoom, now);
    }

    /// Animates to `scale`, keeping `point` where it is on screen as far as
    /// the bounds at `scale` allow.
    pub fn zoom_to(&mut self, point: Point, scale: f64, now: Duration) {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, self.state.max_scale())
        } else {
            self.state.scale()
        };
        // The image point under `point` must land on `point` again at the new
        // scale. From rest this is `(scale - 1) * (center - point)`.
        let from_center = point - self.state.geometry().box_center();
        let ratio = scale / self.state.scale();
        let offset = from_center - (from_center - self.state.offset()) * ratio;
        self.animate_to(scale, offset, now);
    }

    /// Animates back to scale `1.0` and zero offset.
    pub fn reset(&mut self, now: Duration) {
        self.animate_to(MIN_SCALE, Vec2::ZERO, now);
    }

    fn animate_to(&mut self, scale: f64, offset: Vec2, now: Duration) {
        // Clamp against the bounds of the target scale, not the current one.
        let bound = self.state.bounds_at(scale);
        let target = Vec2::new(
            offset.x.clamp(-bound.x, bound.x),
            offset.y.clamp(-bound.y, bound.y),
        );
        log::debug!("animate to scale {scale}, offset {target:?} (asked {offset:?})");

        let motion = self.config.motion;
        let ease = |channel: Channel, from: f64, to: f64| {
            Transition::ease(channel, from, to, now, motion.zoom_duration, motion.zoom_easing)
        };
        self.scheduler.start(ease(Channel::Scale, self.state.scale(), scale));
        for axis in Axis::ALL {
            self.scheduler.start(ease(
                Channel::offset(axis),
                self.state.offset_on(axis),
                axis.of(target),
            ));
        }
    }

    fn fling(&mut self, velocity: Vec2, now: Duration) {
        if !velocity.is_finite() {
            log::debug!("fling rejected: non-finite velocity {velocity:?}");
            return;
        }
        let decay = self.config.motion.decay;
        let mut started = false;
        for axis in Axis::ALL {
            let channel = Channel::offset(axis);
            let from = self.state.offset_on(axis);
            match Transition::decay(channel, from, axis.of(velocity), now, decay) {
                Some(transition) => {
                    self.scheduler.start(transition);
                    started = true;
                }
                None => {
                    self.scheduler.cancel(channel);
                }
            }
        }
        if started {
            log::debug!("fling at {velocity:?} px/s");
        } else {
            log::debug!("fling rejected: {velocity:?} px/s is below the stop threshold");
        }
    }

    /// Advances running animations to `now`.
    ///
    /// Returns `true` while more frames are needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.scheduler.tick(now, &mut self.state)
    }
}

#[cfg(feature = "ui_events_adapter")]
impl ZoomController<magnify_gesture::adapter::UiContact> {
    /// Classifies and applies a `ui-events` pointer event.
    ///
    /// Coalesced move samples are applied before the current one. Events
    /// other than press, move, release and cancel are ignored.
    pub fn handle_ui_event(&mut self, event: &ui_events::pointer::PointerEvent) -> Gestures {
        let mut out = Gestures::new();
        for input in magnify_gesture::adapter::pointer_inputs(event) {
            out.extend(self.handle_pointer(input));
        }
        out
    }
}
