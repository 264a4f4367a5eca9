// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=magnify --heading-base-level=0

//! Magnify: an interactive pan/zoom/fling controller for a displayed image.
//!
//! [`ZoomController`] ties together the three component crates:
//!
//! - [`magnify_viewport`]: the fitted image geometry, the clamped
//!   scale/offset state and the per‑frame [`RenderTransform`].
//! - [`magnify_gesture`]: classification of raw pointer input into tap,
//!   double‑tap, drag, fling and pinch gestures.
//! - [`magnify_motion`]: eased zoom and decaying fling transitions, one per
//!   animated value.
//!
//! The controller applies each gesture the way an image viewer expects:
//!
//! - Double tap at rest zooms to [`ControllerConfig::double_tap_zoom`]
//!   around the tapped point; double tap while zoomed animates back to rest.
//! - Drag pans immediately, clamped to the image edges.
//! - A fast release flings with exponential decay and stops at the edge.
//! - Pinch scales and pans immediately, within `[1, max_scale]`.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use magnify::{PointerInput, PointerPhase, ZoomController};
//!
//! let ms = Duration::from_millis;
//! let mut viewer = ZoomController::<u32>::new(Size::new(100.0, 200.0), Size::new(300.0, 300.0));
//!
//! // Double tap in the middle of the box.
//! let center = Point::new(150.0, 150.0);
//! for (phase, t) in [
//!     (PointerPhase::Down, 0),
//!     (PointerPhase::Up, 40),
//!     (PointerPhase::Down, 120),
//!     (PointerPhase::Up, 160),
//! ] {
//!     viewer.handle_pointer(PointerInput::new(0, phase, center, ms(t)));
//! }
//!
//! // Drive the zoom animation to completion.
//! let mut now = 160;
//! while viewer.tick(ms(now)) {
//!     now += 16;
//! }
//!
//! let transform = viewer.render_transform();
//! assert_eq!(transform.scale, 2.0);
//! assert_eq!((transform.pixel_offset_x, transform.pixel_offset_y), (0, 0));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`ControllerConfig`] and
//!   the component configs.
//! - `ui_events_adapter`: `ZoomController::handle_ui_event` for
//!   `ui_events::pointer::PointerEvent`.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod error;

pub use config::ControllerConfig;
pub use controller::ZoomController;
pub use error::ConfigError;

pub use magnify_gesture::{
    DoubleTapIntent, GestureConfig, GestureEvent, Gestures, PointerInput, PointerPhase,
};
pub use magnify_motion::{Easing, ExponentialDecay, MotionConfig};
pub use magnify_viewport::{ImageGeometry, RenderTransform, ViewportState};

pub use magnify_gesture;
pub use magnify_motion;
pub use magnify_viewport;
