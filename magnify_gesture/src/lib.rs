// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=magnify_gesture --heading-base-level=0

//! Magnify Gesture: classify raw pointer input into viewer gestures.
//!
//! This crate turns a stream of timestamped pointer events into the handful
//! of gestures an image viewer cares about:
//!
//! - [`GestureEvent::Tap`] and [`GestureEvent::DoubleTap`], with spatial and
//!   temporal tolerance (see [`tap`]).
//! - [`GestureEvent::DragMove`] for single‑contact movement past the touch
//!   slop, with an instantaneous velocity estimate (see [`drag`]).
//! - [`GestureEvent::DragEnd`] when a drag is released faster than the fling
//!   threshold.
//! - [`GestureEvent::PinchPan`] for two contacts, reported as relative steps
//!   (see [`pinch`]).
//!
//! It does not touch any viewport state. [`resolve_double_tap`] maps a double
//! tap to a [`DoubleTapIntent`] given the current scale; applying intents is
//! left to a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Vec2};
//! use magnify_gesture::{GestureEvent, GestureInterpreter, PointerInput, PointerPhase};
//!
//! let ms = Duration::from_millis;
//! let mut gestures = GestureInterpreter::<u32>::default();
//!
//! let at = |phase, x, t| PointerInput::new(0, phase, Point::new(x, 100.0), ms(t));
//! assert!(gestures.handle(at(PointerPhase::Down, 0.0, 0)).is_empty());
//!
//! // Moving past the touch slop starts a drag.
//! let events = gestures.handle(at(PointerPhase::Move, 30.0, 10));
//! assert!(matches!(
//!     events[0],
//!     GestureEvent::DragMove { delta, .. } if delta == Vec2::new(30.0, 0.0)
//! ));
//!
//! // Released at 3000 px/s, which is above the default fling threshold.
//! let events = gestures.handle(at(PointerPhase::Up, 30.0, 10));
//! assert!(matches!(events[0], GestureEvent::DragEnd { .. }));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`].
//! - `ui_events_adapter`: convert `ui_events::pointer::PointerEvent` into
//!   [`PointerInput`] (see `adapter`).
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "ui_events_adapter")]
pub mod adapter;
mod config;
pub mod drag;
mod interpreter;
pub mod pinch;
pub mod tap;

pub use config::GestureConfig;
pub use interpreter::{
    DoubleTapIntent, GestureEvent, GestureInterpreter, Gestures, PointerInput, PointerPhase,
    resolve_double_tap,
};
