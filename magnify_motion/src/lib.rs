// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=magnify_motion --heading-base-level=0

//! Magnify Motion: cancellable transitions for a magnify viewport.
//!
//! This crate animates the three values of a
//! [`ViewportState`](magnify_viewport::ViewportState) (scale and the two
//! offsets) over time:
//!
//! - [`Transition::ease`] interpolates toward a target along an [`Easing`]
//!   curve. Double‑tap zoom uses it.
//! - [`Transition::decay`] lets a value coast under [`ExponentialDecay`]. Fling
//!   uses it.
//! - [`TransitionScheduler`] holds one transition per [`Channel`], replaces
//!   the running one when a new one starts, and writes values through the
//!   state's clamping setters on every [`tick`](TransitionScheduler::tick).
//!
//! Live drag and pinch do not animate. Callers cancel the affected channels
//! and write the state directly.
//!
//! Time is a [`Duration`](core::time::Duration) since an arbitrary epoch
//! chosen by the host; nothing here reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use magnify_motion::{Channel, ExponentialDecay, Transition, TransitionScheduler};
//! use magnify_viewport::{Axis, ImageGeometry, ViewportState};
//!
//! let ms = Duration::from_millis;
//! let geometry = ImageGeometry::new(Size::new(100.0, 200.0), Size::new(300.0, 300.0));
//! let mut state = ViewportState::new(geometry);
//! state.set_scale(2.0);
//!
//! // Fling down at 3000 px/s; the vertical bound at 2x is 150px.
//! let fling = Transition::decay(Channel::OffsetY, 0.0, 3000.0, ms(0), ExponentialDecay::default());
//! let mut scheduler = TransitionScheduler::new();
//! scheduler.start(fling.unwrap());
//!
//! let mut now = 0;
//! while scheduler.tick(ms(now), &mut state) {
//!     now += 16;
//! }
//! assert_eq!(state.offset_on(Axis::Y), 150.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod decay;
mod easing;
mod scheduler;
mod transition;

pub use config::MotionConfig;
pub use decay::ExponentialDecay;
pub use easing::Easing;
pub use scheduler::TransitionScheduler;
pub use transition::{Channel, Transition, TransitionKind, TransitionSample};
