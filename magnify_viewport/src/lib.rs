// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=magnify_viewport --heading-base-level=0

//! Magnify Viewport: scale and clamped pan state for a fitted image.
//!
//! This crate provides a small, headless model of an image shown inside a
//! display box. It focuses on:
//! - Fitting a source image into the box while preserving aspect ratio.
//! - The legal pan range on each axis for a given scale.
//! - A [`ViewportState`] whose offsets can never leave that range.
//! - A [`RenderTransform`] snapshot for the renderer.
//!
//! It does **not** decode, own or draw any pixels. Callers are expected to:
//! - Rebuild [`ImageGeometry`] when the image or the box size changes.
//! - Drive scale and offsets from gestures or animations at a higher layer
//!   (see `magnify_gesture` and `magnify_motion`).
//! - Read [`ViewportState::render_transform`] once per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use magnify_viewport::{ImageGeometry, ViewportState};
//!
//! // A 100x200 image in a 300x300 box is displayed at 150x300.
//! let geometry = ImageGeometry::new(Size::new(100.0, 200.0), Size::new(300.0, 300.0));
//! assert_eq!(geometry.fitted_size(), Size::new(150.0, 300.0));
//!
//! let mut state = ViewportState::new(geometry);
//!
//! // At rest nothing can be panned.
//! state.pan_by(Vec2::new(40.0, 40.0));
//! assert_eq!(state.offset(), Vec2::ZERO);
//!
//! // At 2x the image overhangs the box vertically by 300px.
//! state.set_scale(2.0);
//! state.pan_by(Vec2::new(40.0, 400.0));
//! assert_eq!(state.offset(), Vec2::new(0.0, 150.0));
//!
//! let transform = state.render_transform();
//! assert_eq!(transform.pixel_offset_y, 150);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform and never drops below `1.0`; at `1.0` the whole image
//!   is visible and centered.
//! - Offsets are measured in box pixels from the centered position.
//! - Degenerate sizes (zero, negative, non‑finite) never divide by zero; they
//!   collapse to "image fits" with zero bounds.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod geometry;
mod state;
mod transform;

pub use bounds::{axis_bound, bounds_for};
pub use geometry::ImageGeometry;
pub use state::{Axis, DEFAULT_MAX_SCALE, MIN_SCALE, ViewportDebugInfo, ViewportState};
pub use transform::RenderTransform;
