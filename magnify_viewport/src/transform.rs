// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

/// Per‑frame snapshot handed to the renderer.
///
/// The renderer draws the fitted image centered in the box, scales it
/// uniformly by `scale` about the box center and then translates it by the
/// pixel offset. It performs no clamping of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderTransform {
    /// Uniform scale about the box center.
    pub scale: f64,
    /// Horizontal translation in whole pixels.
    pub pixel_offset_x: i32,
    /// Vertical translation in whole pixels.
    pub pixel_offset_y: i32,
}

impl RenderTransform {
    /// Identity transform: unscaled and centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        pixel_offset_x: 0,
        pixel_offset_y: 0,
    };

    /// Builds a transform from a scale and a fractional offset.
    ///
    /// Offsets are rounded half up, so `-2.5` becomes `-2` and `2.5`
    /// becomes `3`.
    #[must_use]
    pub fn new(scale: f64, offset: Vec2) -> Self {
        Self {
            scale,
            pixel_offset_x: round_half_up(offset.x),
            pixel_offset_y: round_half_up(offset.y),
        }
    }

    /// Pixel offset as a vector.
    #[must_use]
    pub fn pixel_offset(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.pixel_offset_x),
            f64::from(self.pixel_offset_y),
        )
    }

    /// Equivalent affine transform for a box of `box_size`.
    ///
    /// Maps box coordinates of the fitted, unscaled image to box coordinates
    /// on screen.
    #[must_use]
    pub fn to_affine(&self, box_size: Size) -> Affine {
        let center = Vec2::new(box_size.width / 2.0, box_size.height / 2.0);
        Affine::translate(center + self.pixel_offset())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

impl Default for RenderTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the rendered image size"
)]
fn round_half_up(v: f64) -> i32 {
    libm::floor(v + 0.5) as i32
}
