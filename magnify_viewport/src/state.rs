// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::bounds::bounds_for;
use crate::geometry::ImageGeometry;
use crate::transform::RenderTransform;

/// Smallest allowed scale. At this scale the fitted image fits the box, so
/// both bounds are zero.
pub const MIN_SCALE: f64 = 1.0;

/// Default largest allowed scale.
pub const DEFAULT_MAX_SCALE: f64 = 7.0;

/// One of the two pan axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Picks this axis' component out of a vector.
    #[must_use]
    pub fn of(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }
}

/// Scale and pan offset of a fitted image inside its display box.
///
/// The offset is measured in box pixels from the centered position, and each
/// axis has a legal range `[-bound, bound]` derived from the current scale by
/// [`bounds_for`](crate::bounds_for). Every mutating method keeps these
/// invariants:
///
/// - `MIN_SCALE <= scale <= max_scale`;
/// - `|offset.x| <= bound.x` and `|offset.y| <= bound.y`.
///
/// In particular at scale `1.0` the bounds are zero and the image is
/// centered. Out‑of‑range input is clamped, and non‑finite input is ignored.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use magnify_viewport::{Axis, ImageGeometry, ViewportState};
///
/// let geometry = ImageGeometry::new(Size::new(100.0, 200.0), Size::new(300.0, 300.0));
/// let mut state = ViewportState::new(geometry);
///
/// state.set_scale(2.0);
/// assert_eq!(state.bound(), Vec2::new(0.0, 150.0));
///
/// state.set_offset(Axis::Y, 400.0);
/// assert_eq!(state.offset_on(Axis::Y), 150.0);
///
/// // Shrinking the scale re-clamps the stranded offset.
/// state.set_scale(1.5);
/// assert_eq!(state.offset_on(Axis::Y), 75.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    geometry: ImageGeometry,
    scale: f64,
    offset: Vec2,
    bound: Vec2,
    max_scale: f64,
}

impl ViewportState {
    /// Creates a state at rest: scale `1.0`, centered, zero bounds.
    #[must_use]
    pub fn new(geometry: ImageGeometry) -> Self {
        Self {
            geometry,
            scale: MIN_SCALE,
            offset: Vec2::ZERO,
            bound: Vec2::ZERO,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the geometry the bounds are derived from.
    #[must_use]
    pub fn geometry(&self) -> &ImageGeometry {
        &self.geometry
    }

    /// Replaces the geometry, for example after the box was resized.
    ///
    /// Scale is kept; bounds are recomputed for it and offsets re‑clamped.
    pub fn set_geometry(&mut self, geometry: ImageGeometry) {
        if self.geometry == geometry {
            return;
        }
        log::debug!(
            "viewport geometry: box {:?}, fitted {:?}",
            geometry.box_size(),
            geometry.fitted_size()
        );
        self.geometry = geometry;
        self.rebound();
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `true` when the image is scaled above [`MIN_SCALE`].
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Sets the scale, clamping it into `[MIN_SCALE, max_scale]`.
    ///
    /// Both bounds are recomputed for the new scale before the offsets are
    /// clamped into them.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            log::trace!("ignoring non-finite scale {scale}");
            return;
        }
        self.scale = scale.clamp(MIN_SCALE, self.max_scale);
        self.rebound();
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the largest allowed scale.
    ///
    /// Values below [`MIN_SCALE`] are raised to it. The current scale is
    /// clamped into the new range.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        if !max_scale.is_finite() {
            log::trace!("ignoring non-finite max scale {max_scale}");
            return;
        }
        self.max_scale = max_scale.max(MIN_SCALE);
        self.set_scale(self.scale);
    }

    /// Current pan offset in box pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current pan offset on one axis.
    #[must_use]
    pub fn offset_on(&self, axis: Axis) -> f64 {
        axis.of(self.offset)
    }

    /// Sets the offset on one axis, clamped into that axis' current bound.
    pub fn set_offset(&mut self, axis: Axis, value: f64) {
        if !value.is_finite() {
            log::trace!("ignoring non-finite {axis:?} offset {value}");
            return;
        }
        let bound = axis.of(self.bound);
        let value = value.clamp(-bound, bound);
        match axis {
            Axis::X => self.offset.x = value,
            Axis::Y => self.offset.y = value,
        }
    }

    /// Adds `delta` to the offset, clamping each axis into its bound.
    pub fn pan_by(&mut self, delta: Vec2) {
        for axis in Axis::ALL {
            self.set_offset(axis, self.offset_on(axis) + axis.of(delta));
        }
    }

    /// Current bounds; the offset on each axis stays within `[-bound, bound]`.
    #[must_use]
    pub fn bound(&self) -> Vec2 {
        self.bound
    }

    /// Current bound on one axis.
    #[must_use]
    pub fn bound_on(&self, axis: Axis) -> f64 {
        axis.of(self.bound)
    }

    /// Bounds this state would have at `scale` (clamped into the legal scale
    /// range), without changing anything.
    ///
    /// Animations use this to clamp their targets into the final range before
    /// they start.
    #[must_use]
    pub fn bounds_at(&self, scale: f64) -> Vec2 {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, self.max_scale)
        } else {
            self.scale
        };
        bounds_for(&self.geometry, scale)
    }

    /// Returns to rest: scale `1.0`, zero offset, zero bounds.
    ///
    /// The geometry and max scale are kept.
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.offset = Vec2::ZERO;
        self.bound = Vec2::ZERO;
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn render_transform(&self) -> RenderTransform {
        RenderTransform::new(self.scale, self.offset)
    }

    /// Maps a point in box coordinates to source image pixel coordinates.
    ///
    /// Returns `None` when the point does not land on the image or the image
    /// is empty.
    #[must_use]
    pub fn view_to_image_point(&self, pt: Point) -> Option<Point> {
        let factor = self.geometry.fit_factor();
        if factor <= 0.0 {
            return None;
        }
        let center = self.geometry.box_center();
        // Undo the translation, then the scale about the box center.
        let fitted_pt = center + (pt - center - self.offset) / self.scale;
        let origin = self.geometry.fitted_rect().origin();
        let source = ((fitted_pt - origin) / factor).to_point();
        let size = self.geometry.source_size();
        let inside =
            (0.0..=size.width).contains(&source.x) && (0.0..=size.height).contains(&source.y);
        inside.then_some(source)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            geometry: self.geometry,
            scale: self.scale,
            max_scale: self.max_scale,
            offset: self.offset,
            bound: self.bound,
        }
    }

    fn rebound(&mut self) {
        self.bound = bounds_for(&self.geometry, self.scale);
        self.offset = Vec2::new(
            self.offset.x.clamp(-self.bound.x, self.bound.x),
            self.offset.y.clamp(-self.bound.y, self.bound.y),
        );
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Source, box and fitted sizes.
    pub geometry: ImageGeometry,
    /// Current uniform scale.
    pub scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Current pan offset in box pixels.
    pub offset: Vec2,
    /// Current per‑axis bounds.
    pub bound: Vec2,
}
