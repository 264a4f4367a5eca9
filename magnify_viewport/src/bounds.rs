// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legal pan range for a centered, fitted image.

use kurbo::Vec2;

use crate::geometry::ImageGeometry;

/// Returns the largest absolute offset allowed on one axis.
///
/// The image is centered in the box, so it may be panned until its far edge
/// reaches the box edge: half the overhang. When the rendered image is
/// smaller than the box on this axis the bound is `0.0` and no panning is
/// allowed.
///
/// Degenerate input (negative or non‑finite dimensions) is treated as "image
/// fits" and also yields `0.0`.
///
/// ```
/// use magnify_viewport::axis_bound;
///
/// assert_eq!(axis_bound(300.0, 150.0), 0.0);
/// assert_eq!(axis_bound(300.0, 300.0), 0.0);
/// assert_eq!(axis_bound(300.0, 600.0), 150.0);
/// ```
#[must_use]
pub fn axis_bound(box_dim: f64, image_dim: f64) -> f64 {
    if !box_dim.is_finite() || !image_dim.is_finite() {
        return 0.0;
    }
    let box_dim = box_dim.max(0.0);
    let image_dim = image_dim.max(0.0);
    if image_dim < box_dim {
        return 0.0;
    }
    (image_dim - box_dim) / 2.0
}

/// Returns the bounds for both axes of `geometry` at `scale`.
///
/// The rendered image size is `fitted_size * scale`. Each component of the
/// result is computed independently with [`axis_bound`].
#[must_use]
pub fn bounds_for(geometry: &ImageGeometry, scale: f64) -> Vec2 {
    let fitted = geometry.fitted_size();
    let box_size = geometry.box_size();
    Vec2::new(
        axis_bound(box_size.width, fitted.width * scale),
        axis_bound(box_size.height, fitted.height * scale),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    #[test]
    fn smaller_image_has_no_slack() {
        assert_eq!(axis_bound(300.0, 299.9), 0.0);
        assert_eq!(axis_bound(300.0, 0.0), 0.0);
    }

    #[test]
    fn overhang_is_split_between_both_sides() {
        assert_eq!(axis_bound(300.0, 300.0), 0.0);
        assert_eq!(axis_bound(300.0, 700.0), 200.0);
        assert_eq!(axis_bound(0.0, 10.0), 5.0);
    }

    #[test]
    fn degenerate_dimensions_fit() {
        assert_eq!(axis_bound(f64::NAN, 10.0), 0.0);
        assert_eq!(axis_bound(10.0, f64::INFINITY), 0.0);
        assert_eq!(axis_bound(-10.0, -5.0), 0.0);
    }

    #[test]
    fn both_axes_follow_scale() {
        let geometry = ImageGeometry::new(Size::new(100.0, 200.0), Size::new(300.0, 300.0));

        assert_eq!(bounds_for(&geometry, 1.0), Vec2::ZERO);
        assert_eq!(bounds_for(&geometry, 2.0), Vec2::new(0.0, 150.0));
        assert_eq!(bounds_for(&geometry, 4.0), Vec2::new(150.0, 450.0));
    }
}
