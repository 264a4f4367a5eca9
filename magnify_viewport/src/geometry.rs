// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Source image size, display box size, and the derived fitted size.
///
/// `ImageGeometry` is a pure value: it is rebuilt from `(source_size,
/// box_size)` whenever either changes rather than being patched in place, so
/// the fitted size can never go stale.
///
/// The fitted size is the source scaled uniformly by the smaller of the two
/// axis ratios so the whole image fits inside the box, preserving aspect
/// ratio. It is what the renderer draws at scale `1.0`.
///
/// With the `serde` feature only the source and box sizes are stored; the
/// fitted size is recomputed on deserialization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "GeometryRepr", into = "GeometryRepr")
)]
pub struct ImageGeometry {
    source_size: Size,
    box_size: Size,
    fitted_size: Size,
}

impl ImageGeometry {
    /// Creates the geometry for a source image shown in a display box.
    ///
    /// Negative or non‑finite dimensions are treated as zero. A zero‑sized
    /// source or box yields a zero fitted size.
    #[must_use]
    pub fn new(source_size: Size, box_size: Size) -> Self {
        let source_size = sanitize(source_size);
        let box_size = sanitize(box_size);
        Self {
            source_size,
            box_size,
            fitted_size: fit(source_size, box_size),
        }
    }

    /// Creates the geometry from integer pixel dimensions of a decoded image.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, box_size: Size) -> Self {
        Self::new(Size::new(f64::from(width), f64::from(height)), box_size)
    }

    /// Returns a copy of this geometry for a different display box.
    #[must_use]
    pub fn with_box_size(&self, box_size: Size) -> Self {
        Self::new(self.source_size, box_size)
    }

    /// Size of the raw source image in pixels.
    #[must_use]
    pub fn source_size(&self) -> Size {
        self.source_size
    }

    /// Size of the display area.
    #[must_use]
    pub fn box_size(&self) -> Size {
        self.box_size
    }

    /// Size of the image as displayed at scale `1.0`.
    #[must_use]
    pub fn fitted_size(&self) -> Size {
        self.fitted_size
    }

    /// Center of the display box in box coordinates.
    #[must_use]
    pub fn box_center(&self) -> Point {
        Point::new(self.box_size.width / 2.0, self.box_size.height / 2.0)
    }

    /// Uniform factor mapping source pixels to fitted pixels.
    ///
    /// Returns `0.0` when the source or the box is empty.
    #[must_use]
    pub fn fit_factor(&self) -> f64 {
        if self.source_size.width > 0.0 {
            self.fitted_size.width / self.source_size.width
        } else {
            0.0
        }
    }

    /// Rectangle occupied by the fitted image in box coordinates, centered in
    /// the box.
    #[must_use]
    pub fn fitted_rect(&self) -> Rect {
        Rect::from_center_size(self.box_center(), self.fitted_size)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GeometryRepr {
    source_size: Size,
    box_size: Size,
}

#[cfg(feature = "serde")]
impl From<GeometryRepr> for ImageGeometry {
    fn from(repr: GeometryRepr) -> Self {
        Self::new(repr.source_size, repr.box_size)
    }
}

#[cfg(feature = "serde")]
impl From<ImageGeometry> for GeometryRepr {
    fn from(geometry: ImageGeometry) -> Self {
        Self {
            source_size: geometry.source_size,
            box_size: geometry.box_size,
        }
    }
}

fn sanitize(size: Size) -> Size {
    let dim = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(dim(size.width), dim(size.height))
}

fn fit(source: Size, bx: Size) -> Size {
    if source.width <= 0.0 || source.height <= 0.0 || bx.width <= 0.0 || bx.height <= 0.0 {
        return Size::ZERO;
    }
    let sx = bx.width / source.width;
    let sy = bx.height / source.height;
    // Pin the limiting axis to the box exactly so rounding never lets the
    // fitted size poke past it.
    if sx <= sy {
        Size::new(bx.width, (source.height * sx).min(bx.height))
    } else {
        Size::new((source.width * sy).min(bx.width), bx.height)
    }
}
