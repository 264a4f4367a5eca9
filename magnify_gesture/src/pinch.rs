// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two‑contact pinch tracking: zoom ratio, centroid pan and focal point.

use core::fmt::Debug;

use kurbo::{Point, Vec2};

/// One step of a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Current contact distance over the previous one.
    pub zoom_ratio: f64,
    /// Movement of the centroid since the previous step.
    pub pan_delta: Vec2,
    /// Current centroid of the two contacts.
    pub focal_point: Point,
}

/// Tracks the two contacts of a pinch.
#[derive(Clone, Debug)]
pub struct PinchState<K> {
    contacts: [(K, Point); 2],
    centroid: Point,
    distance: f64,
}

impl<K: Copy + PartialEq + Debug> PinchState<K> {
    /// Starts a pinch from two contacts and their positions.
    pub fn new(first: (K, Point), second: (K, Point)) -> Self {
        Self {
            contacts: [first, second],
            centroid: first.1.midpoint(second.1),
            distance: first.1.distance(second.1),
        }
    }

    /// Returns `true` if `contact` is one of the two tracked contacts.
    pub fn contains(&self, contact: K) -> bool {
        self.contacts.iter().any(|(id, _)| *id == contact)
    }

    /// Current centroid of both contacts.
    pub fn focal_point(&self) -> Point {
        self.centroid
    }

    /// Moves one contact and reports the resulting step.
    ///
    /// Returns `None` for contacts outside the pinch. When the previous
    /// distance was zero (both contacts on the same spot) the ratio is `1.0`.
    pub fn update(&mut self, contact: K, pos: Point) -> Option<PinchSample> {
        let slot = self.contacts.iter_mut().find(|(id, _)| *id == contact)?;
        slot.1 = pos;

        let [(_, a), (_, b)] = self.contacts;
        let centroid = a.midpoint(b);
        let distance = a.distance(b);
        let zoom_ratio = if self.distance > 0.0 && distance.is_finite() {
            distance / self.distance
        } else {
            1.0
        };
        let pan_delta = centroid - self.centroid;
        self.centroid = centroid;
        self.distance = distance;

        Some(PinchSample {
            zoom_ratio,
            pan_delta,
            focal_point: centroid,
        })
    }
}
