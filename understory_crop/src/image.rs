// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// The source image as currently placed on the canvas.
///
/// Position is the top-left corner of the scaled image in canvas space. The
/// on-canvas size is `natural_size * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedImage {
    natural_size: Size,
    origin: Point,
    scale: f64,
}

impl PlacedImage {
    pub(crate) fn new(natural_size: Size, origin: Point) -> Self {
        Self {
            natural_size,
            origin,
            scale: 1.0,
        }
    }

    /// Decoded image dimensions in pixels.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// Top-left corner of the scaled image in canvas space.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// On-canvas size at the current scale.
    #[must_use]
    pub fn effective_size(&self) -> Size {
        self.natural_size * self.scale
    }

    /// On-canvas bounding box at the current scale.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.effective_size())
    }

    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}
