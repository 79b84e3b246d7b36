// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::image::PlacedImage;

/// Snapshot of the crop region relative to the placed image.
///
/// `x`/`y` are the offset of the crop window from the image's top-left corner
/// in canvas (scaled) pixels; `width`/`height` are the crop window size; and
/// `scale` is the image scale at the time of extraction. The value owns no
/// state and is recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropDescriptor {
    /// Horizontal offset of the crop window within the scaled image.
    pub x: f64,
    /// Vertical offset of the crop window within the scaled image.
    pub y: f64,
    /// Crop window width.
    pub width: f64,
    /// Crop window height.
    pub height: f64,
    /// Image scale factor.
    pub scale: f64,
}

impl CropDescriptor {
    pub(crate) fn from_parts(window: Rect, image: &PlacedImage) -> Self {
        let offset = window.origin() - image.origin();
        Self {
            x: offset.x,
            y: offset.y,
            width: window.width(),
            height: window.height(),
            scale: image.scale(),
        }
    }

    /// Offset of the crop window within the scaled image.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Crop size in canvas pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Crop region in scaled-image coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Crop region in natural image pixels.
    ///
    /// This is the region an encoder cuts from the decoded source image.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        self.rect().scale_from_origin(1.0 / self.scale)
    }
}
