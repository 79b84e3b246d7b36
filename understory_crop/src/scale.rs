// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom handling: slider mapping and centroid-preserving rescale.

use kurbo::{Rect, Size, Vec2};

use crate::bounds::{is_positive, solve_image};
use crate::error::CropError;
use crate::geometry::{EPSILON, add, subtract};
use crate::image::PlacedImage;

/// Upper end of the host zoom slider; the lower end is `0`.
pub const ZOOM_INPUT_MAX: f64 = 100.0;

/// Smallest scale at which an image of `natural` size still covers `window`.
#[must_use]
pub fn min_cover_scale(natural: Size, window: Size) -> f64 {
    (window.width / natural.width).max(window.height / natural.height)
}

/// Maps a zoom slider value in `[0, ZOOM_INPUT_MAX]` onto `[scale_min, 1]`.
///
/// Out-of-range and NaN inputs are clamped into the slider range.
#[must_use]
pub fn scale_for_zoom_input(value: f64, scale_min: f64) -> f64 {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, ZOOM_INPUT_MAX)
    };
    scale_min + value * (1.0 - scale_min) / ZOOM_INPUT_MAX
}

/// Inverse of [`scale_for_zoom_input`], clamped into the slider range.
///
/// Returns `0` when the mapping is degenerate (`scale_min == 1`).
#[must_use]
pub fn zoom_input_for_scale(scale: f64, scale_min: f64) -> f64 {
    let span = 1.0 - scale_min;
    if span.abs() < EPSILON {
        return 0.0;
    }
    ((scale - scale_min) * ZOOM_INPUT_MAX / span).clamp(0.0, ZOOM_INPUT_MAX)
}

/// Rescales `image` so the point under the window center stays put, then
/// re-solves bounds.
pub(crate) fn apply_scale(
    image: &mut PlacedImage,
    window: Rect,
    new_scale: f64,
) -> Result<(), CropError> {
    if !is_positive(new_scale) {
        return Err(CropError::InvalidScale(new_scale));
    }
    let before = image.effective_size();
    let centroid = subtract(window.center(), image.origin());

    image.set_scale(new_scale);
    let after = image.effective_size();
    let moved = Vec2::new(
        centroid.x * (after.width / before.width),
        centroid.y * (after.height / before.height),
    );
    image.set_origin(add(image.origin(), centroid - moved));
    tracing::trace!(scale = new_scale, "rescaled image");

    solve_image(image, window);
    Ok(())
}

/// Raises the image scale to the minimum cover scale when it has fallen below
/// it. Returns `true` if the scale changed.
///
/// Fails with [`CropError::InvalidScale`] when the minimum cover scale is not
/// a usable scale; `image` is left untouched in that case.
pub(crate) fn enforce_min_scale(
    image: &mut PlacedImage,
    window: Rect,
) -> Result<bool, CropError> {
    let scale_min = min_cover_scale(image.natural_size(), window.size());
    if !is_positive(scale_min) {
        return Err(CropError::InvalidScale(scale_min));
    }
    if image.scale() >= scale_min {
        solve_image(image, window);
        return Ok(false);
    }
    tracing::debug!(
        from = image.scale(),
        to = scale_min,
        "raising image scale to cover crop window"
    );
    apply_scale(image, window, scale_min)?;
    Ok(true)
}
