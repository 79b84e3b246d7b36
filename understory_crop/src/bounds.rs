// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds constraints for the placed image and the crop window.
//!
//! Image correction is a per-axis clamp of the image origin against the crop
//! window. It uses the smallest displacement that restores coverage and never
//! touches the image scale.

use kurbo::{Point, Rect, Size, Vec2};

use crate::error::CropError;
use crate::geometry::{EPSILON, contains_rect};
use crate::image::PlacedImage;
use crate::window::{CropWindow, ResizeHandle, ResizeOutcome};

/// Clamps the image origin so the scaled image covers `window`.
pub(crate) fn solve_image(image: &mut PlacedImage, window: Rect) {
    let size = image.effective_size();
    let origin = image.origin();
    let solved = Point::new(
        clamp_axis(origin.x, size.width, window.x0, window.width()),
        clamp_axis(origin.y, size.height, window.y0, window.height()),
    );
    if solved != origin {
        tracing::trace!(
            from_x = origin.x,
            from_y = origin.y,
            to_x = solved.x,
            to_y = solved.y,
            "clamped image origin"
        );
        image.set_origin(solved);
    }
}

/// Clamps one axis of the image origin.
///
/// `max_pos` is the largest origin that leaves no gap at the leading edge,
/// `min_pos` the smallest that leaves no gap at the trailing edge. When the
/// image is shorter than the window the interval is inverted and the leading
/// edge wins.
fn clamp_axis(pos: f64, extent: f64, window_min: f64, window_len: f64) -> f64 {
    let max_pos = window_min;
    let min_pos = window_min + window_len - extent;
    if extent < window_len {
        if pos < max_pos {
            max_pos
        } else if pos > min_pos {
            min_pos
        } else {
            pos
        }
    } else if pos > max_pos {
        max_pos
    } else if pos < min_pos {
        min_pos
    } else {
        pos
    }
}

/// Applies a corner-handle resize to a resizable crop window.
///
/// Each axis is evaluated on its own. An axis whose proposed extent leaves the
/// canvas keeps its last accepted scale factor, and its position is clamped to
/// be non-negative. The resulting window must lie inside the canvas.
pub(crate) fn resize_window(
    window: &CropWindow,
    canvas: Size,
    requested: Size,
    handle: ResizeHandle,
) -> Result<(CropWindow, ResizeOutcome), CropError> {
    let rejected = CropError::InvalidCropWindowResize {
        width: requested.width,
        height: requested.height,
    };
    let CropWindow::Resizable {
        origin,
        base_size,
        scale,
    } = *window
    else {
        return Err(CropError::FixedCropWindow);
    };
    if !is_positive(requested.width) || !is_positive(requested.height) {
        return Err(rejected);
    }

    let rect = window.rect();
    let (x, scale_x, width_accepted) = resize_axis(
        AxisSpan {
            min: origin.x,
            max: rect.x1,
            base: base_size.width,
            scale: scale.x,
        },
        requested.width,
        handle.moves_left(),
        canvas.width,
    );
    let (y, scale_y, height_accepted) = resize_axis(
        AxisSpan {
            min: origin.y,
            max: rect.y1,
            base: base_size.height,
            scale: scale.y,
        },
        requested.height,
        handle.moves_top(),
        canvas.height,
    );

    let resized = CropWindow::Resizable {
        origin: Point::new(x, y),
        base_size,
        scale: Vec2::new(scale_x, scale_y),
    };
    if !contains_rect(canvas.to_rect(), resized.rect(), EPSILON) {
        return Err(rejected);
    }
    Ok((
        resized,
        ResizeOutcome {
            width_accepted,
            height_accepted,
        },
    ))
}

#[derive(Clone, Copy)]
struct AxisSpan {
    min: f64,
    max: f64,
    base: f64,
    scale: f64,
}

/// Returns the new `(position, scale, accepted)` for one axis.
fn resize_axis(
    span: AxisSpan,
    requested: f64,
    moves_min: bool,
    canvas_len: f64,
) -> (f64, f64, bool) {
    let (lo, hi) = if moves_min {
        (span.max - requested, span.max)
    } else {
        (span.min, span.min + requested)
    };
    if lo >= -EPSILON && hi <= canvas_len + EPSILON {
        (lo.max(0.0), requested / span.base, true)
    } else {
        (span.min.max(0.0), span.scale, false)
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
