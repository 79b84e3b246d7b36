// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors reported by crop viewport operations.
///
/// None of these are fatal: a failing call leaves the viewport untouched, so
/// hosts typically ignore the input event that triggered the error.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CropError {
    /// The operation needs a placed image but none is loaded.
    #[error("no image loaded")]
    NoImageLoaded,

    /// A scale that is not finite or not strictly positive was supplied.
    #[error("invalid scale {0}: must be finite and greater than zero")]
    InvalidScale(f64),

    /// A crop window resize could not be applied.
    #[error("crop window resize to {width}x{height} rejected")]
    InvalidCropWindowResize {
        /// Requested crop window width.
        width: f64,
        /// Requested crop window height.
        height: f64,
    },

    /// A crop window has a degenerate size or does not fit inside the canvas.
    #[error("crop window {width}x{height} at ({x}, {y}) does not fit the canvas")]
    InvalidCropWindow {
        /// Window left edge.
        x: f64,
        /// Window top edge.
        y: f64,
        /// Window width.
        width: f64,
        /// Window height.
        height: f64,
    },

    /// A resize was requested while the aspect ratio is locked.
    #[error("crop window is fixed while the aspect ratio is locked")]
    FixedCropWindow,

    /// Decoded image dimensions are not finite or not strictly positive.
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize {
        /// Natural image width.
        width: f64,
        /// Natural image height.
        height: f64,
    },

    /// Host configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
