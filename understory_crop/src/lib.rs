// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop --heading-base-level=0

//! Understory Crop: a headless crop viewport constraint engine.
//!
//! This crate models the geometry behind an interactive image cropper: a
//! fixed-size canvas, a crop window inside it, and a source image that the
//! user drags and zooms behind the window. It focuses on:
//! - Keeping the image covering the crop window after every mutation.
//! - Zooming about the crop window center so the focused point stays put.
//! - Keeping a resizable crop window inside the canvas.
//! - Deriving the final crop descriptor (offset, size, and scale).
//!
//! It does **not** decode images, render, or handle uploads. Callers are
//! expected to:
//! - Decode the source image and report its natural size.
//! - Wire pointer, slider, and handle events into [`CropSession`] calls.
//! - Draw the image, the crop window, and the dimmed
//!   [`CropSession::overlay_regions`].
//! - Cut the output image using [`CropDescriptor::source_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_crop::{CropConfig, CropSession};
//!
//! // 400x400 canvas with a centered, ratio-locked 300x300 crop window.
//! let mut session = CropSession::new(CropConfig::default()).unwrap();
//!
//! // The host decoded a 1200x900 image.
//! session.on_image_decoded(1200.0, 900.0).unwrap();
//!
//! // Drag, then zoom all the way out.
//! session.on_drag_delta(40.0, -25.0).unwrap();
//! let scale = session.on_zoom_input(0.0).unwrap();
//! assert!((scale - 1.0 / 3.0).abs() < 1e-9);
//!
//! let crop = session.crop_descriptor().unwrap();
//! assert_eq!(crop.width, 300.0);
//! assert!(session.viewport().covers_crop_window());
//! ```
//!
//! ## Lower-level viewport
//!
//! [`CropViewport`] exposes the same solver without host configuration:
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_crop::{CropDescriptor, CropViewport, CropWindow};
//!
//! let mut vp = CropViewport::new(
//!     Size::new(400.0, 300.0),
//!     CropWindow::fixed(Rect::new(20.0, 10.0, 320.0, 210.0)),
//! )
//! .unwrap();
//! vp.set_image(1000.0, 800.0).unwrap();
//! vp.apply_scale(0.5).unwrap();
//! vp.translate_image(Vec2::new(-10_000.0, 0.0)).unwrap();
//!
//! let crop = vp.crop_descriptor().unwrap();
//! // Dragged as far left as possible: the window touches the image's right edge.
//! assert_eq!(crop.x + crop.width, 500.0);
//! ```
//!
//! ## Design notes
//!
//! - The image is scaled uniformly; rotation is not modeled.
//! - The bounds solver only ever moves the image. Scale changes come from the
//!   zoom controls or from raising the scale to the minimum cover scale when
//!   the crop window grows.
//! - The crop window is a tagged [`CropWindow`]: `Fixed` while the aspect
//!   ratio is locked and `Resizable` otherwise.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod error;
mod extract;
pub mod geometry;
mod image;
mod scale;
mod session;
mod viewport;
mod window;

pub use config::CropConfig;
pub use error::CropError;
pub use extract::CropDescriptor;
pub use image::PlacedImage;
pub use scale::{ZOOM_INPUT_MAX, min_cover_scale, scale_for_zoom_input, zoom_input_for_scale};
pub use session::CropSession;
pub use viewport::{CropViewport, CropViewportDebugInfo, ViewportState};
pub use window::{CropWindow, ResizeHandle, ResizeOutcome};
