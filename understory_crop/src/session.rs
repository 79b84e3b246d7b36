// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::config::CropConfig;
use crate::error::CropError;
use crate::extract::CropDescriptor;
use crate::scale::{scale_for_zoom_input, zoom_input_for_scale};
use crate::viewport::CropViewport;
use crate::window::{CropWindow, ResizeHandle, ResizeOutcome};

/// Host-facing entry point: one crop session per widget instance.
///
/// The host forwards decoded image sizes, drag deltas, zoom slider values,
/// crop handle drags, and ratio lock toggles; the session keeps the viewport
/// valid and answers crop and overlay queries.
#[derive(Clone, Debug)]
pub struct CropSession {
    config: CropConfig,
    viewport: CropViewport,
}

impl CropSession {
    /// Creates a session from validated host configuration.
    pub fn new(config: CropConfig) -> Result<Self, CropError> {
        config.validate()?;
        let window = Self::initial_window(&config, config.ratio_lock_enabled);
        Ok(Self {
            config,
            viewport: CropViewport::new(config.canvas_size(), window)?,
        })
    }

    fn initial_window(config: &CropConfig, locked: bool) -> CropWindow {
        let rect = config.initial_crop_rect();
        if locked {
            CropWindow::fixed(rect)
        } else {
            CropWindow::resizable(rect)
        }
    }

    /// Returns the configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Returns the underlying viewport.
    #[must_use]
    pub fn viewport(&self) -> &CropViewport {
        &self.viewport
    }

    /// Returns `true` while the crop window is fixed.
    #[must_use]
    pub fn is_ratio_locked(&self) -> bool {
        !self.viewport.crop_window().is_resizable()
    }

    /// Places a freshly decoded image, scaled up if needed to cover the crop
    /// window.
    pub fn on_image_decoded(
        &mut self,
        natural_width: f64,
        natural_height: f64,
    ) -> Result<(), CropError> {
        self.viewport.set_image(natural_width, natural_height)?;
        self.viewport.enforce_min_scale()?;
        Ok(())
    }

    /// Moves the image by a drag delta.
    pub fn on_drag_delta(&mut self, dx: f64, dy: f64) -> Result<(), CropError> {
        self.viewport.translate_image(Vec2::new(dx, dy))
    }

    /// Applies a zoom slider value in `[0, 100]` and returns the resulting scale.
    ///
    /// The slider spans `[scale_min, 1]`; the scale never drops below
    /// `scale_min`.
    pub fn on_zoom_input(&mut self, value: f64) -> Result<f64, CropError> {
        let scale_min = self.viewport.scale_min()?;
        let scale = scale_for_zoom_input(value, scale_min).max(scale_min);
        tracing::trace!(value, scale, "zoom input");
        self.viewport.apply_scale(scale)?;
        Ok(scale)
    }

    /// Slider position matching the current image scale.
    pub fn zoom_input(&self) -> Result<f64, CropError> {
        let scale_min = self.viewport.scale_min()?;
        let image = self.viewport.image().ok_or(CropError::NoImageLoaded)?;
        Ok(zoom_input_for_scale(image.scale(), scale_min))
    }

    /// Resizes the crop window by dragging `handle`.
    pub fn on_crop_window_resize(
        &mut self,
        new_width: f64,
        new_height: f64,
        handle: ResizeHandle,
    ) -> Result<ResizeOutcome, CropError> {
        self.viewport
            .resize_crop_window(Size::new(new_width, new_height), handle)
    }

    /// Switches between the fixed (locked) and resizable crop window.
    ///
    /// Locking restores the configured crop window; unlocking keeps the
    /// current window geometry and makes it resizable.
    pub fn on_ratio_lock_toggled(&mut self, locked: bool) -> Result<(), CropError> {
        if locked == self.is_ratio_locked() {
            return Ok(());
        }
        let window = if locked {
            Self::initial_window(&self.config, true)
        } else {
            CropWindow::resizable(self.viewport.crop_window().rect())
        };
        tracing::debug!(locked, "ratio lock toggled");
        self.viewport.set_crop_window(window)
    }

    /// Clears the image and returns to the empty state.
    pub fn reset(&mut self) {
        self.viewport.reset();
    }

    /// Returns the crop descriptor for the current placement.
    pub fn crop_descriptor(&self) -> Result<CropDescriptor, CropError> {
        self.viewport.crop_descriptor()
    }

    /// Returns the four canvas regions outside the crop window.
    #[must_use]
    pub fn overlay_regions(&self) -> [Rect; 4] {
        self.viewport.overlay_regions()
    }
}
