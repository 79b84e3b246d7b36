// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::bounds::is_positive;
use crate::error::CropError;

/// Host-provided configuration, read once when a [`crate::CropSession`] is
/// created.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CropConfig {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Initial crop window width.
    pub crop_width: f64,
    /// Initial crop window height.
    pub crop_height: f64,
    /// Whether the aspect ratio starts locked (fixed crop window).
    pub ratio_lock_enabled: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 400.0,
            crop_width: 300.0,
            crop_height: 300.0,
            ratio_lock_enabled: true,
        }
    }
}

impl CropConfig {
    /// Creates a ratio-locked configuration.
    #[must_use]
    pub fn new(canvas: Size, crop: Size) -> Self {
        Self {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            crop_width: crop.width,
            crop_height: crop.height,
            ratio_lock_enabled: true,
        }
    }

    /// Sets whether the aspect ratio starts locked.
    #[must_use]
    pub fn with_ratio_lock(mut self, enabled: bool) -> Self {
        self.ratio_lock_enabled = enabled;
        self
    }

    /// Canvas size.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Configured crop window size.
    #[must_use]
    pub fn crop_size(&self) -> Size {
        Size::new(self.crop_width, self.crop_height)
    }

    /// Configured crop window, centered in the canvas.
    #[must_use]
    pub fn initial_crop_rect(&self) -> Rect {
        Rect::from_center_size(self.canvas_size().to_rect().center(), self.crop_size())
    }

    /// Checks that all sizes are positive and the crop window fits the canvas.
    pub fn validate(&self) -> Result<(), CropError> {
        if !is_positive(self.canvas_width) || !is_positive(self.canvas_height) {
            return Err(CropError::InvalidConfig("canvas size must be positive"));
        }
        if !is_positive(self.crop_width) || !is_positive(self.crop_height) {
            return Err(CropError::InvalidConfig("crop size must be positive"));
        }
        if self.crop_width > self.canvas_width || self.crop_height > self.canvas_height {
            return Err(CropError::InvalidConfig("crop window exceeds canvas"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::CropConfig;
    use crate::error::CropError;

    #[test]
    fn default_is_valid_and_centered() {
        let config = CropConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_crop_rect(), Rect::new(50.0, 50.0, 350.0, 350.0));
    }

    #[test]
    fn builder_sets_fields() {
        let config = CropConfig::new(Size::new(640.0, 480.0), Size::new(320.0, 180.0))
            .with_ratio_lock(false);
        assert_eq!(config.canvas_size(), Size::new(640.0, 480.0));
        assert_eq!(config.crop_size(), Size::new(320.0, 180.0));
        assert!(!config.ratio_lock_enabled);
        assert_eq!(config.initial_crop_rect(), Rect::new(160.0, 150.0, 480.0, 330.0));
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let oversized = CropConfig::new(Size::new(200.0, 200.0), Size::new(300.0, 100.0));
        assert_eq!(
            oversized.validate(),
            Err(CropError::InvalidConfig("crop window exceeds canvas"))
        );

        let empty_canvas = CropConfig::new(Size::new(0.0, 200.0), Size::new(100.0, 100.0));
        assert!(empty_canvas.validate().is_err());

        let nan_crop = CropConfig::new(Size::new(200.0, 200.0), Size::new(f64::NAN, 100.0));
        assert!(nan_crop.validate().is_err());
    }
}
