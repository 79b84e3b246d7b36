// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::bounds::{is_positive, resize_window, solve_image};
use crate::error::CropError;
use crate::extract::CropDescriptor;
use crate::geometry::{EPSILON, contains_rect};
use crate::image::PlacedImage;
use crate::scale::{self, min_cover_scale};
use crate::window::{CropWindow, ResizeHandle, ResizeOutcome};

/// Whether an image is currently placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportState {
    /// No image loaded.
    #[default]
    Empty,
    /// An image is loaded and its bounds are solved.
    Placed,
}

/// Crop viewport over a fixed-size canvas.
///
/// `CropViewport` owns the canvas size, the crop window, and the placed image.
/// Every mutation runs the bounds solver before returning, so the placed image
/// is always clamped against the crop window:
/// - Load an image with [`CropViewport::set_image`].
/// - Drag it with [`CropViewport::translate_image`].
/// - Zoom it about the crop window center with [`CropViewport::apply_scale`].
/// - Resize the crop window with [`CropViewport::resize_crop_window`].
/// - Read the result with [`CropViewport::crop_descriptor`].
#[derive(Clone, Debug)]
pub struct CropViewport {
    canvas: Size,
    window: CropWindow,
    image: Option<PlacedImage>,
}

impl CropViewport {
    /// Creates an empty viewport with the given canvas size and crop window.
    ///
    /// Fails with [`CropError::InvalidCropWindow`] unless the window has a
    /// finite, positive size and lies inside the canvas.
    pub fn new(canvas: Size, window: CropWindow) -> Result<Self, CropError> {
        check_window(canvas, &window)?;
        Ok(Self {
            canvas,
            window,
            image: None,
        })
    }

    /// Returns the canvas size.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Returns the current crop window.
    #[must_use]
    pub fn crop_window(&self) -> &CropWindow {
        &self.window
    }

    /// Returns the placed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&PlacedImage> {
        self.image.as_ref()
    }

    /// Returns whether an image is placed.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        if self.image.is_some() {
            ViewportState::Placed
        } else {
            ViewportState::Empty
        }
    }

    /// Replaces the placed image with a new one of the given natural size.
    ///
    /// The image starts at scale `1`, centered on the crop window, and is then
    /// clamped by the bounds solver. An image smaller than the window is pinned
    /// rather than grown; see [`CropViewport::enforce_min_scale`].
    ///
    /// Sizes so small that no finite scale covers the window are rejected with
    /// [`CropError::InvalidImageSize`].
    pub fn set_image(&mut self, natural_width: f64, natural_height: f64) -> Result<(), CropError> {
        let natural = Size::new(natural_width, natural_height);
        let window = self.window.rect();
        if !is_positive(natural_width)
            || !is_positive(natural_height)
            || !is_positive(min_cover_scale(natural, window.size()))
        {
            return Err(CropError::InvalidImageSize {
                width: natural_width,
                height: natural_height,
            });
        }
        let origin = window.center() - natural.to_vec2() / 2.0;
        let mut image = PlacedImage::new(natural, origin);
        solve_image(&mut image, window);
        tracing::debug!(
            width = natural_width,
            height = natural_height,
            x = image.origin().x,
            y = image.origin().y,
            "placed image"
        );
        self.image = Some(image);
        Ok(())
    }

    /// Moves the placed image by `delta` and re-solves bounds.
    pub fn translate_image(&mut self, delta: Vec2) -> Result<(), CropError> {
        let window = self.window.rect();
        let image = self.image.as_mut().ok_or(CropError::NoImageLoaded)?;
        if !delta.is_finite() {
            tracing::warn!(dx = delta.x, dy = delta.y, "ignoring non-finite drag delta");
            return Ok(());
        }
        image.set_origin(image.origin() + delta);
        solve_image(image, window);
        tracing::trace!(dx = delta.x, dy = delta.y, "translated image");
        Ok(())
    }

    /// Clears the placed image.
    pub fn reset(&mut self) {
        if self.image.take().is_some() {
            tracing::debug!("cleared image");
        }
    }

    /// Sets the image scale, keeping the image point under the crop window
    /// center fixed, then re-solves bounds.
    ///
    /// Callers should not pass values below [`CropViewport::scale_min`]; the
    /// position is still clamped but the image may not cover the window.
    pub fn apply_scale(&mut self, new_scale: f64) -> Result<(), CropError> {
        let window = self.window.rect();
        let image = self.image.as_mut().ok_or(CropError::NoImageLoaded)?;
        scale::apply_scale(image, window, new_scale)
    }

    /// Smallest scale at which the placed image covers the crop window.
    pub fn scale_min(&self) -> Result<f64, CropError> {
        let image = self.image.as_ref().ok_or(CropError::NoImageLoaded)?;
        Ok(min_cover_scale(image.natural_size(), self.window.size()))
    }

    /// Raises the image scale to [`CropViewport::scale_min`] if it is below it.
    ///
    /// Returns `true` if the scale changed. Does nothing without an image.
    pub fn enforce_min_scale(&mut self) -> Result<bool, CropError> {
        let window = self.window.rect();
        match self.image.as_mut() {
            Some(image) => scale::enforce_min_scale(image, window),
            None => Ok(false),
        }
    }

    /// Replaces the crop window, raising the image scale if the new window
    /// needs it, and re-solves bounds.
    ///
    /// The viewport is left untouched on error.
    pub fn set_crop_window(&mut self, window: CropWindow) -> Result<(), CropError> {
        check_window(self.canvas, &window)?;
        if self.window == window {
            return Ok(());
        }
        let mut image = self.image;
        if let Some(image) = image.as_mut() {
            scale::enforce_min_scale(image, window.rect())?;
        }
        tracing::debug!(resizable = window.is_resizable(), "replaced crop window");
        self.window = window;
        self.image = image;
        Ok(())
    }

    /// Resizes a resizable crop window by dragging `handle`.
    ///
    /// An axis that would leave the canvas keeps its previous size. Any grown
    /// window raises the image scale as needed so it stays covered.
    pub fn resize_crop_window(
        &mut self,
        new_size: Size,
        handle: ResizeHandle,
    ) -> Result<ResizeOutcome, CropError> {
        let (window, outcome) = resize_window(&self.window, self.canvas, new_size, handle)?;
        if !outcome.width_accepted {
            tracing::warn!(width = new_size.width, "crop window width rejected");
        }
        if !outcome.height_accepted {
            tracing::warn!(height = new_size.height, "crop window height rejected");
        }
        let mut image = self.image;
        if let Some(image) = image.as_mut() {
            scale::enforce_min_scale(image, window.rect())?;
        }
        self.window = window;
        self.image = image;
        Ok(outcome)
    }

    /// Returns the current crop descriptor.
    pub fn crop_descriptor(&self) -> Result<CropDescriptor, CropError> {
        let image = self.image.as_ref().ok_or(CropError::NoImageLoaded)?;
        Ok(CropDescriptor::from_parts(self.window.rect(), image))
    }

    /// Returns the four canvas regions outside the crop window: top, bottom,
    /// left, and right.
    ///
    /// Top and bottom span the full canvas width; left and right span the
    /// window height. Regions may be empty.
    #[must_use]
    pub fn overlay_regions(&self) -> [Rect; 4] {
        let canvas = self.canvas.to_rect();
        let window = self.window.rect();
        [
            Rect::new(canvas.x0, canvas.y0, canvas.x1, window.y0),
            Rect::new(canvas.x0, window.y1, canvas.x1, canvas.y1),
            Rect::new(canvas.x0, window.y0, window.x0, window.y1),
            Rect::new(window.x1, window.y0, canvas.x1, window.y1),
        ]
    }

    /// Returns `true` if the placed image fully covers the crop window.
    #[must_use]
    pub fn covers_crop_window(&self) -> bool {
        self.image
            .as_ref()
            .is_some_and(|image| contains_rect(image.rect(), self.window.rect(), EPSILON))
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CropViewportDebugInfo {
        CropViewportDebugInfo {
            canvas: self.canvas,
            crop_window: self.window.rect(),
            resizable: self.window.is_resizable(),
            state: self.state(),
            image_rect: self.image.as_ref().map(PlacedImage::rect),
            scale: self.image.as_ref().map(PlacedImage::scale),
            scale_min: self.scale_min().ok(),
        }
    }
}

fn check_window(canvas: Size, window: &CropWindow) -> Result<(), CropError> {
    let rect = window.rect();
    if is_positive(rect.width())
        && is_positive(rect.height())
        && contains_rect(canvas.to_rect(), rect, EPSILON)
    {
        return Ok(());
    }
    Err(CropError::InvalidCropWindow {
        x: rect.x0,
        y: rect.y0,
        width: rect.width(),
        height: rect.height(),
    })
}

/// Debug snapshot of a [`CropViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct CropViewportDebugInfo {
    /// Canvas size.
    pub canvas: Size,
    /// Crop window rectangle in canvas space.
    pub crop_window: Rect,
    /// Whether the crop window is resizable.
    pub resizable: bool,
    /// Whether an image is placed.
    pub state: ViewportState,
    /// On-canvas image rectangle, if an image is placed.
    pub image_rect: Option<Rect>,
    /// Current image scale, if an image is placed.
    pub scale: Option<f64>,
    /// Minimum cover scale, if an image is placed.
    pub scale_min: Option<f64>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{CropViewport, ViewportState};
    use crate::error::CropError;
    use crate::window::{CropWindow, ResizeHandle};

    const CANVAS: Size = Size::new(400.0, 300.0);

    fn viewport() -> CropViewport {
        CropViewport::new(
            CANVAS,
            CropWindow::fixed(Rect::new(50.0, 50.0, 350.0, 250.0)),
        )
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn set_image_centers_on_window() {
        let mut vp = viewport();
        assert_eq!(vp.state(), ViewportState::Empty);
        vp.set_image(1000.0, 800.0).unwrap();
        assert_eq!(vp.state(), ViewportState::Placed);

        let image = vp.image().unwrap();
        assert_eq!(image.scale(), 1.0);
        assert_eq!(image.origin(), Point::new(-300.0, -250.0));
        assert!(vp.covers_crop_window());
    }

    #[test]
    fn set_image_pins_small_image_to_window_corner() {
        let mut vp = viewport();
        vp.set_image(100.0, 100.0).unwrap();
        // Centered origin (150, 100) lies in the inverted interval on both axes.
        assert_eq!(vp.image().unwrap().origin(), Point::new(150.0, 100.0));
        assert!(!vp.covers_crop_window());

        assert_eq!(vp.enforce_min_scale(), Ok(true));
        assert!(vp.covers_crop_window());
        assert!(close(vp.image().unwrap().scale(), 3.0));
    }

    #[test]
    fn set_image_rejects_degenerate_size() {
        let mut vp = viewport();
        assert_eq!(
            vp.set_image(0.0, 10.0),
            Err(CropError::InvalidImageSize {
                width: 0.0,
                height: 10.0
            })
        );
        assert_eq!(vp.state(), ViewportState::Empty);
    }

    #[test]
    fn set_image_rejects_size_no_scale_can_cover() {
        let mut vp = viewport();
        assert_eq!(
            vp.set_image(1e-310, 1e-310),
            Err(CropError::InvalidImageSize {
                width: 1e-310,
                height: 1e-310
            })
        );
        assert_eq!(vp.state(), ViewportState::Empty);

        vp.set_image(1000.0, 800.0).unwrap();
        let before = *vp.image().unwrap();
        assert!(vp.set_image(1e-310, 1e-310).is_err());
        assert_eq!(*vp.image().unwrap(), before);
    }

    #[test]
    fn new_rejects_window_outside_canvas() {
        let window = CropWindow::fixed(Rect::new(300.0, 200.0, 700.0, 500.0));
        assert_eq!(
            CropViewport::new(CANVAS, window).unwrap_err(),
            CropError::InvalidCropWindow {
                x: 300.0,
                y: 200.0,
                width: 400.0,
                height: 300.0
            }
        );

        let empty = CropWindow::fixed(Rect::new(10.0, 10.0, 10.0, 50.0));
        assert!(matches!(
            CropViewport::new(CANVAS, empty),
            Err(CropError::InvalidCropWindow { .. })
        ));
        let nan = CropWindow::resizable(Rect::new(0.0, 0.0, f64::NAN, 50.0));
        assert!(CropViewport::new(CANVAS, nan).is_err());

        // The full canvas is a valid window.
        assert!(CropViewport::new(CANVAS, CropWindow::fixed(CANVAS.to_rect())).is_ok());
    }

    #[test]
    fn set_crop_window_rejects_window_outside_canvas() {
        let mut vp = viewport();
        vp.set_image(1000.0, 800.0).unwrap();
        let window = *vp.crop_window();
        let image = *vp.image().unwrap();

        let outside = CropWindow::resizable(Rect::new(-50.0, -50.0, 900.0, 100.0));
        assert!(matches!(
            vp.set_crop_window(outside),
            Err(CropError::InvalidCropWindow { .. })
        ));
        assert_eq!(*vp.crop_window(), window);
        assert_eq!(*vp.image().unwrap(), image);

        // Overlay regions stay well-formed.
        for region in vp.overlay_regions() {
            assert!(region.x0 <= region.x1 && region.y0 <= region.y1);
        }
    }

    #[test]
    fn relocking_to_larger_window_keeps_image_covering() {
        let mut vp = CropViewport::new(
            CANVAS,
            CropWindow::resizable(Rect::new(50.0, 50.0, 350.0, 250.0)),
        )
        .unwrap();
        vp.set_image(1000.0, 800.0).unwrap();
        vp.apply_scale(0.3).unwrap();

        vp.resize_crop_window(Size::new(150.0, 100.0), ResizeHandle::BottomRight)
            .unwrap();
        assert_eq!(vp.crop_window().rect(), Rect::new(50.0, 50.0, 200.0, 150.0));
        vp.apply_scale(vp.scale_min().unwrap()).unwrap();
        assert!(close(vp.image().unwrap().scale(), 0.15));

        vp.set_crop_window(CropWindow::fixed(Rect::new(50.0, 50.0, 350.0, 250.0)))
            .unwrap();
        assert!(!vp.crop_window().is_resizable());
        assert!(close(vp.image().unwrap().scale(), 0.3));
        assert!(vp.covers_crop_window());
    }

    #[test]
    fn translate_is_clamped() {
        let mut vp = viewport();
        vp.set_image(1000.0, 800.0).unwrap();

        vp.translate_image(Vec2::new(10_000.0, 10_000.0)).unwrap();
        assert_eq!(vp.image().unwrap().origin(), Point::new(50.0, 50.0));

        vp.translate_image(Vec2::new(-10_000.0, -10_000.0)).unwrap();
        assert_eq!(vp.image().unwrap().origin(), Point::new(-650.0, -550.0));

        vp.translate_image(Vec2::new(100.0, 25.0)).unwrap();
        assert_eq!(vp.image().unwrap().origin(), Point::new(-550.0, -525.0));
    }

    #[test]
    fn operations_without_image_fail() {
        let mut vp = viewport();
        assert_eq!(
            vp.translate_image(Vec2::new(1.0, 1.0)),
            Err(CropError::NoImageLoaded)
        );
        assert_eq!(vp.apply_scale(0.5), Err(CropError::NoImageLoaded));
        assert_eq!(vp.crop_descriptor(), Err(CropError::NoImageLoaded));
        assert_eq!(vp.scale_min(), Err(CropError::NoImageLoaded));
        assert_eq!(vp.enforce_min_scale(), Ok(false));
        assert!(!vp.covers_crop_window());
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut vp = viewport();
        vp.set_image(1000.0, 800.0).unwrap();
        vp.reset();
        assert_eq!(vp.state(), ViewportState::Empty);
        assert!(vp.image().is_none());
    }

    #[test]
    fn overlay_regions_surround_window() {
        let vp = viewport();
        let [top, bottom, left, right] = vp.overlay_regions();
        assert_eq!(top, Rect::new(0.0, 0.0, 400.0, 50.0));
        assert_eq!(bottom, Rect::new(0.0, 250.0, 400.0, 300.0));
        assert_eq!(left, Rect::new(0.0, 50.0, 50.0, 250.0));
        assert_eq!(right, Rect::new(350.0, 50.0, 400.0, 250.0));

        let dimmed: f64 = vp.overlay_regions().iter().map(|r| r.area()).sum();
        assert!(close(dimmed + 300.0 * 200.0, 400.0 * 300.0));
    }

    #[test]
    fn growing_window_raises_scale() {
        let mut vp = CropViewport::new(
            CANVAS,
            CropWindow::resizable(Rect::new(50.0, 50.0, 150.0, 150.0)),
        )
        .unwrap();
        vp.set_image(200.0, 200.0).unwrap();
        vp.apply_scale(0.5).unwrap();
        assert!(vp.covers_crop_window());

        let outcome = vp
            .resize_crop_window(Size::new(300.0, 200.0), ResizeHandle::BottomRight)
            .unwrap();
        assert!(outcome.is_fully_accepted());
        assert!(close(vp.image().unwrap().scale(), 1.5));
        assert!(vp.covers_crop_window());
    }

    #[test]
    fn debug_info_reports_state() {
        let mut vp = viewport();
        let info = vp.debug_info();
        assert_eq!(info.state, ViewportState::Empty);
        assert!(info.scale.is_none());
        assert!(!info.resizable);

        vp.set_image(1000.0, 800.0).unwrap();
        let info = vp.debug_info();
        assert_eq!(info.crop_window, Rect::new(50.0, 50.0, 350.0, 250.0));
        assert_eq!(info.scale, Some(1.0));
        assert!(close(info.scale_min.unwrap(), 0.3));
        assert_eq!(info.image_rect, Some(Rect::new(-300.0, -250.0, 700.0, 550.0)));
    }
}
