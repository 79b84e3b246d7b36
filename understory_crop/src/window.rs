// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// The crop window: the region of the canvas that will be exported.
///
/// The two variants correspond to the aspect-ratio lock. While the ratio is
/// locked the window is [`CropWindow::Fixed`] and its size never changes.
/// Unlocked, the window is [`CropWindow::Resizable`] and its size is tracked
/// as a per-axis scale factor over the size it was created with, so a rejected
/// resize can fall back to the last accepted factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CropWindow {
    /// Immutable size; only position may change.
    Fixed {
        /// Window rectangle in canvas space.
        rect: Rect,
    },
    /// Resizable through corner handles.
    Resizable {
        /// Top-left corner in canvas space.
        origin: Point,
        /// Size at creation time.
        base_size: Size,
        /// Last accepted per-axis scale factor over `base_size`.
        scale: Vec2,
    },
}

impl CropWindow {
    /// Creates a fixed-size window covering `rect`.
    #[must_use]
    pub fn fixed(rect: Rect) -> Self {
        Self::Fixed {
            rect: rect.abs(),
        }
    }

    /// Creates a resizable window initially covering `rect`.
    #[must_use]
    pub fn resizable(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::Resizable {
            origin: rect.origin(),
            base_size: rect.size(),
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Current window rectangle in canvas space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        match *self {
            Self::Fixed { rect } => rect,
            Self::Resizable {
                origin,
                base_size,
                scale,
            } => Rect::from_origin_size(
                origin,
                Size::new(base_size.width * scale.x, base_size.height * scale.y),
            ),
        }
    }

    /// Current window size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect().size()
    }

    /// Returns `true` for the [`CropWindow::Resizable`] variant.
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        matches!(self, Self::Resizable { .. })
    }

    /// Per-axis scale factor relative to the creation size.
    ///
    /// Always `(1, 1)` for a fixed window.
    #[must_use]
    pub fn scale_factors(&self) -> Vec2 {
        match *self {
            Self::Fixed { .. } => Vec2::new(1.0, 1.0),
            Self::Resizable { scale, .. } => scale,
        }
    }
}

/// The corner handle being dragged during a crop window resize.
///
/// The diagonally opposite corner stays pinned while the handle moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top-left handle; the bottom-right corner is pinned.
    TopLeft,
    /// Top-right handle; the bottom-left corner is pinned.
    TopRight,
    /// Bottom-left handle; the top-right corner is pinned.
    BottomLeft,
    /// Bottom-right handle; the top-left corner is pinned.
    BottomRight,
}

impl ResizeHandle {
    /// Returns `true` if this handle moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Returns `true` if this handle moves the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Per-axis result of a crop window resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// The requested width was applied.
    pub width_accepted: bool,
    /// The requested height was applied.
    pub height_accepted: bool,
}

impl ResizeOutcome {
    /// Returns `true` if both axes took the requested size.
    #[must_use]
    pub fn is_fully_accepted(&self) -> bool {
        self.width_accepted && self.height_accepted
    }
}
