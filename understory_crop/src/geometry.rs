// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small 2D helpers shared by the crop solver.
//!
//! These are thin, stateless wrappers over [`kurbo`] types. They exist so the
//! solver and controllers read in terms of the operations they perform rather
//! than in terms of operator overloads.

use kurbo::{Point, Rect, Vec2};

/// Tolerance used when comparing solved geometry against the crop window.
pub(crate) const EPSILON: f64 = 1e-9;

/// Translates `pt` by `delta`.
#[must_use]
pub fn add(pt: Point, delta: Vec2) -> Point {
    pt + delta
}

/// Returns the vector from `b` to `a`.
#[must_use]
pub fn subtract(a: Point, b: Point) -> Vec2 {
    a - b
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Scales `pt` component-wise about the origin.
#[must_use]
pub fn scale_point(pt: Point, factor: f64) -> Point {
    Point::new(pt.x * factor, pt.y * factor)
}

/// Returns `true` if `outer` fully contains `inner`, allowing `tolerance` slack
/// on every edge.
#[must_use]
pub fn contains_rect(outer: Rect, inner: Rect, tolerance: f64) -> bool {
    outer.x0 <= inner.x0 + tolerance
        && outer.y0 <= inner.y0 + tolerance
        && outer.x1 >= inner.x1 - tolerance
        && outer.y1 >= inner.y1 - tolerance
}
