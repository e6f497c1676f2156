// Copyright 2025 the Stela Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared point/box math for Stela annotation layout.
//!
//! This crate holds the tiny pieces both layout engines need:
//! - [`Size`], a width/height pair,
//! - [`Padding`], per-side padding with the usual shorthand constructors,
//! - finite-coordinate checks used by fail-closed geometry paths.
//!
//! It is deliberately small, `no_std`-friendly, and free of chart semantics.

#![no_std]

use kurbo::{Point, Rect};

/// A width/height pair used by annotation layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size, clamping negative extents to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Per-side padding.
///
/// Upstream specs express padding as a single number, a vertical/horizontal
/// pair, or four explicit sides; the shorthand constructors normalize all
/// three forms into this one record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl Padding {
    /// The same padding on all four sides.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::sides(value, value, value, value)
    }

    /// Vertical (top/bottom) and horizontal (left/right) padding.
    #[must_use]
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::sides(vertical, horizontal, vertical, horizontal)
    }

    /// Explicit per-side padding in CSS order (top, right, bottom, left).
    ///
    /// Negative sides are clamped to zero.
    #[must_use]
    pub fn sides(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
            left: left.max(0.0),
        }
    }

    /// Returns `left + right`.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Returns `top + bottom`.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Returns `true` when both coordinates are finite.
///
/// Geometry producers use this to fail closed: a sequence containing any
/// non-finite point is dropped entirely rather than emitted.
#[must_use]
pub fn point_is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Returns `true` when every point in the slice is finite.
#[must_use]
pub fn points_are_finite(points: &[Point]) -> bool {
    points.iter().all(|&p| point_is_finite(p))
}

/// Bounding-box union of a set of rectangles.
///
/// Returns `None` for an empty input. The result reduces `min/max` across
/// every rectangle, so degenerate (zero-area) inputs still contribute their
/// edges.
#[must_use]
pub fn union_rects(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    let mut out = *first;
    for r in rest {
        out = Rect::new(
            out.x0.min(r.x0),
            out.y0.min(r.y0),
            out.x1.max(r.x1),
            out.y1.max(r.y1),
        );
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn padding_shorthands_normalize() {
        assert_eq!(Padding::uniform(4.0), Padding::sides(4.0, 4.0, 4.0, 4.0));
        let p = Padding::symmetric(2.0, 6.0);
        assert_eq!(p.horizontal(), 12.0);
        assert_eq!(p.vertical(), 4.0);
    }

    #[test]
    fn negative_padding_clamps_to_zero() {
        let p = Padding::sides(-1.0, 3.0, -2.0, 5.0);
        assert_eq!(p.top, 0.0);
        assert_eq!(p.bottom, 0.0);
        assert_eq!(p.horizontal(), 8.0);
    }

    #[test]
    fn union_covers_all_rects() {
        let rects = [
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(10.0, 20.0, 90.0, 60.0),
            Rect::new(-5.0, 0.0, 55.0, 60.0),
        ];
        let u = union_rects(&rects).expect("non-empty input");
        assert_eq!(u, Rect::new(-5.0, 0.0, 100.0, 60.0));
        assert!(union_rects(&[]).is_none());
    }

    #[test]
    fn finite_checks_reject_nan_and_infinity() {
        assert!(point_is_finite(Point::new(1.0, 2.0)));
        assert!(!point_is_finite(Point::new(f64::NAN, 0.0)));
        assert!(!points_are_finite(&[
            Point::new(0.0, 0.0),
            Point::new(f64::INFINITY, 1.0),
        ]));
    }
}
