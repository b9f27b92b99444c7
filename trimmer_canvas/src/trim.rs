// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trim rectangles and selected pixels in image-pixel space.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle in image-pixel space.
///
/// A rectangle with `width <= 0` or `height <= 0` is the "no selection"
/// sentinel: it is stored and replayed like any other value, but the
/// overlay is hidden while it is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrimRect {
    /// Left edge, in image pixels.
    pub x: i32,
    /// Top edge, in image pixels.
    pub y: i32,
    /// Width, in image pixels.
    pub width: i32,
    /// Height, in image pixels.
    pub height: i32,
}

impl TrimRect {
    /// The canonical "no selection" value.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rectangle spanned by two pixels.
    ///
    /// The origin is the component-wise minimum and the size is the absolute
    /// difference, so equal corners produce an empty rectangle.
    #[must_use]
    pub fn from_corners(a: SelectedPixel, b: SelectedPixel) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x).try_into().unwrap_or(i32::MAX),
            height: a.y.abs_diff(b.y).try_into().unwrap_or(i32::MAX),
        }
    }

    /// Returns `true` for the "no selection" sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The top-left corner as an image-space point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// The rectangle as an image-space `kurbo::Rect`.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }
}

/// A single pixel coordinate in image-pixel space.
///
/// Values may lie outside the image: a pointer in the letterbox bars maps to
/// negative or out-of-range coordinates and is reported as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedPixel {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl SelectedPixel {
    /// Creates a pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates an image-space point toward zero.
    ///
    /// `(-0.5, 3.9)` becomes `(0, 3)`. Out-of-range values saturate.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the pixel addressing rule"
    )]
    pub fn from_image_point(pt: Point) -> Self {
        Self {
            x: pt.x as i32,
            y: pt.y as i32,
        }
    }
}
