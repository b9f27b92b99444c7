// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};

/// Letterbox transform mapping image pixels into the view.
///
/// Image pixel `(0, 0)` lands on [`FitTransform::origin`] and every image
/// pixel is scaled uniformly by [`FitTransform::scale`]. The image fills the
/// view along one axis and is centered along the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Uniform image-pixel to view scale. Always `> 0`.
    pub scale: f64,
    /// View-space position of image pixel `(0, 0)`.
    pub origin: Point,
}

impl FitTransform {
    /// Returns the affine `translate(origin) * scale(scale)`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale)
    }

    /// Maps an image-pixel point into unzoomed view space.
    #[must_use]
    pub fn apply(&self, image_pt: Point) -> Point {
        self.to_affine() * image_pt
    }
}

/// Error returned when the image or the view has no positive area.
///
/// Geometry is never computed in this state; callers keep the overlay hidden
/// until both sizes become valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateGeometry {
    /// Image size that was passed in.
    pub image_size: Size,
    /// View size that was passed in.
    pub view_size: Size,
}

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot fit a {}x{} image into a {}x{} view",
            self.image_size.width,
            self.image_size.height,
            self.view_size.width,
            self.view_size.height
        )
    }
}

impl core::error::Error for DegenerateGeometry {}

fn has_area(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Computes the letterbox fit of `image_size` inside `view_size`.
///
/// When the image is relatively taller than the view it is fitted to the
/// view height and centered horizontally; otherwise it is fitted to the view
/// width and centered vertically.
///
/// # Errors
///
/// Returns [`DegenerateGeometry`] if either size has a non-positive or
/// non-finite dimension.
pub fn fit_transform(image_size: Size, view_size: Size) -> Result<FitTransform, DegenerateGeometry> {
    if !has_area(image_size) || !has_area(view_size) {
        return Err(DegenerateGeometry {
            image_size,
            view_size,
        });
    }

    let image_aspect = image_size.width / image_size.height;
    let view_aspect = view_size.width / view_size.height;

    let (scale, origin) = if image_aspect < view_aspect {
        let scale = view_size.height / image_size.height;
        let x = (view_size.width - image_size.width * scale) / 2.0;
        (scale, Point::new(x, 0.0))
    } else {
        let scale = view_size.width / image_size.width;
        let y = (view_size.height - image_size.height * scale) / 2.0;
        (scale, Point::new(0.0, y))
    };

    Ok(FitTransform { scale, origin })
}

/// Returns the view-space size of an image under `fit`.
#[must_use]
pub fn fitted_size(image_size: Size, fit: &FitTransform) -> Size {
    (Vec2::new(image_size.width, image_size.height) * fit.scale).to_size()
}
