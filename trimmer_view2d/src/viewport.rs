// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::fit::{DegenerateGeometry, FitTransform, fit_transform};
use crate::user::UserTransform;

/// Composes the full image-to-screen affine: `user * fit`.
#[must_use]
pub fn compose(fit: &FitTransform, user: &UserTransform) -> Affine {
    user.to_affine() * fit.to_affine()
}

/// Maps an image-pixel point to screen space: `user.apply(fit.scale * p + fit.origin)`.
#[must_use]
pub fn image_to_screen(image_pt: Point, fit: &FitTransform, user: &UserTransform) -> Point {
    compose(fit, user) * image_pt
}

/// Maps a screen point back to image-pixel space.
///
/// This is the inverse of the affine used by [`image_to_screen`], so a round
/// trip is lossless up to floating-point precision.
#[must_use]
pub fn screen_to_image(screen_pt: Point, fit: &FitTransform, user: &UserTransform) -> Point {
    compose(fit, user).inverse() * screen_pt
}

/// Image-trimming viewport: view size, image size, fit and user transforms.
///
/// `TrimViewport` keeps the derived fit transform and the composed
/// image↔screen affines cached, rebuilding them whenever the view size, the
/// image size or the user transform changes. While either size is degenerate,
/// or the composed transform is not finite and invertible, no fit exists and
/// every mapping query returns `None`.
#[derive(Clone, Debug)]
pub struct TrimViewport {
    view_size: Size,
    image_size: Option<Size>,
    fit: Option<FitTransform>,
    user: UserTransform,
    image_to_screen: Option<Affine>,
    screen_to_image: Option<Affine>,
}

impl TrimViewport {
    /// Creates a viewport for a view of `view_size` with no image.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            image_size: None,
            fit: None,
            user: UserTransform::IDENTITY,
            image_to_screen: None,
            screen_to_image: None,
        }
    }

    /// Returns the current view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns the current image size, if an image is set.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Returns the current fit transform, if geometry is valid.
    #[must_use]
    pub fn fit(&self) -> Option<FitTransform> {
        self.fit
    }

    /// Returns the current user transform.
    #[must_use]
    pub fn user(&self) -> UserTransform {
        self.user
    }

    /// Returns `true` if both sizes are valid and mapping queries succeed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.fit.is_some()
    }

    /// Sets the view size. Zoom and pan are kept; the fit is recomputed.
    ///
    /// Returns `false` if the size did not change.
    pub fn set_view_size(&mut self, view_size: Size) -> bool {
        if self.view_size == view_size {
            return false;
        }
        self.view_size = view_size;
        self.rebuild_transforms();
        true
    }

    /// Sets a new image size and resets the user transform to identity.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateGeometry`] if the new geometry cannot be fitted.
    /// The image size is stored regardless, so the viewport becomes ready as
    /// soon as the view gets a valid size.
    pub fn set_image_size(&mut self, image_size: Size) -> Result<FitTransform, DegenerateGeometry> {
        self.image_size = Some(image_size);
        self.user.reset();
        self.rebuild_transforms();
        fit_transform(image_size, self.view_size)
    }

    /// Zooms by a magnification delta about a screen-space pivot.
    ///
    /// Non-finite inputs are ignored. A zoom that overflows the transform
    /// leaves the viewport not ready until [`reset_user_transform`](Self::reset_user_transform).
    pub fn zoom_about(&mut self, magnification: f64, pivot: Point) {
        if !magnification.is_finite() || !pivot.is_finite() {
            return;
        }
        self.user.zoom(magnification, pivot);
        self.rebuild_transforms();
    }

    /// Pans by a screen-space delta. Non-finite deltas are ignored.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.user.pan(delta);
        self.rebuild_transforms();
    }

    /// Resets zoom and pan to identity.
    pub fn reset_user_transform(&mut self) {
        self.user.reset();
        self.rebuild_transforms();
    }

    /// Returns the composed image-to-screen affine.
    #[must_use]
    pub fn image_to_screen_affine(&self) -> Option<Affine> {
        self.image_to_screen
    }

    /// Returns the composed screen-to-image affine.
    #[must_use]
    pub fn screen_to_image_affine(&self) -> Option<Affine> {
        self.screen_to_image
    }

    /// Converts an image-pixel point to screen coordinates.
    #[must_use]
    pub fn image_to_screen_point(&self, pt: Point) -> Option<Point> {
        self.image_to_screen.map(|xf| xf * pt)
    }

    /// Converts a screen point to image-pixel coordinates.
    #[must_use]
    pub fn screen_to_image_point(&self, pt: Point) -> Option<Point> {
        self.screen_to_image.map(|xf| xf * pt)
    }

    /// Converts an image-space rectangle to screen coordinates.
    ///
    /// The transform is axis aligned with positive scale, so mapping the two
    /// corners is enough.
    #[must_use]
    pub fn image_to_screen_rect(&self, rect: Rect) -> Option<Rect> {
        let xf = self.image_to_screen?;
        Some(Rect::from_points(xf * rect.origin(), xf * Point::new(rect.x1, rect.y1)))
    }

    /// Returns the combined scale of fit and user transforms.
    ///
    /// One image pixel spans this many screen units.
    #[must_use]
    pub fn total_scale(&self) -> Option<f64> {
        self.fit.map(|fit| fit.scale * self.user.scale())
    }

    /// Returns the image bounds in screen space.
    #[must_use]
    pub fn image_screen_rect(&self) -> Option<Rect> {
        let size = self.image_size?;
        self.image_to_screen_rect(size.to_rect())
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TrimViewportDebugInfo {
        TrimViewportDebugInfo {
            view_size: self.view_size,
            image_size: self.image_size,
            fit: self.fit,
            user_scale: self.user.scale(),
            user_translation: self.user.translation(),
            total_scale: self.total_scale(),
            image_screen_rect: self.image_screen_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        let fit = self
            .image_size
            .and_then(|image_size| fit_transform(image_size, self.view_size).ok());
        // Image → screen: fit into the view, then apply the user pan/zoom.
        let mapping = fit.and_then(|fit| {
            let forward = compose(&fit, &self.user);
            let inverse = forward.inverse();
            (forward.is_finite() && inverse.is_finite() && forward.determinant() != 0.0)
                .then_some((fit, forward, inverse))
        });
        self.fit = mapping.map(|(fit, ..)| fit);
        self.image_to_screen = mapping.map(|(_, forward, _)| forward);
        self.screen_to_image = mapping.map(|(.., inverse)| inverse);
    }
}

/// Debug snapshot of a [`TrimViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct TrimViewportDebugInfo {
    /// Current view size.
    pub view_size: Size,
    /// Current image size, if any.
    pub image_size: Option<Size>,
    /// Derived fit transform, if geometry is valid.
    pub fit: Option<FitTransform>,
    /// Cumulative user zoom factor.
    pub user_scale: f64,
    /// Cumulative user pan offset in screen space.
    pub user_translation: Vec2,
    /// Combined fit and user scale.
    pub total_scale: Option<f64>,
    /// Image bounds in screen space.
    pub image_screen_rect: Option<Rect>,
}
