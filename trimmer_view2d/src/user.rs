// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Converts a magnification gesture delta into a multiplicative scale factor.
///
/// Positive deltas grow linearly (`1 + m`); negative deltas shrink as
/// `1 / (1 - m)`, so `m` and `-m` undo each other. The factor is always
/// positive for finite `m`.
#[must_use]
pub fn magnification_factor(magnification: f64) -> f64 {
    if magnification >= 0.0 {
        1.0 + magnification
    } else {
        1.0 / (1.0 - magnification)
    }
}

/// Accumulated pan/zoom applied on top of the fit transform.
///
/// The transform is a uniform scale followed by a translation, both in view
/// space. It is unbounded: neither zoom nor pan is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserTransform {
    scale: f64,
    translation: Vec2,
}

impl Default for UserTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl UserTransform {
    /// The identity transform: no zoom, no pan.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Returns the cumulative uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the cumulative translation in view space.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns the affine `translate(translation) * scale(scale)`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Zooms by a magnification delta about a view-space pivot.
    ///
    /// Computes `f = magnification_factor(m)` and updates
    /// `self = translate(-pivot * (f - 1)) * scale(f) * self`, which keeps
    /// whatever is under `pivot` in place.
    pub fn zoom(&mut self, magnification: f64, pivot: Point) {
        let factor = magnification_factor(magnification);
        self.scale_about(factor, pivot);
    }

    /// Scales by `factor` about a view-space pivot.
    pub fn scale_about(&mut self, factor: f64, pivot: Point) {
        let shift = -pivot.to_vec2() * (factor - 1.0);
        self.translation = self.translation * factor + shift;
        self.scale *= factor;
    }

    /// Pans by a view-space delta: `self = translate(delta) * self`.
    pub fn pan(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Resets to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}
