// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay layout: where the trim rectangle's border goes on screen.

use kurbo::{Rect, Size};
use peniko::Color;
use trimmer_view2d::TrimViewport;

use crate::trim::TrimRect;

/// Visual parameters of the trim overlay.
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    /// Border width per screen unit of image pixel.
    ///
    /// The border is `border_scale * total_scale` wide, so it stays a fixed
    /// fraction of an image pixel under zoom.
    pub border_scale: f64,
    /// Border color.
    pub border_color: Color,
}

impl OverlayStyle {
    /// Opaque red.
    pub const DEFAULT_BORDER_COLOR: Color = Color::from_rgba8(255, 0, 0, 255);
    /// Three tenths of an image pixel.
    pub const DEFAULT_BORDER_SCALE: f64 = 0.3;
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_scale: Self::DEFAULT_BORDER_SCALE,
            border_color: Self::DEFAULT_BORDER_COLOR,
        }
    }
}

/// A visible overlay rectangle in screen space.
#[derive(Clone, Copy, Debug)]
pub struct OverlayFrame {
    /// Screen-space bounds of the trim rectangle.
    pub bounds: Rect,
    /// Border stroke width in screen units.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
}

impl PartialEq for OverlayFrame {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds
            && self.border_width == other.border_width
            && self.border_color.components == other.border_color.components
    }
}

/// What a surface should show for the trim rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OverlayState {
    /// Nothing is drawn.
    #[default]
    Hidden,
    /// A bordered rectangle is drawn.
    Visible(OverlayFrame),
}

impl OverlayState {
    /// Returns `true` if the overlay is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// The visible frame, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&OverlayFrame> {
        match self {
            Self::Hidden => None,
            Self::Visible(frame) => Some(frame),
        }
    }
}

/// A display target for overlay states.
///
/// `apply` is synchronous and immediate: the new state replaces the old one
/// without any interpolation.
pub trait OverlaySurface {
    /// Shows `state`, replacing whatever was shown before.
    fn apply(&mut self, state: &OverlayState);
}

impl<S: OverlaySurface + ?Sized> OverlaySurface for &mut S {
    fn apply(&mut self, state: &OverlayState) {
        (**self).apply(state);
    }
}

/// The simplest surface: remember the last state.
impl OverlaySurface for OverlayState {
    fn apply(&mut self, state: &OverlayState) {
        *self = *state;
    }
}

/// Lays out the overlay for `rect` under the viewport's current transforms.
///
/// The sentinel rectangle and a viewport without valid geometry both give
/// [`OverlayState::Hidden`].
#[must_use]
pub fn layout_overlay(rect: TrimRect, viewport: &TrimViewport, style: &OverlayStyle) -> OverlayState {
    if rect.is_empty() {
        return OverlayState::Hidden;
    }
    let (Some(scale), Some(origin)) = (
        viewport.total_scale(),
        viewport.image_to_screen_point(rect.origin()),
    ) else {
        return OverlayState::Hidden;
    };
    let size = Size::new(f64::from(rect.width), f64::from(rect.height)) * scale;
    OverlayState::Visible(OverlayFrame {
        bounds: Rect::from_origin_size(origin, size),
        border_width: style.border_scale * scale,
        border_color: style.border_color,
    })
}
