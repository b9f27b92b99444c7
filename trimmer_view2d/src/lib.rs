// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimmer View 2D: image-to-screen geometry for a pan/zoom trimming canvas.
//!
//! This crate provides small, headless models of the three coordinate spaces
//! a trimming view has to reconcile:
//! - **Image-pixel space**: origin at the image's top-left texel, units are
//!   pixels of the decoded image.
//! - **Fitted space**: the image letterboxed into the view with a uniform
//!   [`FitTransform`] (scale + origin), centered along the shorter axis.
//! - **Screen space**: the fitted image after the user's accumulated pan/zoom
//!   ([`UserTransform`]). Origin top-left, y increasing downward.
//!
//! Mapping is always `screen = user ∘ fit ∘ image`, and the reverse mapping is
//! the inverse of that same affine, so round trips are lossless up to
//! floating-point precision.
//!
//! It does **not** own pixels, gestures, or any rendering backend. Callers are
//! expected to:
//! - Feed view resizes and image loads into a [`TrimViewport`].
//! - Translate gesture input into [`TrimViewport::zoom_about`] and
//!   [`TrimViewport::pan_by`].
//! - Use the mapping queries to place overlays and to convert pointer input.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use trimmer_view2d::TrimViewport;
//!
//! let mut view = TrimViewport::new(Size::new(400.0, 400.0));
//! view.set_image_size(Size::new(800.0, 600.0)).unwrap();
//!
//! // The 800x600 image is letterboxed: scale 0.5, 50px bars top and bottom.
//! assert_eq!(view.image_to_screen_point(Point::ZERO), Some(Point::new(0.0, 50.0)));
//!
//! // Pinch-zoom 2x about (100, 100), then map a click back into the image.
//! view.zoom_about(1.0, Point::new(100.0, 100.0));
//! let pixel = view.screen_to_image_point(Point::new(300.0, 300.0)).unwrap();
//! assert!((pixel.x - 400.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned with a **uniform** scale; there is no rotation.
//! - Zoom and pan are unbounded. Clamping, if wanted, belongs to the caller.
//! - Loading a new image resets the user transform to identity.
//! - Degenerate sizes (any dimension `<= 0`) are reported as
//!   [`DegenerateGeometry`] and leave the viewport without a fit; mapping
//!   queries then return `None`.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod user;
mod viewport;

pub use fit::{DegenerateGeometry, FitTransform, fit_transform, fitted_size};
pub use user::{UserTransform, magnification_factor};
pub use viewport::{
    TrimViewport, TrimViewportDebugInfo, compose, image_to_screen, screen_to_image,
};
