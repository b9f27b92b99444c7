// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimmer Canvas: a headless image-trimming view.
//!
//! A user drops an image onto the view, pans and zooms it, and drags to mark
//! a rectangle in image-pixel coordinates. This crate holds everything about
//! that view except the window and the pixels on screen:
//!
//! - [`TrimCanvas`]: the active [`ImageHandle`], a [`TrimViewport`] with the
//!   fit and user transforms, the latest [`TrimRect`], and the redraw
//!   pipeline that keeps the overlay in sync with all of them.
//! - [`SelectionTracker`]: maps drag and click points to [`SelectedPixel`]s.
//!   [`TrimRectBuilder`] optionally turns those into rectangles.
//! - [`layout_overlay`]: places the trim rectangle's border on screen, drawn
//!   by any [`OverlaySurface`].
//! - [`GestureHandler`]: the gesture capability a host drives.
//!
//! Hosts feed drops, resizes and gestures in; they get [`CanvasEvent`]s and
//! overlay states out.
//!
//! ## Minimal example
//!
//! ```rust
//! use image::RgbaImage;
//! use kurbo::{Rect, Size};
//! use trimmer_canvas::{ImageHandle, OverlayState, TrimCanvas, TrimRect};
//!
//! let mut canvas = TrimCanvas::new(Size::new(400.0, 400.0), OverlayState::Hidden);
//! canvas.load_image("photo.png", ImageHandle::from_rgba(RgbaImage::new(800, 600)));
//! canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
//!
//! let frame = canvas.surface().frame().unwrap();
//! assert_eq!(frame.bounds, Rect::new(5.0, 55.0, 55.0, 80.0));
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.
//!
//! [`TrimViewport`]: trimmer_view2d::TrimViewport

mod canvas;
mod config;
mod error;
mod events;
mod gesture;
mod handle;
mod overlay;
mod selection;
mod trim;

pub use canvas::TrimCanvas;
pub use config::CanvasConfig;
pub use error::LoadError;
pub use events::CanvasEvent;
pub use gesture::GestureHandler;
pub use handle::ImageHandle;
pub use overlay::{OverlayFrame, OverlayState, OverlayStyle, OverlaySurface, layout_overlay};
pub use selection::{
    DragPhase, PixelSelection, SelectionPhase, SelectionTracker, TrimRectBuilder,
};
pub use trim::{SelectedPixel, TrimRect};

pub use trimmer_redraw::{Redraw, RedrawSources, SubscriptionId, Trigger};
