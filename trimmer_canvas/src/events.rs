// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use crate::selection::SelectionPhase;
use crate::trim::SelectedPixel;

/// Notifications a canvas queues for its host.
///
/// Drain them with [`TrimCanvas::drain_events`](crate::TrimCanvas::drain_events).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    /// A new image became active.
    ImageLoaded {
        /// Path the image was loaded from.
        path: PathBuf,
    },
    /// Pointer input selected an image pixel.
    PixelSelected {
        /// The pixel, which may lie outside the image bounds.
        pixel: SelectedPixel,
        /// Drag start, drag continuation or click.
        phase: SelectionPhase,
    },
}
