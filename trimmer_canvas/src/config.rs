// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::overlay::OverlayStyle;

/// Tunables for a [`TrimCanvas`](crate::TrimCanvas).
///
/// Every field has a default, so a partial or empty document deserializes.
///
/// ```
/// use trimmer_canvas::CanvasConfig;
///
/// let config = CanvasConfig::default();
/// assert_eq!(config.border_scale, 0.3);
/// assert_eq!(config.border_color, [255, 0, 0, 255]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Overlay border width per screen unit of image pixel.
    pub border_scale: f64,
    /// Overlay border color as RGBA8.
    pub border_color: [u8; 4],
    /// Magnification delta applied per keyboard zoom step.
    pub zoom_step: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            border_scale: OverlayStyle::DEFAULT_BORDER_SCALE,
            border_color: [255, 0, 0, 255],
            zoom_step: 0.1,
        }
    }
}

impl CanvasConfig {
    /// The overlay style described by this configuration.
    #[must_use]
    pub fn overlay_style(&self) -> OverlayStyle {
        let [r, g, b, a] = self.border_color;
        OverlayStyle {
            border_scale: self.border_scale,
            border_color: Color::from_rgba8(r, g, b, a),
        }
    }
}
