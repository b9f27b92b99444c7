// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::selection::DragPhase;

/// Receiver for the gestures a host window recognizes.
///
/// All points are in screen space (origin top-left, y down). Hosts map
/// their native events onto these calls; implementors decide what the
/// gestures mean.
pub trait GestureHandler {
    /// A magnification gesture around `pivot`.
    ///
    /// `magnification` is the delta since the previous report, as pinch
    /// recognizers deliver it: `0.0` is no change, `1.0` doubles, `-1.0` halves.
    fn on_zoom(&mut self, magnification: f64, pivot: Point);

    /// A scroll or pan by `delta` screen units.
    fn on_pan_delta(&mut self, delta: Vec2);

    /// A pointer drag phase at `point`.
    fn on_drag(&mut self, phase: DragPhase, point: Point);

    /// A click at `point`.
    fn on_click(&mut self, point: Point);
}
