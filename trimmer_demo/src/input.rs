// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer events to click and drag gestures.

use kurbo::{Point, Vec2};
use trimmer_canvas::DragPhase;
use winit::event::MouseScrollDelta;

/// Movement below this many physical pixels keeps a press a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Screen units per scroll line.
const LINE_STEP: f64 = 20.0;

/// A gesture recognized from the left mouse button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PointerGesture {
    Drag(DragPhase, Point),
    Click(Point),
}

/// Left-button state machine: press, optional drag, release.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PointerTracker {
    cursor: Point,
    pressed_at: Option<Point>,
    dragging: bool,
}

impl PointerTracker {
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(crate) fn moved(&mut self, pos: Point) -> Option<PointerGesture> {
        self.cursor = pos;
        let start = self.pressed_at?;
        if self.dragging {
            return Some(PointerGesture::Drag(DragPhase::Changed, pos));
        }
        if (pos - start).hypot() < DRAG_THRESHOLD {
            return None;
        }
        self.dragging = true;
        Some(PointerGesture::Drag(DragPhase::Began, start))
    }

    pub(crate) fn pressed(&mut self) {
        self.pressed_at = Some(self.cursor);
        self.dragging = false;
    }

    pub(crate) fn released(&mut self) -> Option<PointerGesture> {
        self.pressed_at.take()?;
        if std::mem::take(&mut self.dragging) {
            Some(PointerGesture::Drag(DragPhase::Ended, self.cursor))
        } else {
            Some(PointerGesture::Click(self.cursor))
        }
    }

    /// The cursor left the window or focus was lost mid-gesture.
    pub(crate) fn cancelled(&mut self) -> Option<PointerGesture> {
        self.pressed_at.take()?;
        std::mem::take(&mut self.dragging)
            .then_some(PointerGesture::Drag(DragPhase::Cancelled, self.cursor))
    }
}

/// Scroll wheel or trackpad delta in screen units.
pub(crate) fn scroll_delta(delta: MouseScrollDelta) -> Vec2 {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            Vec2::new(f64::from(x) * LINE_STEP, f64::from(y) * LINE_STEP)
        }
        MouseScrollDelta::PixelDelta(pos) => Vec2::new(pos.x, pos.y),
    }
}
