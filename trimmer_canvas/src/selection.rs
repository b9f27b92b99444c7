// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection tracking: turn pointer input into image-pixel selections.
//!
//! ## Usage
//!
//! 1) Feed drag phases to [`SelectionTracker::on_drag`] and clicks to
//!    [`SelectionTracker::on_click`], together with the current viewport.
//! 2) Each began/changed/click point is mapped to image space and reported as
//!    a [`PixelSelection`]. Ended and cancelled drags report nothing.
//! 3) Optionally feed the results to a [`TrimRectBuilder`] to assemble a
//!    [`TrimRect`] from the drag anchor and the current pixel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use trimmer_canvas::{DragPhase, SelectedPixel, SelectionTracker, TrimRect, TrimRectBuilder};
//! use trimmer_view2d::TrimViewport;
//!
//! let mut viewport = TrimViewport::new(Size::new(400.0, 400.0));
//! viewport.set_image_size(Size::new(800.0, 600.0)).unwrap();
//!
//! let mut tracker = SelectionTracker::default();
//! let mut builder = TrimRectBuilder::default();
//!
//! let down = tracker.on_drag(DragPhase::Began, Point::new(5.0, 55.0), &viewport).unwrap();
//! assert_eq!(down.pixel, SelectedPixel::new(10, 10));
//! builder.feed(down);
//!
//! let moved = tracker.on_drag(DragPhase::Changed, Point::new(55.0, 80.0), &viewport).unwrap();
//! assert_eq!(builder.feed(moved), Some(TrimRect::new(10, 10, 100, 50)));
//! ```

use kurbo::Point;
use trimmer_view2d::TrimViewport;

use crate::trim::{SelectedPixel, TrimRect};

/// Phase of a drag gesture as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The pointer went down and started moving.
    Began,
    /// The pointer moved while held.
    Changed,
    /// The pointer was released.
    Ended,
    /// The host aborted the drag.
    Cancelled,
}

/// What produced a [`PixelSelection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    /// First point of a drag.
    DragBegan,
    /// Continuation of a drag.
    DragChanged,
    /// A click.
    Click,
}

/// An image pixel selected by pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelSelection {
    /// The selected pixel, truncated toward zero.
    pub pixel: SelectedPixel,
    /// How the pixel was selected.
    pub phase: SelectionPhase,
}

/// Maps drag and click points to image pixels.
///
/// The tracker does not assemble rectangles; it only remembers whether a
/// drag is in progress. A [`DragPhase::Changed`] that arrives outside a drag
/// starts one and is reported as [`SelectionPhase::DragBegan`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionTracker {
    dragging: bool,
}

impl SelectionTracker {
    /// Processes one drag phase at a screen point.
    ///
    /// Returns `None` for [`DragPhase::Ended`] and [`DragPhase::Cancelled`],
    /// and whenever the viewport has no valid geometry.
    pub fn on_drag(
        &mut self,
        phase: DragPhase,
        point: Point,
        viewport: &TrimViewport,
    ) -> Option<PixelSelection> {
        let phase = match phase {
            DragPhase::Began => SelectionPhase::DragBegan,
            DragPhase::Changed if self.dragging => SelectionPhase::DragChanged,
            DragPhase::Changed => SelectionPhase::DragBegan,
            DragPhase::Ended | DragPhase::Cancelled => {
                self.dragging = false;
                return None;
            }
        };
        self.dragging = true;
        select(point, phase, viewport)
    }

    /// Processes a click at a screen point.
    pub fn on_click(&mut self, point: Point, viewport: &TrimViewport) -> Option<PixelSelection> {
        select(point, SelectionPhase::Click, viewport)
    }

    /// Returns `true` between a began and an ended/cancelled drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

fn select(point: Point, phase: SelectionPhase, viewport: &TrimViewport) -> Option<PixelSelection> {
    let image_pt = viewport.screen_to_image_point(point)?;
    Some(PixelSelection {
        pixel: SelectedPixel::from_image_point(image_pt),
        phase,
    })
}

/// Assembles a [`TrimRect`] from a stream of [`PixelSelection`]s.
///
/// A drag start anchors the rectangle; every continuation yields the
/// rectangle spanned by the anchor and the current pixel. A click yields an
/// empty rectangle at the clicked pixel, which clears the selection.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrimRectBuilder {
    anchor: Option<SelectedPixel>,
}

impl TrimRectBuilder {
    /// Feeds one selection and returns the rectangle it implies.
    pub fn feed(&mut self, selection: PixelSelection) -> Option<TrimRect> {
        let pixel = selection.pixel;
        match selection.phase {
            SelectionPhase::DragBegan => {
                self.anchor = Some(pixel);
                None
            }
            SelectionPhase::DragChanged => {
                let anchor = *self.anchor.get_or_insert(pixel);
                Some(TrimRect::from_corners(anchor, pixel))
            }
            SelectionPhase::Click => {
                self.anchor = None;
                Some(TrimRect::from_corners(pixel, pixel))
            }
        }
    }

    /// The current anchor pixel, if a drag is being assembled.
    #[must_use]
    pub fn anchor(&self) -> Option<SelectedPixel> {
        self.anchor
    }

    /// Forgets the anchor.
    pub fn reset(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use trimmer_view2d::TrimViewport;

    use super::*;

    fn viewport() -> TrimViewport {
        let mut vp = TrimViewport::new(Size::new(400.0, 400.0));
        vp.set_image_size(Size::new(800.0, 600.0)).unwrap();
        vp
    }

    #[test]
    fn began_and_changed_select_ended_does_not() {
        let vp = viewport();
        let mut tracker = SelectionTracker::default();

        let began = tracker.on_drag(DragPhase::Began, Point::new(100.0, 100.0), &vp);
        assert_eq!(
            began,
            Some(PixelSelection {
                pixel: SelectedPixel::new(200, 100),
                phase: SelectionPhase::DragBegan,
            })
        );
        assert!(tracker.is_dragging());

        let changed = tracker.on_drag(DragPhase::Changed, Point::new(101.0, 101.0), &vp);
        assert_eq!(changed.map(|s| s.pixel), Some(SelectedPixel::new(202, 102)));

        assert_eq!(tracker.on_drag(DragPhase::Ended, Point::new(1.0, 1.0), &vp), None);
        assert!(!tracker.is_dragging());

        tracker.on_drag(DragPhase::Began, Point::ZERO, &vp);
        assert_eq!(tracker.on_drag(DragPhase::Cancelled, Point::ZERO, &vp), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn change_outside_a_drag_begins_one() {
        let vp = viewport();
        let mut tracker = SelectionTracker::default();
        let mut builder = TrimRectBuilder::default();

        let first = tracker
            .on_drag(DragPhase::Changed, Point::new(5.0, 55.0), &vp)
            .unwrap();
        assert_eq!(first.phase, SelectionPhase::DragBegan);
        assert!(tracker.is_dragging());
        assert_eq!(builder.feed(first), None);

        let next = tracker
            .on_drag(DragPhase::Changed, Point::new(55.0, 80.0), &vp)
            .unwrap();
        assert_eq!(next.phase, SelectionPhase::DragChanged);
        assert_eq!(builder.feed(next), Some(TrimRect::new(10, 10, 100, 50)));
    }

    #[test]
    fn nothing_without_an_image() {
        let vp = TrimViewport::new(Size::new(400.0, 400.0));
        let mut tracker = SelectionTracker::default();
        assert_eq!(tracker.on_click(Point::new(10.0, 10.0), &vp), None);
        assert_eq!(tracker.on_drag(DragPhase::Began, Point::new(10.0, 10.0), &vp), None);
    }

    #[test]
    fn letterbox_points_map_outside_the_image() {
        let vp = viewport();
        let mut tracker = SelectionTracker::default();
        // Top bar: y = 10 is above the image origin at y = 50.
        let sel = tracker.on_click(Point::new(10.0, 10.0), &vp).unwrap();
        assert_eq!(sel.pixel, SelectedPixel::new(20, -80));
        assert_eq!(sel.phase, SelectionPhase::Click);
    }

    #[test]
    fn builder_spans_anchor_and_current() {
        let mut builder = TrimRectBuilder::default();
        let at = |x, y, phase| PixelSelection {
            pixel: SelectedPixel::new(x, y),
            phase,
        };

        assert_eq!(builder.feed(at(50, 40, SelectionPhase::DragBegan)), None);
        assert_eq!(builder.anchor(), Some(SelectedPixel::new(50, 40)));
        assert_eq!(
            builder.feed(at(20, 60, SelectionPhase::DragChanged)),
            Some(TrimRect::new(20, 40, 30, 20))
        );

        let cleared = builder.feed(at(7, 7, SelectionPhase::Click)).unwrap();
        assert!(cleared.is_empty());
        assert_eq!(builder.anchor(), None);
    }

    #[test]
    fn builder_anchors_on_orphan_change() {
        let mut builder = TrimRectBuilder::default();
        let first = builder.feed(PixelSelection {
            pixel: SelectedPixel::new(3, 3),
            phase: SelectionPhase::DragChanged,
        });
        assert!(first.is_some_and(|r| r.is_empty()));
        builder.reset();
        assert_eq!(builder.anchor(), None);
    }
}
