// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace, warn};
use trimmer_redraw::{Redraw, RedrawPipeline, RedrawSources, SubscriptionId};
use trimmer_view2d::TrimViewport;

use crate::config::CanvasConfig;
use crate::error::LoadError;
use crate::events::CanvasEvent;
use crate::gesture::GestureHandler;
use crate::handle::ImageHandle;
use crate::overlay::{OverlayState, OverlayStyle, OverlaySurface, layout_overlay};
use crate::selection::{DragPhase, PixelSelection, SelectionTracker};
use crate::trim::TrimRect;

/// The image-trimming canvas.
///
/// Owns the active image, the viewport geometry, the latest trim rectangle
/// and the overlay surface. Every change that can move the overlay (a new
/// trim rectangle, a new image, a resize, a zoom or pan) goes through one
/// [`RedrawPipeline`], which lays the overlay out again from the latest trim
/// rectangle and pushes it to the surface when it differs from what the
/// surface last showed.
///
/// The surface is updated before redraw subscribers are called, so a
/// subscriber always observes the overlay for the value it receives.
///
/// The canvas is single-threaded. Decode images elsewhere if needed and hand
/// the result over with [`load_image`](Self::load_image).
#[derive(Debug)]
pub struct TrimCanvas<S> {
    viewport: TrimViewport,
    image: Option<ImageHandle>,
    image_path: Option<PathBuf>,
    pipeline: RedrawPipeline<TrimRect>,
    selection: SelectionTracker,
    style: OverlayStyle,
    zoom_step: f64,
    surface: S,
    last_applied: Option<OverlayState>,
    events: Vec<CanvasEvent>,
}

impl<S: OverlaySurface> TrimCanvas<S> {
    /// Creates an empty canvas with the default configuration.
    pub fn new(view_size: Size, surface: S) -> Self {
        Self::with_config(view_size, &CanvasConfig::default(), surface)
    }

    /// Creates an empty canvas.
    pub fn with_config(view_size: Size, config: &CanvasConfig, surface: S) -> Self {
        Self {
            viewport: TrimViewport::new(view_size),
            image: None,
            image_path: None,
            pipeline: RedrawPipeline::new(),
            selection: SelectionTracker::default(),
            style: config.overlay_style(),
            zoom_step: config.zoom_step,
            surface,
            last_applied: None,
            events: Vec::new(),
        }
    }

    /// Loads the first of the dropped files.
    ///
    /// Only the first path is considered. On any error the previously
    /// active image, transforms and overlay stay as they were.
    ///
    /// # Errors
    ///
    /// [`LoadError::NoFileDropped`] for an empty drop, otherwise whatever
    /// [`ImageHandle::decode`] reports.
    pub fn handle_drop<I, P>(&mut self, paths: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let Some(path) = paths.into_iter().next() else {
            debug!("drop declined: no files");
            return Err(LoadError::NoFileDropped);
        };
        let path = path.as_ref();
        let handle = ImageHandle::decode(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "drop rejected");
        })?;
        self.load_image(path, handle);
        Ok(())
    }

    /// Makes `handle` the active image.
    ///
    /// Resets zoom and pan to identity, then redraws the overlay for the
    /// latest trim rectangle under the new fit, and queues
    /// [`CanvasEvent::ImageLoaded`].
    pub fn load_image(&mut self, path: impl Into<PathBuf>, handle: ImageHandle) {
        let path = path.into();
        debug!(
            path = %path.display(),
            width = handle.pixel_width(),
            height = handle.pixel_height(),
            "image loaded"
        );
        if let Err(err) = self.viewport.set_image_size(handle.size()) {
            // The fit appears once the view has a usable size.
            debug!(%err, "image loaded without a fit");
        }
        self.image = Some(handle);
        self.image_path = Some(path.clone());
        self.events.push(CanvasEvent::ImageLoaded { path });
        self.fire(RedrawSources::IMAGE_LOADED);
    }

    /// Resizes the view. Zoom and pan are kept.
    pub fn set_view_size(&mut self, size: Size) {
        if !self.viewport.set_view_size(size) {
            return;
        }
        debug!(width = size.width, height = size.height, "view resized");
        self.fire(RedrawSources::VIEW_RESIZED);
    }

    /// Replaces the trim rectangle and redraws the overlay for it.
    ///
    /// An empty rectangle hides the overlay.
    pub fn set_trim_rect(&mut self, rect: TrimRect) {
        debug!(?rect, "trim rect changed");
        self.redraw(rect);
        self.pipeline.publish(RedrawSources::TRIM_RECT_CHANGED, rect);
    }

    /// The latest trim rectangle, if one was ever set.
    #[must_use]
    pub fn trim_rect(&self) -> Option<TrimRect> {
        self.pipeline.latest().get().copied()
    }

    /// Observes redraws caused by any of `sources`.
    ///
    /// If a trim rectangle exists, `callback` is called once immediately
    /// with it.
    pub fn subscribe_redraw<F>(&mut self, sources: RedrawSources, callback: F) -> SubscriptionId
    where
        F: FnMut(Redraw<'_, TrimRect>) + 'static,
    {
        self.pipeline.subscribe(sources, callback)
    }

    /// Removes a redraw subscription.
    pub fn unsubscribe_redraw(&mut self, id: SubscriptionId) -> bool {
        self.pipeline.unsubscribe(id)
    }

    /// Sources that caused a redraw since the last call.
    ///
    /// Hosts use this to decide whether to schedule a frame.
    pub fn take_fired_sources(&mut self) -> RedrawSources {
        self.pipeline.take_fired()
    }

    /// Removes and returns the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    /// Restores zoom and pan to the fitted view.
    pub fn reset_view(&mut self) {
        self.viewport.reset_user_transform();
        self.fire(RedrawSources::TRANSFORM_CHANGED);
    }

    /// The active image.
    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Path of the active image.
    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// The viewport geometry.
    #[must_use]
    pub fn viewport(&self) -> &TrimViewport {
        &self.viewport
    }

    /// The overlay state last pushed to the surface.
    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayState> {
        self.last_applied.as_ref()
    }

    /// The overlay style in use.
    #[must_use]
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Magnification delta for one keyboard zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// The overlay surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The overlay surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn fire(&mut self, source: RedrawSources) {
        let Some(rect) = self.trim_rect() else {
            trace!(?source, "no trim rect yet, nothing to redraw");
            return;
        };
        self.redraw(rect);
        self.pipeline.notify(source);
    }

    fn redraw(&mut self, rect: TrimRect) {
        let state = layout_overlay(rect, &self.viewport, &self.style);
        if self.last_applied == Some(state) {
            trace!(?rect, "overlay unchanged");
            return;
        }
        trace!(?rect, ?state, "overlay applied");
        self.surface.apply(&state);
        self.last_applied = Some(state);
    }

    fn push_selection(&mut self, selection: Option<PixelSelection>) {
        if let Some(PixelSelection { pixel, phase }) = selection {
            debug!(x = pixel.x, y = pixel.y, ?phase, "pixel selected");
            self.events.push(CanvasEvent::PixelSelected { pixel, phase });
        }
    }
}

impl<S: OverlaySurface> GestureHandler for TrimCanvas<S> {
    fn on_zoom(&mut self, magnification: f64, pivot: Point) {
        if magnification == 0.0 || !magnification.is_finite() {
            return;
        }
        self.viewport.zoom_about(magnification, pivot);
        debug!(
            magnification,
            scale = self.viewport.user().scale(),
            "zoomed"
        );
        self.fire(RedrawSources::TRANSFORM_CHANGED);
    }

    fn on_pan_delta(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.viewport.pan_by(delta);
        trace!(dx = delta.x, dy = delta.y, "panned");
        self.fire(RedrawSources::TRANSFORM_CHANGED);
    }

    fn on_drag(&mut self, phase: DragPhase, point: Point) {
        let selection = self.selection.on_drag(phase, point, &self.viewport);
        self.push_selection(selection);
    }

    fn on_click(&mut self, point: Point) {
        let selection = self.selection.on_click(point, &self.viewport);
        self.push_selection(selection);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use image::RgbaImage;
    use kurbo::{Point, Rect, Size, Vec2};
    use trimmer_redraw::RedrawSources;

    use super::TrimCanvas;
    use crate::gesture::GestureHandler;
    use crate::handle::ImageHandle;
    use crate::overlay::{OverlayState, OverlaySurface};
    use crate::trim::TrimRect;

    #[derive(Debug, Default)]
    struct Recorder(Vec<OverlayState>);

    impl OverlaySurface for Recorder {
        fn apply(&mut self, state: &OverlayState) {
            self.0.push(*state);
        }
    }

    fn canvas() -> TrimCanvas<Recorder> {
        let mut canvas = TrimCanvas::new(Size::new(400.0, 400.0), Recorder::default());
        canvas.load_image("a.png", ImageHandle::from_rgba(RgbaImage::new(800, 600)));
        canvas
    }

    #[test]
    fn payloadless_sources_wait_for_a_rect() {
        let mut canvas = canvas();
        canvas.set_view_size(Size::new(500.0, 500.0));
        canvas.on_pan_delta(Vec2::new(3.0, 3.0));
        assert!(canvas.surface().0.is_empty());
        assert!(canvas.take_fired_sources().is_empty());
    }

    #[test]
    fn identical_redraws_are_not_reapplied() {
        let mut canvas = canvas();
        canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
        canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
        canvas.set_view_size(Size::new(400.0, 400.0));
        assert_eq!(canvas.surface().0.len(), 1);

        canvas.set_view_size(Size::new(800.0, 800.0));
        assert_eq!(canvas.surface().0.len(), 2);
        let frame = canvas.overlay().and_then(OverlayState::frame).unwrap();
        assert_eq!(frame.bounds, Rect::new(10.0, 110.0, 110.0, 160.0));
    }

    #[test]
    fn fired_sources_follow_the_triggers() {
        let mut canvas = canvas();
        canvas.set_trim_rect(TrimRect::new(1, 1, 1, 1));
        canvas.on_zoom(0.5, Point::new(20.0, 20.0));
        canvas.set_view_size(Size::new(300.0, 300.0));
        let fired = canvas.take_fired_sources();
        assert!(fired.contains(
            RedrawSources::TRIM_RECT_CHANGED
                | RedrawSources::TRANSFORM_CHANGED
                | RedrawSources::VIEW_RESIZED
        ));
        assert!(!fired.contains(RedrawSources::IMAGE_LOADED));
    }

    #[test]
    fn zero_magnification_is_ignored() {
        let mut canvas = canvas();
        canvas.on_zoom(0.0, Point::ZERO);
        canvas.on_zoom(f64::NAN, Point::ZERO);
        assert!(canvas.viewport().user().is_identity());
    }

    #[test]
    fn reset_view_restores_fit() {
        let mut canvas = canvas();
        canvas.set_trim_rect(TrimRect::new(0, 0, 10, 10));
        canvas.on_zoom(1.0, Point::new(50.0, 50.0));
        canvas.reset_view();
        assert!(canvas.viewport().user().is_identity());
        let frame = canvas.overlay().and_then(OverlayState::frame).unwrap();
        assert_eq!(frame.bounds, Rect::new(0.0, 50.0, 5.0, 55.0));
    }

    #[test]
    fn non_finite_pan_is_ignored() {
        let mut canvas = canvas();
        canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
        canvas.on_pan_delta(Vec2::new(f64::NAN, 0.0));
        canvas.on_pan_delta(Vec2::new(0.0, f64::INFINITY));
        assert!(canvas.viewport().user().is_identity());
        assert_eq!(canvas.surface().0.len(), 1);

        canvas.on_pan_delta(Vec2::new(5.0, 0.0));
        let frame = canvas.overlay().and_then(OverlayState::frame).unwrap();
        assert_eq!(frame.bounds, Rect::new(10.0, 55.0, 60.0, 80.0));
    }

    #[test]
    fn overflowing_zoom_hides_overlay_until_reset() {
        let mut canvas = canvas();
        canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
        for _ in 0..3 {
            canvas.on_zoom(1e200, Point::new(200.0, 200.0));
        }
        assert!(!canvas.viewport().is_ready());
        assert_eq!(canvas.overlay(), Some(&OverlayState::Hidden));

        canvas.drain_events();
        canvas.on_click(Point::new(100.0, 100.0));
        assert!(canvas.drain_events().is_empty());

        canvas.reset_view();
        assert!(canvas.viewport().is_ready());
        let frame = canvas.overlay().and_then(OverlayState::frame).unwrap();
        assert_eq!(frame.bounds, Rect::new(5.0, 55.0, 55.0, 80.0));
    }

    #[derive(Debug, Default)]
    struct Shared(Rc<RefCell<Vec<OverlayState>>>);

    impl OverlaySurface for Shared {
        fn apply(&mut self, state: &OverlayState) {
            self.0.borrow_mut().push(*state);
        }
    }

    #[test]
    fn surface_is_updated_before_subscribers_run() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut canvas = TrimCanvas::new(
            Size::new(400.0, 400.0),
            Shared(Rc::clone(&shown)),
        );
        canvas.load_image("a.png", ImageHandle::from_rgba(RgbaImage::new(800, 600)));

        let seen: Rc<RefCell<Vec<Option<OverlayState>>>> = Rc::default();
        let (sink, surface) = (Rc::clone(&seen), Rc::clone(&shown));
        canvas.subscribe_redraw(RedrawSources::all(), move |_| {
            sink.borrow_mut().push(surface.borrow().last().copied());
        });

        canvas.set_trim_rect(TrimRect::new(10, 10, 100, 50));
        canvas.set_view_size(Size::new(800.0, 800.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        let first = seen[0].and_then(|s| s.frame().map(|f| f.bounds));
        let second = seen[1].and_then(|s| s.frame().map(|f| f.bounds));
        assert_eq!(first, Some(Rect::new(5.0, 55.0, 55.0, 80.0)));
        assert_eq!(second, Some(Rect::new(10.0, 110.0, 110.0, 160.0)));
    }
}
