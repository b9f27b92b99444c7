// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window, event mapping and presentation.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;

use kurbo::{Point, Size};
use softbuffer::{Context, Surface};
use tracing::{debug, error, info, warn};
use trimmer_canvas::{
    CanvasConfig, CanvasEvent, GestureHandler, OverlayState, PixelSelection, TrimCanvas,
    TrimRectBuilder,
};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::keyboard::Key;
use winit::window::{Window, WindowId};

use crate::input::{PointerGesture, PointerTracker, scroll_delta};
use crate::loader::{DropGeneration, UserEvent, spawn_decode};
use crate::render;

const TITLE: &str = "Trimmer";

type WindowSurface = Surface<Rc<Window>, Rc<Window>>;

pub(crate) struct App {
    proxy: EventLoopProxy<UserEvent>,
    window: Option<Rc<Window>>,
    surface: Option<WindowSurface>,
    canvas: TrimCanvas<OverlayState>,
    pointer: PointerTracker,
    builder: TrimRectBuilder,
    pending_drop: Vec<PathBuf>,
    drops: DropGeneration,
    status: Option<String>,
}

impl App {
    pub(crate) fn new(
        proxy: EventLoopProxy<UserEvent>,
        config: &CanvasConfig,
        initial: Option<PathBuf>,
    ) -> Self {
        Self {
            proxy,
            window: None,
            surface: None,
            canvas: TrimCanvas::with_config(Size::ZERO, config, OverlayState::Hidden),
            pointer: PointerTracker::default(),
            builder: TrimRectBuilder::default(),
            pending_drop: initial.into_iter().collect(),
            drops: DropGeneration::default(),
            status: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(960, 720));
        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("failed to create display context: {e}"))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("failed to create surface: {e}"))?;

        self.window = Some(window);
        self.surface = Some(surface);
        self.resize();
        Ok(())
    }

    fn resize(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };
        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized.
            return;
        };
        if let Err(err) = surface.resize(w, h) {
            error!(%err, "failed to resize surface");
            return;
        }
        self.canvas
            .set_view_size(Size::new(f64::from(size.width), f64::from(size.height)));
    }

    fn present(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                error!(%err, "failed to map frame buffer");
                return;
            }
        };
        render::paint(&mut buffer, size.width, size.height, &self.canvas);
        window.pre_present_notify();
        if let Err(err) = buffer.present() {
            error!(%err, "failed to present frame");
        }
    }

    fn update_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let mut title = String::from(TITLE);
        if let Some(name) = self.canvas.image_path().and_then(|p| p.file_name()) {
            title.push_str(" - ");
            title.push_str(&name.to_string_lossy());
        }
        if let Some(status) = &self.status {
            title.push_str(" - ");
            title.push_str(status);
        }
        window.set_title(&title);
    }

    /// Applies queued canvas events. Returns `true` if the frame changed.
    fn drain_canvas_events(&mut self) -> bool {
        let mut changed = false;
        for event in self.canvas.drain_events() {
            match event {
                CanvasEvent::ImageLoaded { path } => {
                    info!(path = %path.display(), "image ready");
                    self.builder.reset();
                    self.status = None;
                    changed = true;
                }
                CanvasEvent::PixelSelected { pixel, phase } => {
                    self.status = Some(format!("({}, {})", pixel.x, pixel.y));
                    if let Some(rect) = self.builder.feed(PixelSelection { pixel, phase }) {
                        self.canvas.set_trim_rect(rect);
                    }
                }
            }
        }
        self.update_title();
        changed || !self.canvas.take_fired_sources().is_empty()
    }

    fn on_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }
        let center = self.canvas.viewport().view_size().to_rect().center();
        let step = self.canvas.zoom_step();
        match event.logical_key.as_ref() {
            Key::Character("+" | "=") => self.canvas.on_zoom(step, center),
            Key::Character("-") => self.canvas.on_zoom(-step, center),
            Key::Character("0") => self.canvas.reset_view(),
            _ => return false,
        }
        true
    }

    fn on_pointer(&mut self, gesture: Option<PointerGesture>) {
        match gesture {
            Some(PointerGesture::Drag(phase, point)) => self.canvas.on_drag(phase, point),
            Some(PointerGesture::Click(point)) => self.canvas.on_click(point),
            None => {}
        }
    }

    fn start_pending_drop(&mut self) {
        // One drop delivers one event per file; only the first one counts.
        let mut paths = std::mem::take(&mut self.pending_drop).into_iter();
        let Some(first) = paths.next() else {
            return;
        };
        let ignored = paths.count();
        if ignored > 0 {
            debug!(ignored, "extra dropped files ignored");
        }
        spawn_decode(self.proxy.clone(), first, self.drops.next());
    }
}

impl ApplicationHandler<UserEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            error!("{err:#}");
            event_loop.exit();
            return;
        }
        self.start_pending_drop();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        let UserEvent::Decoded {
            path,
            generation,
            result,
        } = event;
        if !self.drops.is_current(generation) {
            debug!(path = %path.display(), generation, "stale decode discarded");
            return;
        }
        match result {
            Ok(handle) => self.canvas.load_image(path, handle),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "drop rejected");
                if err.is_user_visible() {
                    self.status = Some(err.to_string());
                }
            }
        }
        self.drain_canvas_events();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().is_none_or(|w| w.id() != window_id) {
            return;
        }
        let mut redraw = false;
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize();
                redraw = true;
            }
            WindowEvent::RedrawRequested => {
                self.present();
                return;
            }
            WindowEvent::DroppedFile(path) => self.pending_drop.push(path),
            WindowEvent::CursorMoved { position, .. } => {
                let gesture = self.pointer.moved(Point::new(position.x, position.y));
                self.on_pointer(gesture);
            }
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                let gesture = self.pointer.cancelled();
                self.on_pointer(gesture);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.pressed(),
                ElementState::Released => {
                    let gesture = self.pointer.released();
                    self.on_pointer(gesture);
                }
            },
            WindowEvent::MouseWheel { delta, .. } => {
                self.canvas.on_pan_delta(scroll_delta(delta));
                redraw = true;
            }
            WindowEvent::PinchGesture { delta, .. } => {
                self.canvas.on_zoom(delta, self.pointer.cursor());
                redraw = true;
            }
            WindowEvent::KeyboardInput { event, .. } => redraw = self.on_key(&event),
            _ => {}
        }
        redraw |= self.drain_canvas_events();
        if redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.start_pending_drop();
    }
}
