// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background image decoding.

use std::path::PathBuf;
use std::thread;

use tracing::{debug, error};
use trimmer_canvas::{ImageHandle, LoadError};
use winit::event_loop::EventLoopProxy;

/// Events delivered to the UI thread.
#[derive(Debug)]
pub(crate) enum UserEvent {
    Decoded {
        path: PathBuf,
        generation: u64,
        result: Result<ImageHandle, LoadError>,
    },
}

/// Numbers drops so that only the latest one is applied.
///
/// Decodes finish in any order; a result whose generation is no longer
/// current belongs to a drop that has since been superseded.
#[derive(Debug, Default)]
pub(crate) struct DropGeneration {
    current: u64,
}

impl DropGeneration {
    /// Starts a new drop and returns its generation.
    pub(crate) fn next(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.current
    }
}

/// Decodes `path` on a worker thread and posts the result back to the event loop.
pub(crate) fn spawn_decode(proxy: EventLoopProxy<UserEvent>, path: PathBuf, generation: u64) {
    let name = format!("decode {}", path.display());
    let spawned = thread::Builder::new().name(name).spawn(move || {
        debug!(path = %path.display(), generation, "decoding");
        let result = ImageHandle::decode(&path);
        let event = UserEvent::Decoded {
            path,
            generation,
            result,
        };
        if proxy.send_event(event).is_err() {
            debug!("event loop closed before decode finished");
        }
    });
    if let Err(err) = spawned {
        error!(%err, "failed to spawn decode thread");
    }
}
