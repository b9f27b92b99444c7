// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimmer: drop an image, pan and zoom it, drag to mark a trim rectangle.
//!
//! Controls:
//! - Drop an image file onto the window, or pass one on the command line.
//! - Pinch or `+`/`-` to zoom, `0` to reset, scroll to pan.
//! - Drag with the left button to mark a rectangle; click to clear it.
//!
//! The title shows the image name and the last selected pixel.

mod app;
mod input;
mod loader;
mod logging;
mod render;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use crate::app::App;
use crate::loader::UserEvent;

#[derive(Parser, Debug)]
#[command(name = "trimmer", about = "Interactive image trimming canvas")]
struct Args {
    /// Image to open at startup.
    image: Option<PathBuf>,

    /// JSON file with canvas settings (border color, border scale, zoom step).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let config = settings::load(args.config.as_deref())?;
    tracing::debug!(?config, "starting");

    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let mut app = App::new(event_loop.create_proxy(), &config, args.image);
    event_loop.run_app(&mut app)?;
    Ok(())
}
