// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a console subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// `RUST_LOG=trimmer_canvas=debug` shows loads, resizes and gestures;
/// `trace` adds every overlay redraw.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console = fmt::layer().with_target(true).with_line_number(true);
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .init();
}
