// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimmer Redraw: merge several trigger sources into one redraw stream.
//!
//! A trimming view has to redraw its overlay whenever any of a handful of
//! unrelated things change: a new trim rectangle arrives, a new image loads,
//! the view is resized, or the user pans/zooms. Only one of those carries a
//! payload; the others just mean "draw the latest value again". This crate
//! models that as:
//!
//! - **Sources** ([`RedrawSources`]): flags naming what changed, used both
//!   as subscription filters and to record which triggers fired.
//! - **Latest value** ([`Latest`]): a single-slot replay buffer with a
//!   revision counter.
//! - **Pipeline** ([`RedrawPipeline`]): the merged dispatch. Subscribers pick
//!   the sources they care about and get the latest value replayed on
//!   subscription.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use trimmer_redraw::{RedrawPipeline, RedrawSources};
//!
//! let mut pipeline = RedrawPipeline::<(i32, i32)>::new();
//! pipeline.publish(RedrawSources::TRIM_RECT_CHANGED, (10, 20));
//!
//! let redraws = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&redraws);
//! pipeline.subscribe(RedrawSources::all(), move |redraw| {
//!     assert_eq!(*redraw.value, (10, 20));
//!     counter.set(counter.get() + 1);
//! });
//! // Replayed once on subscription.
//! assert_eq!(redraws.get(), 1);
//!
//! pipeline.notify(RedrawSources::VIEW_RESIZED);
//! assert_eq!(redraws.get(), 2);
//! ```
//!
//! Dispatch is synchronous and single-threaded. Ordering is the call order
//! of [`RedrawPipeline::publish`] and [`RedrawPipeline::notify`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod latest;
mod pipeline;
mod sources;

pub use latest::Latest;
pub use pipeline::{Redraw, RedrawPipeline, SubscriptionId, Trigger};
pub use sources::RedrawSources;
