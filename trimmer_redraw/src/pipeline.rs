// Copyright 2025 the Trimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::latest::Latest;
use crate::sources::RedrawSources;

/// What caused a redraw to be dispatched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A source fired through [`RedrawPipeline::publish`] or [`RedrawPipeline::notify`].
    Source(RedrawSources),
    /// A new subscriber received the latest value on subscription.
    Replay,
}

/// A single redraw delivered to a subscriber.
#[derive(Debug)]
pub struct Redraw<'a, T> {
    /// The source that fired, or [`Trigger::Replay`].
    pub trigger: Trigger,
    /// The latest value at dispatch time.
    pub value: &'a T,
    /// Revision of the latest-value slot at dispatch time.
    pub revision: u64,
}

/// Handle returned by [`RedrawPipeline::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback<T> = Box<dyn FnMut(Redraw<'_, T>)>;

struct Listener<T> {
    id: SubscriptionId,
    filter: RedrawSources,
    callback: Callback<T>,
}

/// Merges several trigger sources into one redraw stream that always
/// carries the latest value.
///
/// One source is usually the value itself (published with
/// [`publish`](Self::publish)); the others are payloadless triggers
/// ([`notify`](Self::notify)) that only ask for the latest value to be
/// redrawn. A payloadless trigger that arrives before any value was
/// published is dropped.
///
/// ```
/// use trimmer_redraw::{RedrawPipeline, RedrawSources};
///
/// let mut pipeline = RedrawPipeline::<u32>::new();
/// assert_eq!(pipeline.notify(RedrawSources::VIEW_RESIZED), None);
///
/// pipeline.publish(RedrawSources::TRIM_RECT_CHANGED, 7);
/// assert_eq!(pipeline.notify(RedrawSources::VIEW_RESIZED), Some(7));
/// ```
pub struct RedrawPipeline<T> {
    latest: Latest<T>,
    listeners: SmallVec<[Listener<T>; 2]>,
    next_id: u32,
    fired: RedrawSources,
}

impl<T> Default for RedrawPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RedrawPipeline<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawPipeline")
            .field("latest", &self.latest)
            .field("subscribers", &self.listeners.len())
            .field("next_id", &self.next_id)
            .field("fired", &self.fired)
            .finish()
    }
}

impl<T> RedrawPipeline<T> {
    /// Creates a pipeline with no value and no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: Latest::new(),
            listeners: SmallVec::new(),
            next_id: 0,
            fired: RedrawSources::empty(),
        }
    }

    /// Returns the latest-value slot.
    #[must_use]
    pub fn latest(&self) -> &Latest<T> {
        &self.latest
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Stores `value` as the latest value and dispatches it as fired by `source`.
    ///
    /// Returns the new revision of the latest-value slot.
    pub fn publish(&mut self, source: RedrawSources, value: T) -> u64 {
        let revision = self.latest.set(value);
        self.fired |= source;
        self.dispatch(source);
        revision
    }

    /// Subscribes `callback` to redraws fired by any of `sources`.
    ///
    /// If a value is already present it is replayed to the new subscriber
    /// immediately, exactly once, with [`Trigger::Replay`].
    pub fn subscribe<F>(&mut self, sources: RedrawSources, callback: F) -> SubscriptionId
    where
        F: FnMut(Redraw<'_, T>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let mut listener = Listener {
            id,
            filter: sources,
            callback: Box::new(callback),
        };
        if let Some(value) = self.latest.get() {
            (listener.callback)(Redraw {
                trigger: Trigger::Replay,
                value,
                revision: self.latest.revision(),
            });
        }
        self.listeners.push(listener);
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Returns the set of sources that fired since the last call, and clears it.
    ///
    /// Payloadless triggers dropped for lack of a value are not recorded.
    pub fn take_fired(&mut self) -> RedrawSources {
        core::mem::take(&mut self.fired)
    }

    fn dispatch(&mut self, source: RedrawSources) {
        let Some(value) = self.latest.get() else {
            return;
        };
        let revision = self.latest.revision();
        for listener in &mut self.listeners {
            if listener.filter.intersects(source) {
                (listener.callback)(Redraw {
                    trigger: Trigger::Source(source),
                    value,
                    revision,
                });
            }
        }
    }
}

impl<T: Clone> RedrawPipeline<T> {
    /// Fires a payloadless `source`, redrawing with the latest value.
    ///
    /// Returns a copy of the value that was dispatched, or `None` if no
    /// value has been published yet (in which case nothing happens).
    pub fn notify(&mut self, source: RedrawSources) -> Option<T> {
        let value = self.latest.get()?.clone();
        self.fired |= source;
        self.dispatch(source);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{RedrawPipeline, Trigger};
    use crate::sources::RedrawSources;

    const RECT: RedrawSources = RedrawSources::TRIM_RECT_CHANGED;
    const IMAGE: RedrawSources = RedrawSources::IMAGE_LOADED;
    const RESIZE: RedrawSources = RedrawSources::VIEW_RESIZED;

    type Log = Rc<RefCell<Vec<(Trigger, i32)>>>;

    fn recorder(pipeline: &mut RedrawPipeline<i32>, sources: RedrawSources) -> Log {
        let log: Log = Rc::default();
        let sink = Rc::clone(&log);
        pipeline.subscribe(sources, move |redraw| {
            sink.borrow_mut().push((redraw.trigger, *redraw.value));
        });
        log
    }

    #[test]
    fn payloadless_trigger_without_value_is_dropped() {
        let mut pipeline = RedrawPipeline::new();
        let log = recorder(&mut pipeline, RedrawSources::all());
        assert_eq!(pipeline.notify(IMAGE), None);
        assert_eq!(pipeline.notify(RESIZE), None);
        assert!(log.borrow().is_empty());
        assert!(pipeline.take_fired().is_empty());
    }

    #[test]
    fn payloadless_triggers_redraw_latest_value() {
        let mut pipeline = RedrawPipeline::new();
        let log = recorder(&mut pipeline, RedrawSources::all());
        pipeline.publish(RECT, 3);
        pipeline.publish(RECT, 4);
        assert_eq!(pipeline.notify(RESIZE), Some(4));
        assert_eq!(
            *log.borrow(),
            [
                (Trigger::Source(RECT), 3),
                (Trigger::Source(RECT), 4),
                (Trigger::Source(RESIZE), 4),
            ]
        );
    }

    #[test]
    fn late_subscriber_gets_exactly_one_replay() {
        let mut pipeline = RedrawPipeline::new();
        pipeline.publish(RECT, 1);
        pipeline.publish(RECT, 2);
        let log = recorder(&mut pipeline, RECT);
        assert_eq!(*log.borrow(), [(Trigger::Replay, 2)]);
    }

    #[test]
    fn early_subscriber_gets_no_replay() {
        let mut pipeline = RedrawPipeline::<i32>::new();
        let log = recorder(&mut pipeline, RedrawSources::all());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn filters_select_sources() {
        let mut pipeline = RedrawPipeline::new();
        let only_resize = recorder(&mut pipeline, RESIZE);
        pipeline.publish(RECT, 9);
        pipeline.notify(IMAGE);
        pipeline.notify(RESIZE);
        assert_eq!(*only_resize.borrow(), [(Trigger::Source(RESIZE), 9)]);
    }

    #[test]
    fn combined_filter_accepts_any_member() {
        let mut pipeline = RedrawPipeline::new();
        let log = recorder(&mut pipeline, RECT | RESIZE);
        pipeline.publish(RECT, 1);
        pipeline.notify(IMAGE);
        pipeline.notify(RESIZE);
        assert_eq!(
            *log.borrow(),
            [(Trigger::Source(RECT), 1), (Trigger::Source(RESIZE), 1)]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut pipeline = RedrawPipeline::new();
        let log: Log = Rc::default();
        let sink = Rc::clone(&log);
        let id = pipeline.subscribe(RedrawSources::all(), move |r| {
            sink.borrow_mut().push((r.trigger, *r.value));
        });
        assert_eq!(pipeline.subscriber_count(), 1);
        assert!(pipeline.unsubscribe(id));
        assert!(!pipeline.unsubscribe(id));
        pipeline.publish(RECT, 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn fired_set_accumulates_until_taken() {
        let mut pipeline = RedrawPipeline::new();
        pipeline.publish(RECT, 0);
        pipeline.notify(RESIZE);
        let fired = pipeline.take_fired();
        assert!(fired.contains(RECT) && fired.contains(RESIZE));
        assert!(!fired.contains(IMAGE));
        assert!(pipeline.take_fired().is_empty());
    }

    #[test]
    fn revision_tracks_publishes() {
        let mut pipeline = RedrawPipeline::new();
        assert_eq!(pipeline.publish(RECT, 5), 1);
        pipeline.notify(RESIZE);
        assert_eq!(pipeline.latest().revision(), 1);
        assert_eq!(pipeline.publish(RECT, 6), 2);
    }
}
