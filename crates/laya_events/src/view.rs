//! Lazy event view
//!
//! [`EventView`] fetches events from its source strictly on demand, one at a
//! time, without any heap storage. It comes in two shapes:
//!
//! - [`EventCursor`], a single-slot cursor obtained from
//!   [`EventView::begin`]. Advancing overwrites the held event in place, and
//!   the borrow checker rejects a reference that outlives the advance.
//! - [`EventIter`], a regular [`Iterator`] that hands out copies.
//!
//! ```no_run
//! use laya_events::{events_view, Event};
//!
//! for event in events_view() {
//!     if let Event::Quit(_) = event {
//!         break;
//!     }
//! }
//! ```

use crate::event::Event;
use crate::queue::SystemQueue;
use crate::source::{poll_event, EventSource};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// On-demand view over the events pending in `S`
///
/// Zero-sized; every fetch goes straight to the source.
pub struct EventView<S = SystemQueue> {
    _source: PhantomData<fn() -> S>,
}

impl<S: EventSource> EventView<S> {
    pub const fn new() -> Self {
        Self {
            _source: PhantomData,
        }
    }

    /// Fetch the first convertible event
    ///
    /// Unrecognized records in front of it are consumed. The cursor is
    /// exhausted if the source runs dry first.
    pub fn begin(&self) -> EventCursor<S> {
        EventCursor {
            slot: poll_event::<S>(),
            _source: PhantomData,
        }
    }

    /// An exhausted cursor; does not touch the source
    pub fn end(&self) -> EventCursor<S> {
        EventCursor {
            slot: None,
            _source: PhantomData,
        }
    }
}

impl<S: EventSource> Default for EventView<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for EventView<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for EventView<S> {}

impl<S> fmt::Debug for EventView<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventView")
            .field("source", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S: EventSource> IntoIterator for EventView<S> {
    type Item = Event;
    type IntoIter = EventIter<S>;

    fn into_iter(self) -> EventIter<S> {
        EventIter::new()
    }
}

impl<S: EventSource> IntoIterator for &EventView<S> {
    type Item = Event;
    type IntoIter = EventIter<S>;

    fn into_iter(self) -> EventIter<S> {
        EventIter::new()
    }
}

/// Single-slot cursor over an [`EventView`]
///
/// Holds at most one event. [`advance`](Self::advance) replaces it with the
/// next one, so a reference from [`get`](Self::get) cannot be kept across it:
///
/// ```compile_fail
/// use laya_events::events_view;
///
/// let view = events_view();
/// let mut cursor = view.begin();
/// let held = cursor.get();
/// cursor.advance();
/// println!("{:?}", held);
/// ```
///
/// Cursors compare equal when both hold an event or both are exhausted, so
/// `cursor == view.end()` tests for exhaustion.
pub struct EventCursor<S = SystemQueue> {
    slot: Option<Event>,
    _source: PhantomData<fn() -> S>,
}

impl<S: EventSource> EventCursor<S> {
    /// The held event, if any
    #[inline]
    pub fn get(&self) -> Option<&Event> {
        self.slot.as_ref()
    }

    /// Replace the held event with the next convertible one
    ///
    /// Unrecognized records are consumed and skipped. Once the source runs
    /// dry the cursor is exhausted; advancing an exhausted cursor does not
    /// poll again.
    pub fn advance(&mut self) -> Option<&Event> {
        if self.slot.is_none() {
            return None;
        }
        self.slot = poll_event::<S>();
        self.slot.as_ref()
    }

    #[inline]
    pub fn has_event(&self) -> bool {
        self.slot.is_some()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.slot.is_none()
    }
}

impl<S> PartialEq for EventCursor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.slot.is_some() == other.slot.is_some()
    }
}

impl<S> Clone for EventCursor<S> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot,
            _source: PhantomData,
        }
    }
}

impl<S> fmt::Debug for EventCursor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventCursor")
            .field("slot", &self.slot)
            .finish()
    }
}

/// Copy-out iterator over an [`EventView`]
///
/// Each `next` polls the source for exactly one convertible event. After the
/// source first runs dry the iterator stays finished, even if new events
/// arrive later; take a fresh view to see them.
pub struct EventIter<S = SystemQueue> {
    finished: bool,
    _source: PhantomData<fn() -> S>,
}

impl<S: EventSource> EventIter<S> {
    fn new() -> Self {
        Self {
            finished: false,
            _source: PhantomData,
        }
    }
}

impl<S: EventSource> Iterator for EventIter<S> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.finished {
            return None;
        }
        let event = poll_event::<S>();
        self.finished = event.is_none();
        event
    }
}

impl<S: EventSource> FusedIterator for EventIter<S> {}

impl<S> fmt::Debug for EventIter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventIter")
            .field("finished", &self.finished)
            .finish()
    }
}
