//! Owning event collection
//!
//! [`EventCollection`] drains a source completely at construction and keeps
//! the converted events, so they can be indexed and iterated any number of
//! times.

use crate::event::Event;
use crate::queue::SystemQueue;
use crate::source::{poll_event, EventSource};
use std::ops::Index;

/// Every event that was pending when the collection was built, in arrival order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    /// Drain `S` until it reports empty
    ///
    /// Records with unrecognized tags are consumed and skipped.
    pub fn poll<S: EventSource>() -> Self {
        let mut events = Vec::new();
        while let Some(event) = poll_event::<S>() {
            events.push(event);
        }
        tracing::trace!(count = events.len(), "drained event queue");
        Self { events }
    }

    /// Drain the system queue
    pub fn from_system_queue() -> Self {
        Self::poll::<SystemQueue>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Checked access
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

impl Index<usize> for EventCollection {
    type Output = Event;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for EventCollection {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
