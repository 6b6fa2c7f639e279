//! Native event sources
//!
//! The native library owns a single process-wide queue. [`EventSource`]
//! abstracts its non-blocking "poll next" primitive so the collection and the
//! view can be driven by the system queue or by any other producer of
//! [`RawEvent`] records.

use crate::convert::from_raw;
use crate::event::Event;
use crate::raw::RawEvent;

/// A process-wide queue of native event records
///
/// Implemented by zero-sized marker types: the queue is global state of the
/// native library, so there is no instance to hold on to. `poll_next` removes
/// the record it returns.
pub trait EventSource {
    /// Remove and return the next record, or `None` if the queue is empty
    ///
    /// Must not block.
    fn poll_next() -> Option<RawEvent>;
}

/// Poll `S` until a convertible record appears or the queue is empty
///
/// Records with unrecognized tags are consumed and skipped. Returns `None`
/// once the queue reports empty.
pub fn poll_event<S: EventSource>() -> Option<Event> {
    while let Some(raw) = S::poll_next() {
        match from_raw(&raw) {
            Ok(event) => return Some(event),
            Err(err) => {
                tracing::trace!(tag = err.tag, "skipping unrecognized native event");
            }
        }
    }
    None
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;
    use crate::raw::event_type;

    #[test]
    fn test_poll_event_skips_unrecognized() {
        Scripted::load([
            RawEvent::with_kind(0x7777, 0),
            RawEvent::with_kind(event_type::USER, 0),
            RawEvent::quit(3),
        ]);
        let event = poll_event::<Scripted>().unwrap();
        assert!(event.is_quit());
        assert_eq!(event.timestamp(), 3);
        assert_eq!(Scripted::remaining(), 0);
        assert_eq!(Scripted::polls(), 3);
    }

    #[test]
    fn test_poll_event_on_empty_source() {
        Scripted::load([]);
        assert!(poll_event::<Scripted>().is_none());
        assert_eq!(Scripted::polls(), 1);
    }

    #[test]
    fn test_poll_event_consumes_trailing_unrecognized() {
        Scripted::load([RawEvent::with_kind(0x7777, 0)]);
        assert!(poll_event::<Scripted>().is_none());
        assert_eq!(Scripted::remaining(), 0);
    }
}
