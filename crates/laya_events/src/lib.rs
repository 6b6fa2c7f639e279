//! Laya native event layer
//!
//! This crate turns the native library's tagged event records into a closed,
//! type-safe [`Event`] model and offers two ways of draining the queue:
//!
//! - [`EventCollection`] drains everything up front into owned storage that
//!   can be indexed and iterated repeatedly.
//! - [`EventView`] fetches one event at a time on demand and never allocates.
//!
//! Records whose tag has no typed counterpart are skipped by both.
//!
//! # Example
//!
//! ```
//! use laya_events::raw::{event_type, RawEvent};
//! use laya_events::{collect_events, push_event, Event};
//!
//! push_event(RawEvent::window(event_type::WINDOW_MOVED, 0, 1, 10, 20)).unwrap();
//! push_event(RawEvent::quit(0)).unwrap();
//!
//! let events = collect_events();
//! for event in &events {
//!     match event {
//!         Event::Window(window) => {
//!             if let Some(pos) = window.position() {
//!                 println!("window {} moved to {},{}", window.window_id, pos.x, pos.y);
//!             }
//!         }
//!         Event::Quit(_) => println!("quit requested"),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! # Threading
//!
//! The system queue accepts pushes from any thread. Polling is meant to
//! happen on a single thread, the one running the main loop.

mod collection;
mod convert;
mod error;
mod event;
mod id;
mod input;
mod queue;
pub mod raw;
mod source;
mod view;

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

// Re-export all public types
pub use collection::EventCollection;
pub use convert::{convert_window_data, convert_window_kind, from_raw};
pub use error::{EventError, Result, Unrecognized};
pub use event::{
    DisplayIndex, Event, EventKind, JoystickAxisEvent, JoystickButtonEvent, JoystickHatEvent,
    KeyEvent, MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, QuitEvent, TextEditingEvent,
    TextInputEvent, WindowEvent, WindowEventData, WindowEventKind, WindowPosition, WindowSize,
};
pub use id::{JoystickId, MouseId, RendererId, WindowId};
pub use input::{
    ButtonState, HatPosition, KeyMod, Keycode, MouseButton, MouseButtonMask, Scancode, TextBuffer,
    WheelDirection, TEXT_CAPACITY,
};
pub use queue::{QueueConfig, SystemQueue, DEFAULT_MAX_QUEUED};
pub use raw::RawEvent;
pub use source::{poll_event, EventSource};
pub use view::{EventCursor, EventIter, EventView};

/// Drain every pending event from the system queue
pub fn collect_events() -> EventCollection {
    EventCollection::from_system_queue()
}

/// Lazy view over the system queue
pub fn events_view() -> EventView {
    EventView::new()
}

/// Append a record to the system queue
pub fn push_event(raw: RawEvent) -> Result<()> {
    SystemQueue::push(raw)
}

/// Check for pending records without removing any
///
/// Pending records may still be unrecognized, so a following poll can come
/// back empty.
pub fn has_events() -> bool {
    SystemQueue::has_events()
}

/// Discard every pending record
pub fn flush_events() -> usize {
    SystemQueue::flush()
}

/// Discard pending records whose tag lies in `tags`
pub fn flush_events_range(tags: RangeInclusive<u32>) -> usize {
    SystemQueue::flush_range(tags)
}

/// Block until a convertible event arrives
pub fn wait_event() -> Event {
    loop {
        let Some(raw) = SystemQueue::wait_next(None) else {
            continue;
        };
        match from_raw(&raw) {
            Ok(event) => return event,
            Err(err) => tracing::trace!(tag = err.tag, "skipping unrecognized native event"),
        }
    }
}

/// Block until a convertible event arrives or `timeout` elapses
///
/// Unrecognized records are skipped while time remains. A timeout too large
/// to represent as a deadline waits like [`wait_event`].
pub fn wait_event_timeout(timeout: Duration) -> Option<Event> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return Some(wait_event());
    };
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let raw = SystemQueue::wait_next(Some(remaining))?;
        match from_raw(&raw) {
            Ok(event) => return Some(event),
            Err(err) => {
                tracing::trace!(tag = err.tag, "skipping unrecognized native event");
                if Instant::now() >= deadline {
                    return None;
                }
            }
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{EventError, Result};
    pub use crate::event::{Event, EventKind, WindowEvent, WindowEventData, WindowEventKind};
    pub use crate::id::WindowId;
    pub use crate::input::{ButtonState, KeyMod, Keycode, MouseButton, Scancode};
    pub use crate::{
        collect_events, events_view, push_event, EventCollection, EventCursor, EventView,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::testing;
    use crate::raw::event_type;
    use std::thread;

    #[test]
    fn test_collect_events_drains_system_queue() {
        let _guard = testing::exclusive();
        push_event(RawEvent::quit(1)).unwrap();
        push_event(RawEvent::with_kind(0x7777, 2)).unwrap();
        push_event(RawEvent::text_input(3, 1, "hi")).unwrap();

        let events = collect_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_quit());
        match events[1] {
            Event::TextInput(text) => assert_eq!(text.text, "hi"),
            other => panic!("expected text input, got {other:?}"),
        }
        assert!(!has_events());
        assert!(collect_events().is_empty());
    }

    #[test]
    fn test_events_view_over_system_queue() {
        let _guard = testing::exclusive();
        push_event(RawEvent::quit(1)).unwrap();
        push_event(RawEvent::quit(2)).unwrap();

        let view = events_view();
        let cursor = view.begin();
        assert_eq!(cursor.get().map(Event::timestamp), Some(1));
        assert_eq!(SystemQueue::len(), 1);
        assert_eq!(events_view().into_iter().count(), 1);
    }

    #[test]
    fn test_flush_helpers() {
        let _guard = testing::exclusive();
        push_event(RawEvent::quit(1)).unwrap();
        push_event(RawEvent::mouse_button(true, 2, 1, 1, 0, 0)).unwrap();
        assert_eq!(
            flush_events_range(event_type::MOUSE_MOTION..=event_type::MOUSE_WHEEL),
            1
        );
        assert_eq!(flush_events(), 1);
        assert!(!has_events());
    }

    #[test]
    fn test_wait_event_timeout_skips_unrecognized() {
        let _guard = testing::exclusive();
        push_event(RawEvent::with_kind(0x7777, 1)).unwrap();
        push_event(RawEvent::quit(2)).unwrap();
        let event = wait_event_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(event.timestamp(), 2);
    }

    #[test]
    fn test_wait_event_timeout_with_max_duration() {
        let _guard = testing::exclusive();
        push_event(RawEvent::quit(1)).unwrap();
        let event = wait_event_timeout(Duration::MAX).unwrap();
        assert!(event.is_quit());
        assert!(!has_events());
    }

    #[test]
    fn test_wait_event_timeout_expires() {
        let _guard = testing::exclusive();
        push_event(RawEvent::with_kind(0x7777, 1)).unwrap();
        assert!(wait_event_timeout(Duration::from_millis(20)).is_none());
        assert!(!has_events());
    }

    #[test]
    fn test_wait_event_blocks_until_push() {
        let _guard = testing::exclusive();
        let producer = thread::spawn(|| {
            thread::sleep(Duration::from_millis(20));
            push_event(RawEvent::with_kind(0x7777, 1)).unwrap();
            push_event(RawEvent::quit(2)).unwrap();
        });
        let event = wait_event();
        producer.join().unwrap();
        assert!(event.is_quit());
    }
}
