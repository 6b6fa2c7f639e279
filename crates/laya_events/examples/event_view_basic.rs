//! Event View Basic
//!
//! Consume events one at a time with the lazy view.
//!
//! Run with: cargo run -p laya_events --example event_view_basic

use laya_events::prelude::*;
use laya_events::raw::{event_type, RawEvent};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    push_event(RawEvent::window(event_type::WINDOW_SHOWN, 1, 1, 0, 0))?;
    push_event(RawEvent::key(true, 2, 1, Scancode::A.0, Keycode::from_char('a').0))?;
    push_event(RawEvent::text_input(3, 1, "a"))?;
    push_event(RawEvent::mouse_button(true, 4, 1, 1, 120, 80))?;
    push_event(RawEvent::quit(5))?;

    let mut frames = 0;
    let mut running = true;
    while running {
        frames += 1;
        for event in events_view() {
            tracing::info!(frame = frames, kind = ?event.kind(), timestamp = event.timestamp(), "event");
            if event.is_quit() {
                running = false;
                break;
            }
        }
    }

    tracing::info!("Event view demo finished after {} frame(s)", frames);
    Ok(())
}
