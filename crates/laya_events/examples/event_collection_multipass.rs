//! Event Collection Multipass
//!
//! Drain the queue once per frame and walk the result twice: first to react
//! to quit requests, then to log what arrived.
//!
//! Run with: cargo run -p laya_events --example event_collection_multipass

use laya_events::prelude::*;
use laya_events::raw::{event_type, RawEvent};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let frames: [&[RawEvent]; 3] = [
        &[
            RawEvent::window(event_type::WINDOW_SHOWN, 1, 1, 0, 0),
            RawEvent::window(event_type::WINDOW_FOCUS_GAINED, 2, 1, 0, 0),
        ],
        &[
            RawEvent::mouse_button(true, 3, 1, 1, 10, 10),
            RawEvent::mouse_button(false, 4, 1, 1, 10, 10),
            RawEvent::with_kind(event_type::USER, 5),
        ],
        &[RawEvent::key(true, 6, 1, Scancode::ESCAPE.0, Keycode::ESCAPE.0)],
    ];

    let mut running = true;
    for (frame, records) in frames.iter().enumerate() {
        if !running {
            break;
        }
        for raw in records.iter() {
            push_event(*raw)?;
        }

        let events = collect_events();

        // Pass 1: quit or escape
        for event in &events {
            match event {
                Event::Quit(_) => running = false,
                Event::Key(key) if key.state.is_pressed() && key.scancode == Scancode::ESCAPE => {
                    running = false
                }
                _ => {}
            }
        }

        // Pass 2: log everything
        if !events.is_empty() {
            tracing::info!(frame, "Processed {} event(s)", events.len());
            for (index, event) in events.iter().enumerate() {
                tracing::info!("  [{}] {:?}", index, event.kind());
            }
        }
    }

    Ok(())
}
