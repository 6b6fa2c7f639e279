//! Window Event Data
//!
//! Read the payload of window events through the typed accessors.
//!
//! Run with: cargo run -p laya_events --example window_event_data

use laya_events::prelude::*;
use laya_events::raw::{event_type, RawEvent};

fn describe(window: &WindowEvent) {
    if let Some(pos) = window.position() {
        tracing::info!("{} {:?} to ({}, {})", window.window_id, window.kind, pos.x, pos.y);
    } else if let Some(size) = window.size() {
        tracing::info!(
            "{} {:?} to {}x{}",
            window.window_id,
            window.kind,
            size.width,
            size.height
        );
    } else if let Some(display_index) = window.display() {
        tracing::info!("{} moved to display {}", window.window_id, display_index.0);
    } else {
        tracing::info!("{} {:?}", window.window_id, window.kind);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let window = 1;
    push_event(RawEvent::window(event_type::WINDOW_SHOWN, 1, window, 0, 0))?;
    push_event(RawEvent::window(event_type::WINDOW_MOVED, 2, window, 100, 50))?;
    push_event(RawEvent::window(event_type::WINDOW_RESIZED, 3, window, 1280, 720))?;
    push_event(RawEvent::window(event_type::WINDOW_PIXEL_SIZE_CHANGED, 4, window, 2560, 1440))?;
    push_event(RawEvent::window(event_type::WINDOW_DISPLAY_CHANGED, 5, window, 1, 0))?;
    push_event(RawEvent::window(event_type::WINDOW_CLOSE_REQUESTED, 6, window, 0, 0))?;

    for event in events_view() {
        let Event::Window(window) = event else {
            continue;
        };
        describe(&window);
        if event.is_close_requested() {
            tracing::info!("Close requested, exiting");
            break;
        }
    }

    Ok(())
}
