//! Quit and Escape
//!
//! A main loop that waits for input with a frame timeout and exits on a quit
//! request or the Escape key. Input arrives from a separate producer thread.
//!
//! Run with: cargo run -p laya_events --example quit_and_escape

use laya_events::prelude::*;
use laya_events::raw::RawEvent;
use laya_events::wait_event_timeout;
use std::thread;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let producer = thread::spawn(|| -> Result<()> {
        for (ts, (scancode, ch)) in [(Scancode::H, 'h'), (Scancode::I, 'i')].into_iter().enumerate() {
            thread::sleep(FRAME * 3);
            let keycode = Keycode::from_char(ch);
            push_event(RawEvent::key(true, ts as u64, 1, scancode.0, keycode.0))?;
        }
        thread::sleep(FRAME * 3);
        push_event(RawEvent::key(true, 10, 1, Scancode::ESCAPE.0, Keycode::ESCAPE.0))
    });

    tracing::info!("Waiting for quit or ESC");

    let mut idle_frames = 0;
    loop {
        let Some(event) = wait_event_timeout(FRAME) else {
            idle_frames += 1;
            continue;
        };
        match event {
            Event::Quit(_) => {
                tracing::info!("Quit event received");
                break;
            }
            Event::Key(key) if key.state.is_pressed() && key.scancode == Scancode::ESCAPE => {
                tracing::info!("ESC pressed");
                break;
            }
            Event::Key(key) => tracing::info!("key {:?}", key.keycode.as_char()),
            _ => {}
        }
    }

    tracing::info!(idle_frames, "Main loop finished");

    match producer.join() {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("input thread panicked");
            Ok(())
        }
    }
}
