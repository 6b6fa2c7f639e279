//! The system event queue
//!
//! [`SystemQueue`] is the process-wide queue the native library drains
//! events from. Producers (the platform layer, application code posting
//! custom records, tests) push [`RawEvent`]s; consumers poll them through
//! [`EventSource`].
//!
//! The queue is bounded like the native one. Pushing into a full queue fails
//! with [`EventError::QueueFull`] rather than dropping older records.

use crate::error::{EventError, Result};
use crate::raw::RawEvent;
use crate::source::EventSource;
use parking_lot::{const_mutex, Condvar, Mutex};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// Native limit on pending events
pub const DEFAULT_MAX_QUEUED: usize = 65_535;

struct QueueState {
    records: VecDeque<RawEvent>,
    capacity: usize,
}

static QUEUE: Mutex<QueueState> = const_mutex(QueueState {
    records: VecDeque::new(),
    capacity: DEFAULT_MAX_QUEUED,
});

/// Signalled on every successful push
static ARRIVED: Condvar = Condvar::new();

/// Configuration for the system queue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    /// Maximum number of pending records
    pub max_queued: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl QueueConfig {
    /// The native library's limit
    pub fn standard() -> Self {
        Self {
            max_queued: DEFAULT_MAX_QUEUED,
        }
    }

    /// Set the maximum number of pending records
    pub fn with_max_queued(mut self, max: usize) -> Self {
        self.max_queued = max;
        self
    }

    /// Parse from TOML
    ///
    /// ```
    /// use laya_events::QueueConfig;
    ///
    /// let config = QueueConfig::from_toml_str("max_queued = 256").unwrap();
    /// assert_eq!(config.max_queued, 256);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EventError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_queued == 0 {
            return Err(EventError::InvalidConfig(
                "max_queued must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The process-wide native event queue
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemQueue;

impl SystemQueue {
    /// Apply a configuration
    ///
    /// Lowering the capacity below the current length keeps the pending
    /// records; further pushes fail until the queue drains.
    pub fn configure(config: &QueueConfig) -> Result<()> {
        config.validate()?;
        QUEUE.lock().capacity = config.max_queued;
        tracing::debug!(max_queued = config.max_queued, "event queue configured");
        Ok(())
    }

    /// Current capacity
    pub fn capacity() -> usize {
        QUEUE.lock().capacity
    }

    /// Append a record
    pub fn push(raw: RawEvent) -> Result<()> {
        let mut state = QUEUE.lock();
        if state.records.len() >= state.capacity {
            tracing::warn!(
                kind = raw.kind(),
                capacity = state.capacity,
                "event queue full, dropping pushed record"
            );
            return Err(EventError::QueueFull {
                capacity: state.capacity,
            });
        }
        state.records.push_back(raw);
        drop(state);
        ARRIVED.notify_one();
        Ok(())
    }

    /// Block until a record is available or `timeout` elapses
    ///
    /// `None` waits indefinitely, as does a timeout too large to represent
    /// as a deadline.
    pub fn wait_next(timeout: Option<Duration>) -> Option<RawEvent> {
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
        let mut state = QUEUE.lock();
        loop {
            if let Some(raw) = state.records.pop_front() {
                return Some(raw);
            }
            match deadline {
                None => ARRIVED.wait(&mut state),
                Some(deadline) => {
                    if ARRIVED.wait_until(&mut state, deadline).timed_out() {
                        return state.records.pop_front();
                    }
                }
            }
        }
    }

    /// Check for pending records without removing any
    pub fn has_events() -> bool {
        !QUEUE.lock().records.is_empty()
    }

    /// Number of pending records
    pub fn len() -> usize {
        QUEUE.lock().records.len()
    }

    /// Discard every pending record, returning how many were dropped
    pub fn flush() -> usize {
        let mut state = QUEUE.lock();
        let dropped = state.records.len();
        state.records.clear();
        dropped
    }

    /// Discard pending records whose tag lies in `tags`
    pub fn flush_range(tags: RangeInclusive<u32>) -> usize {
        let mut state = QUEUE.lock();
        let before = state.records.len();
        state.records.retain(|raw| !tags.contains(&raw.kind()));
        before - state.records.len()
    }
}

impl EventSource for SystemQueue {
    fn poll_next() -> Option<RawEvent> {
        QUEUE.lock().records.pop_front()
    }
}
