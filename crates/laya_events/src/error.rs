//! Event layer error types

use thiserror::Error;

/// A native record whose tag has no typed counterpart
///
/// This is an expected outcome, not a failure: newer native versions add
/// event kinds this crate does not know. Polling skips such records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unrecognized native event type {tag:#x}")]
pub struct Unrecognized {
    /// The native type tag
    pub tag: u32,
}

/// Event layer errors
#[derive(Error, Debug)]
pub enum EventError {
    /// The system queue is at capacity; the record was not queued
    #[error("Event queue full: {capacity} events pending")]
    QueueFull {
        /// Configured capacity
        capacity: usize,
    },

    /// Invalid queue configuration
    #[error("Invalid event queue configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for event layer operations
pub type Result<T> = std::result::Result<T, EventError>;
