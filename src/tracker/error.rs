//! Error types for the fitness tracker.

use thiserror::Error;

/// Errors that can occur while recording activity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackerError {
    /// The activity name does not match any supported [`ActivityKind`](crate::tracker::ActivityKind).
    #[error("Unsupported activity type '{0}'")]
    UnsupportedActivity(String),

    /// The activity store rejected the write.
    #[error("Storage error: {0}")]
    Storage(String),
}
