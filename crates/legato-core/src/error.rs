//! Error types for legato-core.

use thiserror::Error;

/// Error type for legato operations.
///
/// Errors only arise on the control thread (construction, validation,
/// strict timeline checks). The render path is infallible: malformed input
/// there simply produces no scheduled events.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid sample rate: {0}. Must be between 8000.0 and 384000.0 Hz")]
    InvalidSampleRate(f64),

    #[error("Timeline not sorted at index {index}: point starts at {time} but previous point starts at {previous}")]
    UnsortedTimeline {
        index: usize,
        time: f64,
        previous: f64,
    },

    #[error("Two automation points share start time {0}")]
    DuplicatePointTime(f64),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
