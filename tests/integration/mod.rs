//! Integration test modules for Legato
//!
//! - playback: observer behavior over simulated render loops
//! - recording: record/merge workflows across threads
//! - editing: curve flattening and window replacement end to end

pub mod editing;
pub mod playback;
