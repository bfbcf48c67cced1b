//! Boundary types between the automation engine and a host render pipeline.
//!
//! The engine never talks to an audio unit directly. It receives plain
//! numbers ([`RenderWindow`]) from the host's render callback and hands
//! plain numbers back through a [`ScheduleParameterFn`].

use std::sync::Arc;

/// Identifies one automatable parameter within a host audio unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterAddress(pub u64);

impl From<u64> for ParameterAddress {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The span of audio about to be produced by one render call.
///
/// Covers the half-open interval `[sample_time, sample_time + frame_count)`
/// in frames. Transient: built by the host per callback, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderWindow {
    /// Absolute sample time of the first frame in the block.
    pub sample_time: f64,
    /// Number of frames in the block.
    pub frame_count: u32,
}

impl RenderWindow {
    pub fn new(sample_time: f64, frame_count: u32) -> Self {
        Self {
            sample_time,
            frame_count,
        }
    }

    /// Start of the block in seconds at the given sample rate.
    #[inline]
    pub fn start_secs(&self, sample_rate: f64) -> f64 {
        self.sample_time / sample_rate
    }

    /// Length of the block in seconds at the given sample rate.
    #[inline]
    pub fn duration_secs(&self, sample_rate: f64) -> f64 {
        f64::from(self.frame_count) / sample_rate
    }
}

/// One scheduling instruction emitted by the render-time observer.
///
/// The host should move the parameter at `address` to `value` over
/// `ramp_frames` frames; zero frames means set it immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutomationEvent {
    pub address: ParameterAddress,
    pub value: f32,
    pub ramp_frames: u32,
}

/// Callback through which the observer hands events to the host scheduler.
///
/// Arguments are `(address, target_value, ramp_frames)`. Invoked on the
/// render thread, so implementations must be RT-safe. Injected at
/// construction rather than read from ambient state.
pub type ScheduleParameterFn = Arc<dyn Fn(ParameterAddress, f32, u32) + Send + Sync>;
