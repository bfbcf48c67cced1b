//! Render-time observer — emits scheduling instructions once per block.

use std::sync::Arc;

use arc_swap::ArcSwap;

use audio_ramp::AutomationPoint;
use legato_core::{ParameterAddress, RenderWindow, ScheduleParameterFn};

use crate::timeline::Timeline;

/// Per-block automation scheduler for one parameter.
///
/// Invoked by the host once per render block with the current
/// [`RenderWindow`]. For each point the block touches it calls the schedule
/// callback with `(address, target_value, ramp_frames)`, in ascending time
/// order:
///
/// - points whose ramp already finished collapse to a single call carrying
///   the latest final value with zero frames, so starting mid-timeline
///   still lands on the right value without replaying ramps
/// - a ramp the block enters partway through is scheduled over its
///   remaining duration only, never restarted
/// - points starting inside the block are scheduled over their full ramp
/// - points starting at or after the block's end produce no call
///
/// # RT safety
///
/// `observe` is called on the render thread: one lock-free snapshot load,
/// a bounded scan, no allocation, no blocking, no panics. Timeline edits
/// happen elsewhere and arrive as whole-snapshot swaps; a call in flight
/// simply finishes with the snapshot it loaded.
pub struct RenderObserver {
    address: ParameterAddress,
    schedule: ScheduleParameterFn,
    sample_rate: f64,
    /// Transport seconds corresponding to sample time zero.
    start_offset: f64,
    timeline: Arc<ArcSwap<Timeline>>,
}

impl RenderObserver {
    pub fn new(
        address: ParameterAddress,
        schedule: ScheduleParameterFn,
        sample_rate: f64,
        start_offset: f64,
        timeline: Arc<ArcSwap<Timeline>>,
    ) -> Self {
        Self {
            address,
            schedule,
            sample_rate,
            start_offset,
            timeline,
        }
    }

    /// Observer over a fixed set of points (no further edits).
    pub fn from_points(
        address: ParameterAddress,
        schedule: ScheduleParameterFn,
        sample_rate: f64,
        start_offset: f64,
        points: Vec<AutomationPoint>,
    ) -> Self {
        let timeline = Arc::new(ArcSwap::from_pointee(Timeline::from_points(points)));
        Self::new(address, schedule, sample_rate, start_offset, timeline)
    }

    /// Processes one render block.
    pub fn observe(&self, window: RenderWindow) {
        let snapshot = self.timeline.load();

        let block_start = self.start_offset + window.sample_time / self.sample_rate;
        let block_end = block_start + f64::from(window.frame_count) / self.sample_rate;

        // Final value of the most recent fully-elapsed point; emitted once,
        // just before the first live point (or at the end if none follow).
        let mut elapsed: Option<f32> = None;

        for point in snapshot.points() {
            if point.start_time >= block_end {
                break;
            }

            if point.start_time >= block_start {
                // Starts inside this block: full ramp.
                self.flush_elapsed(&mut elapsed);
                self.emit(point.target_value, point.ramp_duration);
            } else if point.end_time() <= block_start {
                elapsed = Some(point.target_value);
            } else {
                // Entered mid-ramp: resume over what is left.
                self.flush_elapsed(&mut elapsed);
                self.emit(point.target_value, point.end_time() - block_start);
            }
        }

        self.flush_elapsed(&mut elapsed);
    }

    /// Wraps the observer as the plain callback a host render pipeline
    /// consumes.
    pub fn into_callback(self) -> impl Fn(RenderWindow) + Send + Sync {
        move |window| self.observe(window)
    }

    #[inline]
    fn flush_elapsed(&self, elapsed: &mut Option<f32>) {
        if let Some(value) = elapsed.take() {
            (self.schedule)(self.address, value, 0);
        }
    }

    #[inline]
    fn emit(&self, value: f32, duration_secs: f64) {
        let frames = (duration_secs * self.sample_rate).round().max(0.0) as u32;
        (self.schedule)(self.address, value, frames);
    }
}
