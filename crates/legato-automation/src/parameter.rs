//! Per-parameter automation session.

use std::sync::Arc;

use audio_ramp::AutomationPoint;
use legato_core::{
    AtomicFloat, AutomationConfig, ParameterAddress, Result, ScheduleParameterFn,
};

use crate::{AutomationRecorder, RenderObserver, TimelineHandle};

/// Owns the automation state for one parameter: the editable timeline, the
/// recording hook, and the schedule callback injected by the host.
///
/// Edits happen on the control thread; the render thread only ever sees the
/// observers handed out by [`render_observer`](Self::render_observer).
pub struct ParameterAutomation {
    address: ParameterAddress,
    schedule: ScheduleParameterFn,
    config: AutomationConfig,
    timeline: TimelineHandle,
    recorder: AutomationRecorder,
    last_value: AtomicFloat,
}

impl ParameterAutomation {
    pub fn new(
        address: ParameterAddress,
        schedule: ScheduleParameterFn,
        config: AutomationConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            address,
            schedule,
            config,
            timeline: TimelineHandle::new(),
            recorder: AutomationRecorder::new(),
            last_value: AtomicFloat::new(0.0),
        })
    }

    #[inline]
    pub fn address(&self) -> ParameterAddress {
        self.address
    }

    pub fn timeline(&self) -> &TimelineHandle {
        &self.timeline
    }

    pub fn points(&self) -> Vec<AutomationPoint> {
        self.timeline.points()
    }

    /// Replaces the whole timeline.
    pub fn set_points(&self, points: Vec<AutomationPoint>) {
        self.timeline.set_points(points);
    }

    /// Inserts one point, replacing any existing point at the same time.
    pub fn add_point(&self, point: AutomationPoint) {
        self.timeline.add_point(point);
    }

    /// Clears all automation for this parameter.
    pub fn clear(&self) {
        self.timeline.clear();
    }

    /// Re-records the `[start_time, stop_time)` window from sparse
    /// observations, leaving the rest of the timeline untouched.
    pub fn replace_range(&self, new_points: &[(f64, f32)], start_time: f64, stop_time: f64) {
        self.timeline.replace_range_with_ramp(
            new_points,
            start_time,
            stop_time,
            self.config.record_ramp_duration,
        );
    }

    /// Live parameter write: schedules an immediate move and feeds the
    /// recorder when armed. `time` is the current transport time in
    /// seconds.
    pub fn set_value(&self, time: f64, value: f32) {
        self.last_value.set(value);
        (self.schedule)(self.address, value, 0);
        self.recorder.push(time, value);
    }

    /// Last value passed to [`set_value`](Self::set_value).
    pub fn last_value(&self) -> f32 {
        self.last_value.get()
    }

    /// Arms the recorder; live writes from `start_time` on are captured.
    pub fn start_recording(&self, start_time: f64) {
        self.recorder.begin(start_time);
    }

    /// Disarms the recorder and merges the captured writes into the
    /// timeline over `[recording start, stop_time)`. A no-op when the
    /// recorder was not armed.
    pub fn stop_recording(&self, stop_time: f64) {
        if let Some((start_time, observations)) = self.recorder.stop() {
            self.timeline.replace_range_with_ramp(
                &observations,
                start_time,
                stop_time,
                self.config.record_ramp_duration,
            );
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Observer for the host's render pipeline. `start_offset` is the
    /// transport time, in seconds, corresponding to sample time zero.
    pub fn render_observer(&self, start_offset: f64) -> RenderObserver {
        RenderObserver::new(
            self.address,
            Arc::clone(&self.schedule),
            self.config.sample_rate,
            start_offset,
            self.timeline.snapshot_arc(),
        )
    }
}
