//! Automation point — one shaped ramp segment.

use serde::{Deserialize, Serialize};

/// A single automation ramp segment.
///
/// Describes a move to `target_value` beginning at `start_time` seconds and
/// lasting `ramp_duration` seconds. `ramp_taper` and `ramp_skew` shape the
/// transition; taper 1.0 with skew 0.0 is a straight line. A zero duration
/// is an instantaneous step at `start_time`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AutomationPoint {
    /// Value the parameter ramps toward.
    pub target_value: f32,
    /// Absolute start time in seconds.
    pub start_time: f64,
    /// Seconds to reach `target_value`; 0 steps immediately.
    pub ramp_duration: f64,
    /// Shape exponent; 1.0 is linear.
    pub ramp_taper: f32,
    /// Shape bias; 0.0 is linear, larger values bend the curve harder.
    pub ramp_skew: f32,
}

impl AutomationPoint {
    /// A linear ramp segment.
    pub const fn new(target_value: f32, start_time: f64, ramp_duration: f64) -> Self {
        Self {
            target_value,
            start_time,
            ramp_duration,
            ramp_taper: 1.0,
            ramp_skew: 0.0,
        }
    }

    /// A shaped ramp segment.
    pub const fn with_shape(
        target_value: f32,
        start_time: f64,
        ramp_duration: f64,
        ramp_taper: f32,
        ramp_skew: f32,
    ) -> Self {
        Self {
            target_value,
            start_time,
            ramp_duration,
            ramp_taper,
            ramp_skew,
        }
    }

    /// An instantaneous step to `target_value` at `time`.
    pub const fn step(target_value: f32, time: f64) -> Self {
        Self::new(target_value, time, 0.0)
    }

    /// Time at which the ramp lands on `target_value`.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.ramp_duration
    }

    /// Whether the shape parameters describe a straight line.
    #[inline]
    pub fn is_linear(&self) -> bool {
        crate::curve::is_linear_shape(self.ramp_taper, self.ramp_skew)
    }
}

/// Compares two [`AutomationPoint`]s using epsilon-based floating-point
/// comparison on every field.
impl PartialEq for AutomationPoint {
    fn eq(&self, other: &Self) -> bool {
        (self.target_value - other.target_value).abs() < f32::EPSILON
            && (self.start_time - other.start_time).abs() < f64::EPSILON
            && (self.ramp_duration - other.ramp_duration).abs() < f64::EPSILON
            && (self.ramp_taper - other.ramp_taper).abs() < f32::EPSILON
            && (self.ramp_skew - other.ramp_skew).abs() < f32::EPSILON
    }
}
