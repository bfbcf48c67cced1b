//! Automation engine configuration.

use crate::{Error, Result};

/// Configuration shared by automation sessions.
#[derive(Debug, Clone)]
pub struct AutomationConfig {
    /// Host sample rate in Hz.
    pub sample_rate: f64,
    /// Ramp length given to points recorded from live writes, in seconds.
    ///
    /// Short enough to track the writer's hand, long enough to avoid clicks.
    pub record_ramp_duration: f64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            record_ramp_duration: 0.01,
        }
    }
}

impl AutomationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate < 8000.0 || self.sample_rate > 384000.0 {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if !self.record_ramp_duration.is_finite() || self.record_ramp_duration < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "record_ramp_duration {} must be a non-negative number of seconds",
                self.record_ramp_duration
            )));
        }
        Ok(())
    }
}
