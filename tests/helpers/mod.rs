//! Shared helpers for Legato integration tests.

use std::sync::{Arc, Mutex};

use legato::prelude::*;

/// Schedule callback that collects every emitted event.
pub fn collecting_schedule() -> (ScheduleParameterFn, Arc<Mutex<Vec<AutomationEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let schedule: ScheduleParameterFn = Arc::new(move |address, value, ramp_frames| {
        sink.lock().unwrap().push(AutomationEvent {
            address,
            value,
            ramp_frames,
        });
    });
    (schedule, events)
}

/// Automation session for address 42 at the default sample rate, with a
/// collecting scheduler.
pub fn test_session() -> (ParameterAutomation, Arc<Mutex<Vec<AutomationEvent>>>) {
    let (schedule, events) = collecting_schedule();
    let automation = ParameterAutomation::new(
        ParameterAddress(42),
        schedule,
        AutomationConfig::default(),
    )
    .expect("default config is valid");
    (automation, events)
}
