//! # Legato - Parameter Automation Engine
//!
//! Sample-accurate parameter automation for real-time audio, built from
//! modular subsystems.
//!
//! ## Architecture
//!
//! Legato is an umbrella crate that coordinates:
//! - **legato-core** - runtime kernel types (render windows, scheduling
//!   callbacks, config, lock-free primitives, errors)
//! - **audio-ramp** - framework-agnostic ramp primitives (shaped points,
//!   curve flattening, timeline window replacement)
//! - **legato-automation** - render-thread machinery (timeline snapshots,
//!   render-time observer, recording)
//!
//! ## Quick Start
//!
//! ```
//! use legato::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), legato::Error> {
//! let schedule: ScheduleParameterFn = Arc::new(|_address, _value, _ramp_frames| {
//!     // hand (address, value, ramp_frames) to the host's scheduler
//! });
//!
//! let automation = ParameterAutomation::new(
//!     ParameterAddress(1),
//!     schedule,
//!     AutomationConfig::default(),
//! )?;
//!
//! // Curved sweep to 880 over two seconds.
//! automation.set_points(vec![
//!     AutomationPoint::with_shape(880.0, 0.0, 2.0, 0.5, 0.1),
//! ]);
//!
//! // Host render pipeline: one call per block.
//! let observer = automation.render_observer(0.0);
//! observer.observe(RenderWindow::new(0.0, 512));
//! # Ok(())
//! # }
//! ```

/// Re-export of legato-core for direct access
pub use legato_core as core;

// Core types
pub use legato_core::{
    AtomicDouble, AtomicFlag, AtomicFloat, AutomationConfig, AutomationEvent, Error,
    ParameterAddress, RenderWindow, Result, ScheduleParameterFn,
};

/// Re-export of audio-ramp for direct access
pub use audio_ramp as ramp;

// Ramp primitives
pub use audio_ramp::{evaluate, replace, AutomationPoint, RECORD_RAMP_DURATION};

/// Re-export of legato-automation for direct access
pub use legato_automation as automation;

// Automation machinery
pub use legato_automation::{
    AutomationRecorder, ParameterAutomation, RenderObserver, Timeline, TimelineHandle,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        evaluate, replace, AutomationConfig, AutomationEvent, AutomationPoint,
        AutomationRecorder, ParameterAddress, ParameterAutomation, RenderObserver, RenderWindow,
        ScheduleParameterFn, Timeline, TimelineHandle,
    };
}
