//! Render-thread automation for Legato.
//!
//! Provides the machinery that takes a timeline of
//! [`AutomationPoint`]s to a real-time render callback:
//!
//! - [`Timeline`] / [`TimelineHandle`] - immutable snapshots edited on the
//!   control thread and swapped atomically to the render thread
//! - [`RenderObserver`] - called once per render block, emits
//!   `(address, value, ramp_frames)` scheduling instructions
//! - [`AutomationRecorder`] - captures live parameter writes for merging
//!   back into the timeline
//! - [`ParameterAutomation`] - per-parameter session tying the above
//!   together
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use legato_automation::{AutomationPoint, ParameterAutomation};
//! use legato_core::{AutomationConfig, ParameterAddress, RenderWindow, ScheduleParameterFn};
//!
//! let schedule: ScheduleParameterFn = Arc::new(|_addr, _value, _frames| {
//!     // hand off to the host's parameter scheduler
//! });
//! let automation = ParameterAutomation::new(
//!     ParameterAddress(42),
//!     schedule,
//!     AutomationConfig::default(),
//! ).unwrap();
//!
//! // Sweep to 880 Hz over one second.
//! automation.set_points(vec![AutomationPoint::new(880.0, 0.0, 1.0)]);
//!
//! // The host invokes the observer once per render block.
//! let observer = automation.render_observer(0.0);
//! observer.observe(RenderWindow::new(0.0, 256));
//! ```
//!
//! # Re-exports
//!
//! The pure primitives from `audio-ramp` are re-exported here:
//! [`AutomationPoint`], [`evaluate()`], [`replace()`].

mod observer;
mod parameter;
mod recorder;
mod timeline;

pub use observer::RenderObserver;
pub use parameter::ParameterAutomation;
pub use recorder::AutomationRecorder;
pub use timeline::{Timeline, TimelineHandle};

pub use audio_ramp::{evaluate, replace, AutomationPoint};
