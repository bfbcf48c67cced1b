//! Core runtime types for the Legato automation engine.
//!
//! # Primary API
//!
//! - [`RenderWindow`] / [`AutomationEvent`] / [`ScheduleParameterFn`]: the
//!   boundary between the automation engine and a host render pipeline
//! - [`AutomationConfig`]: validated engine configuration
//! - [`AtomicFloat`] / [`AtomicDouble`] / [`AtomicFlag`]: lock-free values
//!   shared between the control thread and the render thread
//! - [`Error`] / [`Result`]: error type for the non-real-time surface
//!
//! Nothing in this crate allocates or blocks on the render path; errors are
//! only produced by construction and validation on the control thread.

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::AutomationConfig;

pub(crate) mod lockfree;
pub use lockfree::{AtomicDouble, AtomicFlag, AtomicFloat};

mod render;
pub use render::{AutomationEvent, ParameterAddress, RenderWindow, ScheduleParameterFn};
