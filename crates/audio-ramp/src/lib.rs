//! # audio-ramp
//!
//! Framework-agnostic automation ramp primitives.
//!
//! This crate provides:
//! - **Automation points** - shaped ramp segments with taper/skew
//! - **Curve flattening** - [`evaluate()`] turns curved ramps into
//!   piecewise-linear segments at a chosen time resolution
//! - **Timeline editing** - [`replace()`] re-records a time window of a
//!   sorted timeline without disturbing the rest
//! - **Serialization support** - points derive serde
//!
//! Everything here is a pure function over plain values; the real-time
//! machinery lives in `legato-automation`.
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_ramp::{evaluate, AutomationPoint};
//!
//! // A curved sweep: 0 -> 1 over one second, eased by taper/skew
//! let points = [AutomationPoint::with_shape(1.0, 0.0, 1.0, 0.5, 0.1)];
//!
//! // Flatten to straight-line segments no longer than 100 ms each,
//! // e.g. for display or for baking into a host that only ramps linearly
//! let segments = evaluate(0.0, &points, 0.1);
//! assert_eq!(segments.len(), 10);
//! assert_eq!(segments.last().unwrap().target_value, 1.0);
//! ```
//!
//! ## Shape parameters
//!
//! - **Taper** - exponent applied to normalized progress; 1.0 is linear,
//!   below 1.0 rises fast then flattens, above 1.0 starts slow
//! - **Skew** - monotonic warp applied before the taper; 0.0 is the
//!   identity, larger values bend the curve harder

pub mod curve;
pub mod evaluate;
pub mod point;
pub mod replace;

pub use curve::{ramp_value, shape, LINEAR_EPSILON};
pub use evaluate::evaluate;
pub use point::AutomationPoint;
pub use replace::{replace, replace_with_ramp, RECORD_RAMP_DURATION};

/// Prelude for common imports
pub mod prelude {
    pub use crate::curve::{ramp_value, shape};
    pub use crate::evaluate::evaluate;
    pub use crate::point::AutomationPoint;
    pub use crate::replace::{replace, replace_with_ramp};
}
