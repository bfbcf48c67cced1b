//! Curve flattening — turns shaped ramps into piecewise-linear segments.

use crate::curve;
use crate::point::AutomationPoint;

/// Flattens a sorted timeline into straight-line segments no longer than
/// `resolution` seconds each.
///
/// `initial_value` is the parameter's value just before the first point;
/// each point's curve is evaluated from the running value left by the
/// previous point. Linear and zero-duration points pass through unchanged.
/// Curved points are subdivided into equal windows, each emitted as one
/// linear segment ending on the curve's value at the window boundary, and
/// the final segment lands exactly on the point's `target_value` with no
/// accumulated drift.
///
/// When the next point starts before a curved ramp finishes, the ramp is
/// cut off at that start time. Values are still computed against the
/// original duration, so the cut ramp ends partway toward its target.
///
/// `resolution` must be positive. A ramp shorter than `resolution` yields
/// exactly one segment spanning the whole ramp.
pub fn evaluate(
    initial_value: f32,
    points: &[AutomationPoint],
    resolution: f64,
) -> Vec<AutomationPoint> {
    debug_assert!(resolution > 0.0, "resolution must be positive");

    let mut out = Vec::new();
    let mut current = initial_value;

    for (i, point) in points.iter().enumerate() {
        if point.ramp_duration == 0.0 || point.is_linear() {
            out.push(*point);
            current = point.target_value;
            continue;
        }

        // A following point cuts the ramp short.
        let mut span = point.ramp_duration;
        if let Some(next) = points.get(i + 1) {
            let gap = next.start_time - point.start_time;
            if gap < span {
                span = gap;
            }
        }
        if span <= 0.0 {
            continue;
        }
        let cut = span < point.ramp_duration;

        let count = (span / resolution).ceil().max(1.0) as usize;
        let window = span / count as f64;

        for k in 1..=count {
            let value = if k == count && !cut {
                // Land on the target exactly rather than through the curve,
                // so float accumulation cannot drift the endpoint.
                point.target_value
            } else {
                let elapsed = if k == count { span } else { window * k as f64 };
                curve::ramp_value(
                    current,
                    point.target_value,
                    elapsed / point.ramp_duration,
                    point.ramp_taper,
                    point.ramp_skew,
                )
            };
            out.push(AutomationPoint::new(
                value,
                point.start_time + window * (k - 1) as f64,
                window,
            ));
        }

        if let Some(last) = out.last() {
            current = last.target_value;
        }
    }

    out
}
