//! Timeline window replacement — re-record a sub-range without disturbing
//! the rest.

use crate::point::AutomationPoint;

/// Ramp length given to replacement points, in seconds.
///
/// Recorded observations become immediate but click-free moves.
pub const RECORD_RAMP_DURATION: f64 = 0.01;

/// Replaces the half-open window `[start_time, stop_time)` of a sorted
/// timeline with sparse `(time, value)` observations.
///
/// Existing points whose start lies outside the window are preserved
/// unchanged; points starting inside it are dropped. Each observation
/// becomes a linear point with a [`RECORD_RAMP_DURATION`] ramp, merged in
/// time order with the preserved points. An empty `new_points` deletes the
/// window's contents outright.
///
/// The output is always sorted by start time with no two points sharing a
/// start time; when an observation lands exactly on a preserved point's
/// start, the observation wins.
pub fn replace(
    points: &[AutomationPoint],
    new_points: &[(f64, f32)],
    start_time: f64,
    stop_time: f64,
) -> Vec<AutomationPoint> {
    replace_with_ramp(points, new_points, start_time, stop_time, RECORD_RAMP_DURATION)
}

/// [`replace`] with an explicit ramp length for the inserted points.
pub fn replace_with_ramp(
    points: &[AutomationPoint],
    new_points: &[(f64, f32)],
    start_time: f64,
    stop_time: f64,
    ramp_duration: f64,
) -> Vec<AutomationPoint> {
    let mut replacements: Vec<AutomationPoint> = new_points
        .iter()
        .map(|&(time, value)| AutomationPoint::new(value, time, ramp_duration))
        .collect();
    // Observations usually arrive in time order already; sort is stable so
    // later writes at the same time stay later, and of those the later one
    // wins.
    replacements.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    replacements.dedup_by(|later, kept| {
        if later.start_time == kept.start_time {
            *kept = *later;
            true
        } else {
            false
        }
    });

    let mut out = Vec::with_capacity(points.len() + replacements.len());
    let mut pending = replacements.as_slice();

    for point in points {
        if point.start_time >= start_time && point.start_time < stop_time {
            continue;
        }

        while let Some((next, rest)) = pending.split_first() {
            if next.start_time < point.start_time {
                out.push(*next);
                pending = rest;
            } else {
                break;
            }
        }

        // An observation at exactly a preserved point's start wins.
        if let Some((next, rest)) = pending.split_first() {
            if next.start_time == point.start_time {
                out.push(*next);
                pending = rest;
                continue;
            }
        }

        out.push(*point);
    }

    out.extend_from_slice(pending);
    out
}
