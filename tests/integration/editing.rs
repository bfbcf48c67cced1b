//! Editing integration tests
//!
//! Curve flattening and window replacement exercised through the umbrella
//! crate's public surface.

use approx::assert_relative_eq;
use legato::prelude::*;

/// Flattening a curved sweep and querying the timeline agree with each
/// other at every segment boundary.
#[test]
fn test_flattening_matches_timeline_query() {
    let curved = vec![AutomationPoint::with_shape(1.0, 0.0, 1.0, 0.5, 0.1)];
    let timeline = Timeline::from_points(curved.clone());

    let segments = evaluate(0.0, &curved, 0.1);
    assert_eq!(segments.len(), 10);

    for segment in &segments[..segments.len() - 1] {
        let boundary = segment.end_time();
        assert_relative_eq!(
            timeline.value_at(0.0, boundary),
            segment.target_value,
            epsilon = 1e-5
        );
    }
    assert_eq!(segments.last().unwrap().target_value, 1.0);
}

/// Replace, then flatten: the preserved shaped points still flatten from
/// the values the replacement ramps leave behind.
#[test]
fn test_replace_then_flatten() {
    let points = vec![
        AutomationPoint::new(0.0, 0.0, 0.1),
        AutomationPoint::with_shape(1.0, 1.0, 1.0, 0.5, 0.1),
    ];

    // Overwrite only the first tenth of a second.
    let merged = replace(&points, &[(0.05, 0.5)], 0.0, 0.5);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0], AutomationPoint::new(0.5, 0.05, 0.01));

    let flat = evaluate(0.0, &merged, 0.25);
    // First comes the replacement ramp, untouched; then four linear
    // segments for the curved point, rising from 0.5 toward 1.0.
    assert_eq!(flat.len(), 5);
    assert_eq!(flat[0], merged[0]);
    assert!(flat[1].target_value > 0.5);
    assert_eq!(flat.last().unwrap().target_value, 1.0);
}

/// The handle's whole edit surface keeps the published snapshot in sync.
#[test]
fn test_handle_edit_surface() {
    let handle = TimelineHandle::new();

    handle.add_point(AutomationPoint::new(1.0, 0.0, 0.5));
    handle.add_point(AutomationPoint::new(0.5, 2.0, 0.5));
    assert_eq!(handle.load().len(), 2);

    handle.replace_range(&[(1.0, 0.8)], 0.5, 2.5);
    let snapshot = handle.load();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.points()[1], AutomationPoint::new(0.8, 1.0, 0.01));

    handle.clear();
    assert!(handle.load().is_empty());
}

/// Malformed input is normalized on the way into a snapshot, and rejected
/// by the strict constructor.
#[test]
fn test_malformed_timelines() {
    let unsorted = vec![
        AutomationPoint::new(2.0, 1.0, 0.1),
        AutomationPoint::new(1.0, 0.0, 0.1),
        AutomationPoint::new(3.0, 1.0, 0.1),
    ];

    assert!(Timeline::try_from_points(unsorted.clone()).is_err());

    let normalized = Timeline::from_points(unsorted);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized.points()[0].start_time, 0.0);
    assert_eq!(normalized.points()[1].target_value, 3.0);
}
