//! Playback integration tests
//!
//! Drives a render observer through simulated block-by-block render loops
//! and checks the emitted scheduling instructions.

use legato::prelude::*;

use crate::helpers::test_session;

const SR: f64 = 44100.0;
const BLOCK: u32 = 256;

/// A ramp is scheduled in full at its first block and only ever shrinks on
/// later blocks; it is never restarted from its original length.
#[test]
fn test_ramp_resumes_across_blocks() {
    let (automation, events) = test_session();
    automation.set_points(vec![AutomationPoint::new(880.0, 0.0, 0.01)]);

    let observer = automation.render_observer(0.0);

    // ~0.02 s of audio in 256-frame blocks.
    let mut sample_time = 0.0;
    for _ in 0..4 {
        observer.observe(RenderWindow::new(sample_time, BLOCK));
        sample_time += f64::from(BLOCK);
    }

    let events = events.lock().unwrap();
    // Block 0 schedules the full ramp; block 1 resumes the remainder;
    // later blocks re-assert the final value with zero frames (the
    // observer is stateless across calls).
    assert!(events.len() >= 3);
    assert_eq!(events[0].value, 880.0);
    assert_eq!(events[0].ramp_frames, 441);
    // Every later event still targets the final value, never restarts.
    for event in events.iter().skip(1) {
        assert_eq!(event.value, 880.0);
        assert!(event.ramp_frames < 441);
    }
}

/// Starting playback mid-timeline lands on the value automation dictates.
#[test]
fn test_late_start_lands_on_terminal_values() {
    let (automation, events) = test_session();
    automation.set_points(vec![
        AutomationPoint::new(880.0, 0.0, 0.1),
        AutomationPoint::new(440.0, 0.1, 0.1),
    ]);

    let observer = automation.render_observer(0.0);
    // First call a full second in: both ramps are long gone.
    observer.observe(RenderWindow::new(SR, BLOCK));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, 440.0);
    assert_eq!(events[0].ramp_frames, 0);
}

/// A block that covers no point produces no scheduling call at all.
#[test]
fn test_silent_window_between_points() {
    let (automation, events) = test_session();
    automation.set_points(vec![AutomationPoint::new(880.0, 10.0, 0.5)]);

    let observer = automation.render_observer(0.0);
    observer.observe(RenderWindow::new(0.0, BLOCK));
    observer.observe(RenderWindow::new(SR, BLOCK));

    assert!(events.lock().unwrap().is_empty());
}

/// The same timeline observed with a start offset fires earlier in sample
/// time by exactly that offset.
#[test]
fn test_start_offset() {
    let (automation, events) = test_session();
    automation.set_points(vec![AutomationPoint::new(660.0, 2.0, 1.0)]);

    // Hosts consume the observer as a plain render callback.
    let callback = automation.render_observer(2.0).into_callback();
    callback(RenderWindow::new(0.0, BLOCK));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, 660.0);
    assert_eq!(events[0].ramp_frames, 44100);
}

/// Editing while a render loop runs: each block sees a complete snapshot,
/// and the next block picks up the new timeline.
#[test]
fn test_edit_between_blocks() {
    let (automation, events) = test_session();
    automation.set_points(vec![AutomationPoint::new(880.0, 1.0, 0.5)]);

    let observer = automation.render_observer(0.0);
    observer.observe(RenderWindow::new(0.0, BLOCK));
    assert!(events.lock().unwrap().is_empty());

    // Move the point onto the next block before it renders.
    automation.set_points(vec![AutomationPoint::new(880.0, 0.0, 0.5)]);
    observer.observe(RenderWindow::new(f64::from(BLOCK), BLOCK));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].value, 880.0);
    // Entered one block late: remaining duration only.
    assert_eq!(events[0].ramp_frames, 22050 - BLOCK);
}

/// Flattened curved automation plays back through the observer as a chain
/// of linear ramps that ends on the exact target.
#[test]
fn test_flattened_curve_playback() {
    let (automation, events) = test_session();

    let curved = [AutomationPoint::with_shape(1.0, 0.0, 0.02, 0.5, 0.1)];
    automation.set_points(evaluate(0.0, &curved, 0.005));

    let observer = automation.render_observer(0.0);
    let mut sample_time = 0.0;
    for _ in 0..8 {
        observer.observe(RenderWindow::new(sample_time, BLOCK));
        sample_time += f64::from(BLOCK);
    }

    let events = events.lock().unwrap();
    assert!(events.len() >= 4);
    assert_eq!(events.last().unwrap().value, 1.0);
}
