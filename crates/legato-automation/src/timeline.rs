//! Timeline snapshots and the editor/render-thread handoff.
//!
//! # Architecture
//!
//! ```text
//! Control thread                     Render thread
//!     │                                   │
//!     ▼                                   ▼
//! ┌────────────────┐              ┌────────────────┐
//! │ TimelineHandle │──ArcSwap────▶│ Timeline       │
//! │   (Mutex)      │              │  (immutable)   │
//! │ - points[]     │              │ - points()     │
//! │ - commit()     │              │ - value_at()   │
//! └────────────────┘              └────────────────┘
//! ```
//!
//! # RT safety
//!
//! The render thread reads through a lock-free `ArcSwap` load and keeps the
//! snapshot it loaded for the duration of one render call. Edits always
//! build a complete new [`Timeline`] and swap it in whole; a snapshot is
//! never mutated after publication, so a swap racing an in-flight render
//! call is harmless.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use audio_ramp::{curve, evaluate, replace_with_ramp, AutomationPoint, RECORD_RAMP_DURATION};
use legato_core::{Error, Result};

/// Immutable, sorted snapshot of one parameter's automation.
#[derive(Debug, Clone)]
pub struct Timeline {
    points: Arc<[AutomationPoint]>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            points: Vec::new().into(),
        }
    }
}

impl Timeline {
    /// Builds a snapshot, normalizing the input: points are sorted by start
    /// time and, when two share a start time, the later-added one wins.
    pub fn from_points(points: Vec<AutomationPoint>) -> Self {
        let mut points = points;
        points.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        points.dedup_by(|later, kept| {
            if later.start_time == kept.start_time {
                *kept = *later;
                true
            } else {
                false
            }
        });
        Self {
            points: points.into(),
        }
    }

    /// Strict constructor: the input must already be sorted with unique
    /// start times.
    pub fn try_from_points(points: Vec<AutomationPoint>) -> Result<Self> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].start_time < pair[0].start_time {
                return Err(Error::UnsortedTimeline {
                    index: i + 1,
                    time: pair[1].start_time,
                    previous: pair[0].start_time,
                });
            }
            if pair[1].start_time == pair[0].start_time {
                return Err(Error::DuplicatePointTime(pair[1].start_time));
            }
        }
        Ok(Self {
            points: points.into(),
        })
    }

    #[inline]
    pub fn points(&self) -> &[AutomationPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shaped value of the timeline at `time`, for display or offline
    /// baking. `initial_value` is the parameter's value before the first
    /// point.
    pub fn value_at(&self, initial_value: f32, time: f64) -> f32 {
        let mut current = initial_value;
        for point in self.points.iter() {
            if point.start_time > time {
                break;
            }
            if point.ramp_duration == 0.0 || time >= point.end_time() {
                current = point.target_value;
                continue;
            }
            let t = (time - point.start_time) / point.ramp_duration;
            return curve::ramp_value(
                current,
                point.target_value,
                t,
                point.ramp_taper,
                point.ramp_skew,
            );
        }
        current
    }

    /// Flattened copy with only linear segments, see [`audio_ramp::evaluate()`].
    pub fn flattened(&self, initial_value: f32, resolution: f64) -> Timeline {
        Timeline {
            points: evaluate(initial_value, &self.points, resolution).into(),
        }
    }
}

/// Editable timeline published to the render thread as immutable snapshots.
///
/// All mutating methods take the edit lock, rebuild the snapshot, and
/// commit it atomically; the lock is never visible to the render thread.
#[derive(Debug)]
pub struct TimelineHandle {
    editor: Mutex<Vec<AutomationPoint>>,
    snapshot: Arc<ArcSwap<Timeline>>,
}

impl TimelineHandle {
    pub fn new() -> Self {
        Self {
            editor: Mutex::new(Vec::new()),
            snapshot: Arc::new(ArcSwap::from_pointee(Timeline::default())),
        }
    }

    pub fn with_points(points: Vec<AutomationPoint>) -> Self {
        let handle = Self::new();
        handle.set_points(points);
        handle
    }

    /// Shared snapshot cell for a [`RenderObserver`](crate::RenderObserver).
    pub fn snapshot_arc(&self) -> Arc<ArcSwap<Timeline>> {
        self.snapshot.clone()
    }

    /// Lock-free read of the current snapshot.
    #[inline]
    pub fn load(&self) -> arc_swap::Guard<Arc<Timeline>> {
        self.snapshot.load()
    }

    /// Copy of the edit-side points.
    pub fn points(&self) -> Vec<AutomationPoint> {
        self.editor.lock().clone()
    }

    /// Replaces the whole timeline.
    pub fn set_points(&self, points: Vec<AutomationPoint>) {
        let mut editor = self.editor.lock();
        *editor = points;
        self.commit(&editor);
    }

    /// Inserts one point, replacing any existing point at the same time.
    pub fn add_point(&self, point: AutomationPoint) {
        let mut editor = self.editor.lock();
        match editor.binary_search_by(|p| p.start_time.total_cmp(&point.start_time)) {
            Ok(idx) => editor[idx] = point,
            Err(idx) => editor.insert(idx, point),
        }
        self.commit(&editor);
    }

    /// Removes every point.
    pub fn clear(&self) {
        let mut editor = self.editor.lock();
        editor.clear();
        self.commit(&editor);
    }

    /// Replaces the `[start_time, stop_time)` window with sparse
    /// observations, see [`audio_ramp::replace()`].
    pub fn replace_range(&self, new_points: &[(f64, f32)], start_time: f64, stop_time: f64) {
        self.replace_range_with_ramp(new_points, start_time, stop_time, RECORD_RAMP_DURATION);
    }

    /// [`replace_range`](Self::replace_range) with an explicit ramp length
    /// for the inserted points.
    pub fn replace_range_with_ramp(
        &self,
        new_points: &[(f64, f32)],
        start_time: f64,
        stop_time: f64,
        ramp_duration: f64,
    ) {
        let mut editor = self.editor.lock();
        *editor = replace_with_ramp(&editor, new_points, start_time, stop_time, ramp_duration);
        self.commit(&editor);
    }

    fn commit(&self, points: &[AutomationPoint]) {
        self.snapshot
            .store(Arc::new(Timeline::from_points(points.to_vec())));
        tracing::debug!(points = points.len(), "committed automation timeline");
    }
}

impl Default for TimelineHandle {
    fn default() -> Self {
        Self::new()
    }
}
