//! Recording hook — captures live parameter writes for later merging.

use crossbeam_channel::{unbounded, Receiver, Sender};

use legato_core::{AtomicDouble, AtomicFlag};

/// Buffers `(time, value)` observations while armed.
///
/// Producers push from any thread, including the render thread, through a
/// lock-free channel. [`stop`](Self::stop) disarms and drains the buffer
/// for the timeline editor; arming again discards anything left over.
/// Writes while disarmed are dropped.
#[derive(Debug)]
pub struct AutomationRecorder {
    tx: Sender<(f64, f32)>,
    rx: Receiver<(f64, f32)>,
    armed: AtomicFlag,
    window_start: AtomicDouble,
}

impl AutomationRecorder {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            armed: AtomicFlag::new(false),
            window_start: AtomicDouble::new(0.0),
        }
    }

    /// Arms recording over a window starting at `start_time` seconds.
    pub fn begin(&self, start_time: f64) {
        while self.rx.try_recv().is_ok() {}
        self.window_start.set(start_time);
        self.armed.set(true);
        tracing::debug!(start_time, "automation recording armed");
    }

    /// Records one live write. No-op while disarmed.
    #[inline]
    pub fn push(&self, time: f64, value: f32) {
        if self.armed.get() {
            let _ = self.tx.send((time, value));
        }
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.armed.get()
    }

    /// Disarms and returns the window start plus the buffered observations,
    /// in write order. Returns `None` when the recorder was not armed, so a
    /// second stop cannot clobber anything.
    pub fn stop(&self) -> Option<(f64, Vec<(f64, f32)>)> {
        if !self.armed.swap(false) {
            return None;
        }
        let mut observations = Vec::new();
        while let Ok(pair) = self.rx.try_recv() {
            observations.push(pair);
        }
        tracing::debug!(
            count = observations.len(),
            "automation recording stopped"
        );
        Some((self.window_start.get(), observations))
    }
}

impl Default for AutomationRecorder {
    fn default() -> Self {
        Self::new()
    }
}
