//! One-shot timers driven by the engine clock.
//!
//! There is at most one pending timer per kind; scheduling a kind again
//! replaces the previous deadline.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Re-enables user scrolling after a locked snap.
    ScrollLock,
    /// Verifies that a momentum snap to the first/last slide produced a
    /// scroll event.
    EdgeRecheck,
    /// Reveals the carousel after the configured apparition delay.
    Apparition,
}

impl TimerKind {
    const ALL: [TimerKind; 3] = [
        TimerKind::ScrollLock,
        TimerKind::EdgeRecheck,
        TimerKind::Apparition,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            TimerKind::ScrollLock => 0,
            TimerKind::EdgeRecheck => 1,
            TimerKind::Apparition => 2,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TimerSet {
    deadlines: [Option<f64>; 3],
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TimerKind, due_ms: f64) {
        self.deadlines[kind.slot()] = Some(due_ms);
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.deadlines[kind.slot()] = None;
    }

    pub fn clear(&mut self) {
        self.deadlines = [None; 3];
    }

    #[inline]
    pub fn deadline(&self, kind: TimerKind) -> Option<f64> {
        self.deadlines[kind.slot()]
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.deadline(kind).is_some()
    }

    /// Remove and return the earliest timer due at `now_ms`, if any.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<TimerKind> {
        let kind = TimerKind::ALL
            .into_iter()
            .filter_map(|k| self.deadline(k).filter(|due| *due <= now_ms).map(|due| (k, due)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(k, _)| k)?;
        self.cancel(kind);
        Some(kind)
    }
}
