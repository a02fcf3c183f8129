//! Input contracts for the scroll/snap state machine.
//!
//! Hosts forward their scroll-view events as [`Input`]s (through the
//! [`crate::Carousel`] methods); programmatic snaps and fired timers are
//! inputs too, so every state change goes through the same reducer.

use serde::{Deserialize, Serialize};

use crate::timers::TimerKind;

/// One event delivered to the state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// Scroll offset report. `None` re-runs the handler at the last known
    /// offset (synthesized settle).
    Scroll { offset: Option<f32> },
    DragBegin { offset: f32 },
    DragEnd,
    MomentumEnd,
    TouchEnd,
    SnapTo { index: isize, options: SnapOptions },
    SetScrollEnabled { enabled: bool },
    TimerFired { timer: TimerKind },
}

/// Flags of a programmatic snap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapOptions {
    pub animated: bool,
    /// Arm the before-snap/snap callbacks for this move.
    pub fire_callback: bool,
    /// Initial placement after mount (never ignores the next momentum end).
    pub initial: bool,
    /// Lock user scrolling while snapping, if the config allows it.
    pub lock_scroll: bool,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            animated: true,
            fire_callback: true,
            initial: false,
            lock_scroll: true,
        }
    }
}

impl SnapOptions {
    /// Unanimated jump with no callbacks and no lock.
    pub fn silent() -> Self {
        Self {
            animated: false,
            fire_callback: false,
            initial: false,
            lock_scroll: false,
        }
    }
}

/// Callbacks the host listens to; unsubscribed callbacks are never armed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriptions {
    #[serde(default = "yes")]
    pub before_snap: bool,
    #[serde(default = "yes")]
    pub snap: bool,
    #[serde(default = "yes")]
    pub scroll: bool,
}

fn yes() -> bool {
    true
}

impl Default for Subscriptions {
    fn default() -> Self {
        Self {
            before_snap: true,
            snap: true,
            scroll: true,
        }
    }
}
