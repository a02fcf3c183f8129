//! Scroll/snap state value.
//!
//! The state is plain data: [`crate::machine::step`] consumes one value and
//! returns the next, so a sequence of inputs can be replayed without a host.

use serde::{Deserialize, Serialize};

/// Offset and active slide captured when a drag starts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragAnchor {
    pub offset: f32,
    pub active: usize,
}

/// Slide the carousel is moving to and the offset that aligns it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub index: usize,
    pub offset: f32,
}

/// Pending edge-momentum verification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCheck {
    pub index: usize,
    pub initial: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScrollPhase {
    Idle,
    Dragging(DragAnchor),
    Settling { target: usize },
    /// User scrolling is disabled until the lock timer fires or the target
    /// is reached.
    Locked { target: usize, until_ms: f64 },
}

/// Callbacks armed by the last snap that changed the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmedCallbacks {
    pub before_snap: bool,
    pub snap: bool,
}

/// Everything the state machine remembers between inputs. Indices are custom
/// (clone-padded) indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub phase: ScrollPhase,
    /// Last reported scroll offset.
    pub offset: f32,
    pub active: usize,
    /// Index of the last snap that changed target.
    pub previous_snapped: usize,
    pub snap_target: Option<SnapTarget>,
    pub drag_start: Option<DragAnchor>,
    pub scroll_end_offset: Option<f32>,
    pub scroll_end_active: Option<usize>,
    pub scroll_enabled: bool,
    pub ignore_next_momentum: bool,
    pub armed: ArmedCallbacks,
    /// A scroll event arrived since the last snap command.
    pub scroll_observed: bool,
    pub last_scroll_ms: f64,
    pub edge_check: Option<EdgeCheck>,
}

impl ScrollState {
    /// Fresh state parked on `first` (a custom index).
    pub fn new(first: usize, scroll_enabled: bool) -> Self {
        Self {
            phase: ScrollPhase::Idle,
            offset: 0.0,
            active: first,
            previous_snapped: first,
            snap_target: None,
            drag_start: None,
            scroll_end_offset: None,
            scroll_end_active: None,
            scroll_enabled,
            ignore_next_momentum: false,
            armed: ArmedCallbacks::default(),
            scroll_observed: true,
            last_scroll_ms: 0.0,
            edge_check: None,
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        matches!(self.phase, ScrollPhase::Locked { .. })
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, ScrollPhase::Dragging(_))
    }

    /// Target of the current settle or lock, if any.
    pub fn settling_target(&self) -> Option<usize> {
        match self.phase {
            ScrollPhase::Settling { target } | ScrollPhase::Locked { target, .. } => Some(target),
            _ => None,
        }
    }
}
