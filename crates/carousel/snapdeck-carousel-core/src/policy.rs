//! Edge-momentum settle policies.
//!
//! Some hosts drop the momentum scroll events of very short moves, so a
//! momentum snap to the first or last slide may never report that it landed.
//! The engine asks an [`EdgeSettlePolicy`] whether to schedule a recheck and,
//! once it fires, whether to synthesize a scroll event at the last offset.

use crate::config::CarouselConfig;
use crate::state::{EdgeCheck, ScrollState};

pub trait EdgeSettlePolicy: std::fmt::Debug {
    /// Delay before rechecking an edge snap; `None` skips the recheck.
    fn recheck_delay(&self, cfg: &CarouselConfig) -> Option<f64>;

    /// Decide, when the recheck fires, whether a settle must be synthesized.
    fn should_synthesize(&self, check: &EdgeCheck, state: &ScrollState) -> bool;
}

/// Recheck after `edge_recheck_ms`; synthesize when the snapped slide is the
/// active one but no scroll event arrived since the snap command.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecheckAfterDelay;

impl EdgeSettlePolicy for RecheckAfterDelay {
    fn recheck_delay(&self, cfg: &CarouselConfig) -> Option<f64> {
        Some(cfg.edge_recheck_ms)
    }

    fn should_synthesize(&self, check: &EdgeCheck, state: &ScrollState) -> bool {
        !check.initial && check.index == state.active && !state.scroll_observed
    }
}

/// For hosts that always report momentum scrolls.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverRecheck;

impl EdgeSettlePolicy for NeverRecheck {
    fn recheck_delay(&self, _cfg: &CarouselConfig) -> Option<f64> {
        None
    }

    fn should_synthesize(&self, _check: &EdgeCheck, _state: &ScrollState) -> bool {
        false
    }
}
