//! Scroll/snap reducer.
//!
//! `step(ctx, state, input)` returns the next [`ScrollState`] and the effects
//! the engine must apply: host commands, timer (re)scheduling and callback
//! events. Nothing here touches a host or a clock directly.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{CallbackTiming, CarouselConfig};
use crate::geometry::Geometry;
use crate::inputs::{Input, SnapOptions, Subscriptions};
use crate::policy::EdgeSettlePolicy;
use crate::state::{DragAnchor, EdgeCheck, ScrollPhase, ScrollState, SnapTarget};
use crate::timers::TimerKind;

/// Read-only environment of one reducer step.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub config: &'a CarouselConfig,
    pub geometry: &'a Geometry,
    pub subscriptions: Subscriptions,
    /// Scroll surface attached; commands and callbacks are dropped otherwise.
    pub mounted: bool,
    pub now_ms: f64,
    pub edge_policy: &'a dyn EdgeSettlePolicy,
}

/// Side effect requested by a step. Indices in callback effects are data
/// indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    ScrollTo { offset: f32, animated: bool },
    SetScrollEnabled { enabled: bool },
    Schedule { timer: TimerKind, delay_ms: f64 },
    Cancel { timer: TimerKind },
    BeforeSnap { index: usize },
    Snap { index: usize },
    Scrolled { offset: f32 },
}

#[derive(Clone, Debug)]
pub struct Transition {
    pub state: ScrollState,
    pub effects: Vec<Effect>,
}

/// Apply one input.
pub fn step(ctx: &Context<'_>, state: ScrollState, input: Input) -> Transition {
    let mut m = Machine {
        ctx,
        state,
        effects: Vec::new(),
    };
    match input {
        Input::Scroll { offset } => m.on_scroll(offset),
        Input::DragBegin { offset } => m.on_drag_begin(offset),
        Input::DragEnd => {
            if !ctx.config.enable_momentum {
                m.on_scroll_end();
            }
        }
        Input::MomentumEnd => {
            if ctx.config.enable_momentum {
                m.on_scroll_end();
            }
        }
        Input::TouchEnd => m.on_scroll_end(),
        Input::SnapTo { index, options } => m.snap_to(index, options),
        Input::SetScrollEnabled { enabled } => m.set_scroll_enabled(enabled),
        Input::TimerFired { timer } => m.on_timer(timer),
    }
    Transition {
        state: m.state,
        effects: m.effects,
    }
}

struct Machine<'c, 'a> {
    ctx: &'c Context<'a>,
    state: ScrollState,
    effects: Vec<Effect>,
}

impl Machine<'_, '_> {
    #[inline]
    fn cfg(&self) -> &CarouselConfig {
        self.ctx.config
    }

    fn on_scroll(&mut self, reported: Option<f32>) {
        let cfg = self.ctx.config;
        let offset = reported.unwrap_or(self.state.offset);
        let next = self.ctx.geometry.active_item_at(offset);
        let pending = self.state.snap_target;
        let item_reached = pending.is_some_and(|t| t.index == next);
        // Evaluated against the target recorded by the last snap, before this
        // event updates any state.
        let within_margin = match cfg.callback_timing {
            CallbackTiming::Settled => {
                pending.is_some_and(|t| (offset - t.offset).abs() <= cfg.callback_offset_margin)
            }
            CallbackTiming::Immediate => true,
        };

        self.state.offset = offset;
        self.state.scroll_observed = true;
        self.state.last_scroll_ms = self.ctx.now_ms;
        trace!("scroll offset={offset} next_active={next} reached={item_reached}");

        if cfg.enable_momentum {
            self.state.active = next;
            if item_reached {
                if self.state.armed.before_snap {
                    self.fire_before_snap(next);
                }
                if within_margin && self.state.armed.snap {
                    self.fire_snap(next);
                }
            }
        } else if self.state.active != next && item_reached {
            if self.state.armed.before_snap {
                self.fire_before_snap(next);
            }
            if within_margin {
                self.state.active = next;
                if cfg.can_lock_scroll() {
                    self.release_scroll();
                }
                if self.state.armed.snap {
                    self.fire_snap(next);
                }
            }
        }

        if let Some(target) = pending {
            if target.index == next && offset == target.offset {
                if matches!(self.state.phase, ScrollPhase::Settling { .. }) {
                    self.state.phase = ScrollPhase::Idle;
                }
                self.reposition(next);
            }
        }

        if reported.is_some() && self.ctx.subscriptions.scroll {
            self.effects.push(Effect::Scrolled { offset });
        }
    }

    fn on_drag_begin(&mut self, offset: f32) {
        if !self.cfg().enable_snap {
            return;
        }
        if !self.state.scroll_enabled {
            warn!("drag began while scrolling is locked; ignored");
            return;
        }
        let anchor = DragAnchor {
            offset,
            active: self.ctx.geometry.active_item_at(offset),
        };
        self.state.drag_start = Some(anchor);
        self.state.ignore_next_momentum = false;
        self.state.phase = ScrollPhase::Dragging(anchor);
    }

    fn on_scroll_end(&mut self) {
        if !self.cfg().enable_snap {
            self.leave_drag();
            return;
        }
        if self.state.ignore_next_momentum {
            self.state.ignore_next_momentum = false;
            self.leave_drag();
            return;
        }
        let offset = self.state.offset;
        if self.state.scroll_end_offset == Some(offset) {
            self.leave_drag();
            return;
        }

        let end_active = self.ctx.geometry.active_item_at(offset);
        self.state.scroll_end_offset = Some(offset);
        self.state.scroll_end_active = Some(end_active);

        let anchor = self.state.drag_start.unwrap_or(DragAnchor {
            offset,
            active: end_active,
        });
        let target = resolve_swipe(
            anchor.active,
            end_active,
            offset - anchor.offset,
            self.cfg().swipe_threshold,
        );
        debug!(
            "swipe resolved: start={} end={} delta={} -> {}",
            anchor.active,
            end_active,
            offset - anchor.offset,
            target
        );
        self.snap_to(target, SnapOptions::default());
    }

    fn leave_drag(&mut self) {
        if self.state.is_dragging() {
            self.state.phase = ScrollPhase::Idle;
        }
    }

    fn snap_to(&mut self, index: isize, options: SnapOptions) {
        let len = self.ctx.geometry.custom_len();
        if len == 0 || !self.ctx.mounted {
            debug!("snap_to({index}) ignored: len={len} mounted={}", self.ctx.mounted);
            return;
        }
        let index = index.clamp(0, len as isize - 1) as usize;
        let Some(offset) = self.ctx.geometry.positions.start(index) else {
            return;
        };
        let cfg = self.ctx.config;

        let mut lock = false;
        if index != self.state.previous_snapped {
            self.state.previous_snapped = index;
            lock = options.lock_scroll && cfg.can_lock_scroll();
            if options.fire_callback {
                if self.ctx.subscriptions.before_snap {
                    self.state.armed.before_snap = true;
                }
                if self.ctx.subscriptions.snap {
                    self.state.armed.snap = true;
                }
            }
        }

        self.state.snap_target = Some(SnapTarget { index, offset });
        self.state.scroll_observed = false;
        self.state.phase = match self.state.phase {
            ScrollPhase::Locked { until_ms, .. } if !lock => ScrollPhase::Locked {
                target: index,
                until_ms,
            },
            _ => ScrollPhase::Settling { target: index },
        };
        if lock {
            self.lock_scroll(index);
        }

        debug!("snap_to index={index} offset={offset} animated={}", options.animated);
        self.effects.push(Effect::ScrollTo {
            offset,
            animated: options.animated,
        });
        self.state.scroll_end_offset = Some(self.state.offset);

        if cfg.enable_momentum {
            if !options.initial {
                self.state.ignore_next_momentum = true;
            }
            if index == 0 || index == len - 1 {
                if let Some(delay_ms) = self.ctx.edge_policy.recheck_delay(cfg) {
                    self.state.edge_check = Some(EdgeCheck {
                        index,
                        initial: options.initial,
                    });
                    self.effects.push(Effect::Schedule {
                        timer: TimerKind::EdgeRecheck,
                        delay_ms,
                    });
                }
            }
        }
    }

    /// Jump from a loop clone to the equivalent real slide.
    fn reposition(&mut self, index: usize) {
        if let Some(to) = self.ctx.geometry.mapper.reposition_target(index) {
            debug!("reposition clone {index} -> {to}");
            self.snap_to(to as isize, SnapOptions::silent());
        }
    }

    fn lock_scroll(&mut self, target: usize) {
        let delay_ms = self.cfg().lock_scroll_timeout_ms;
        self.effects.push(Effect::Schedule {
            timer: TimerKind::ScrollLock,
            delay_ms,
        });
        self.set_scroll_enabled(false);
        self.state.phase = ScrollPhase::Locked {
            target,
            until_ms: self.ctx.now_ms + delay_ms,
        };
    }

    fn release_scroll(&mut self) {
        self.effects.push(Effect::Cancel {
            timer: TimerKind::ScrollLock,
        });
        self.set_scroll_enabled(true);
        if let ScrollPhase::Locked { target, .. } = self.state.phase {
            let settled = self
                .state
                .snap_target
                .is_some_and(|t| t.index == target && t.offset == self.state.offset);
            self.state.phase = if settled {
                ScrollPhase::Idle
            } else {
                ScrollPhase::Settling { target }
            };
        }
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        if !self.ctx.mounted {
            return;
        }
        self.state.scroll_enabled = enabled;
        self.effects.push(Effect::SetScrollEnabled { enabled });
    }

    fn on_timer(&mut self, timer: TimerKind) {
        match timer {
            TimerKind::ScrollLock => self.release_scroll(),
            TimerKind::EdgeRecheck => {
                if let Some(check) = self.state.edge_check.take() {
                    if self.ctx.edge_policy.should_synthesize(&check, &self.state) {
                        debug!("edge recheck: synthesizing settle for {}", check.index);
                        self.on_scroll(None);
                    }
                }
            }
            // Visibility is owned by the engine.
            TimerKind::Apparition => {}
        }
    }

    fn fire_before_snap(&mut self, custom: usize) {
        if !self.ctx.mounted {
            return;
        }
        self.state.armed.before_snap = false;
        let index = self.ctx.geometry.data_index(custom);
        self.effects.push(Effect::BeforeSnap { index });
    }

    fn fire_snap(&mut self, custom: usize) {
        if !self.ctx.mounted {
            return;
        }
        self.state.armed.snap = false;
        let index = self.ctx.geometry.data_index(custom);
        self.effects.push(Effect::Snap { index });
    }
}

/// Snap target of a finished swipe.
///
/// A swipe that changed the active slide lands on it; otherwise a move past
/// the threshold advances one slide in its direction and a shorter one snaps
/// back.
pub fn resolve_swipe(start_active: usize, end_active: usize, delta: f32, threshold: f32) -> isize {
    if start_active != end_active {
        end_active as isize
    } else if delta > threshold {
        start_active as isize + 1
    } else if delta < -threshold {
        start_active as isize - 1
    } else {
        end_active as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RecheckAfterDelay;

    fn ctx<'a>(cfg: &'a CarouselConfig, geometry: &'a Geometry) -> Context<'a> {
        Context {
            config: cfg,
            geometry,
            subscriptions: Subscriptions::default(),
            mounted: true,
            now_ms: 0.0,
            edge_policy: &RecheckAfterDelay,
        }
    }

    #[test]
    fn swipe_resolution() {
        assert_eq!(resolve_swipe(2, 2, 30.0, 20.0), 3);
        assert_eq!(resolve_swipe(2, 2, -30.0, 20.0), 1);
        assert_eq!(resolve_swipe(2, 2, 10.0, 20.0), 2);
        assert_eq!(resolve_swipe(2, 4, 10.0, 20.0), 4);
        assert_eq!(resolve_swipe(0, 0, -30.0, 20.0), -1);
    }

    #[test]
    fn unmounted_snap_is_a_no_op() {
        let cfg = CarouselConfig::new(100.0, 100.0);
        let geometry = Geometry::build(&cfg, 3);
        let mut c = ctx(&cfg, &geometry);
        c.mounted = false;
        let t = step(
            &c,
            ScrollState::new(0, true),
            Input::SnapTo {
                index: 2,
                options: SnapOptions::default(),
            },
        );
        assert!(t.effects.is_empty());
        assert_eq!(t.state.snap_target, None);
    }

    #[test]
    fn snap_arms_only_subscribed_callbacks() {
        let cfg = CarouselConfig::new(100.0, 100.0);
        let geometry = Geometry::build(&cfg, 3);
        let mut c = ctx(&cfg, &geometry);
        c.subscriptions.before_snap = false;
        let t = step(
            &c,
            ScrollState::new(0, true),
            Input::SnapTo {
                index: 2,
                options: SnapOptions::default(),
            },
        );
        assert!(!t.state.armed.before_snap);
        assert!(t.state.armed.snap);
        assert_eq!(
            t.effects,
            vec![Effect::ScrollTo {
                offset: 200.0,
                animated: true
            }]
        );
        assert_eq!(t.state.phase, ScrollPhase::Settling { target: 2 });
    }

    #[test]
    fn drag_is_ignored_while_locked() {
        let cfg = CarouselConfig::new(100.0, 100.0);
        let geometry = Geometry::build(&cfg, 3);
        let c = ctx(&cfg, &geometry);
        let t = step(&c, ScrollState::new(0, false), Input::DragBegin { offset: 0.0 });
        assert_eq!(t.state.phase, ScrollPhase::Idle);
        assert_eq!(t.state.drag_start, None);
    }
}
