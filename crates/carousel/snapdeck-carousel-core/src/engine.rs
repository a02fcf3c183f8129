//! Carousel: data ownership and public API around the scroll/snap reducer.
//!
//! Methods:
//! - new, mount, unmount, tick (timers), host event handlers, snap_to_item,
//!   set_config / set_data_len (re-layout), accessors.
//!
//! Every mutating call clears and refills the engine's [`Outputs`] and returns
//! a reference to it.

use log::{debug, warn};

use crate::animator::SlideAnimator;
use crate::config::CarouselConfig;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::inputs::{Input, SnapOptions, Subscriptions};
use crate::machine::{self, Context, Effect};
use crate::outputs::{CarouselEvent, HostCommand, Outputs};
use crate::policy::{EdgeSettlePolicy, RecheckAfterDelay};
use crate::state::ScrollState;
use crate::timers::{TimerKind, TimerSet};

#[derive(Debug)]
pub struct Carousel {
    cfg: CarouselConfig,
    data_len: usize,
    geometry: Geometry,
    state: ScrollState,
    timers: TimerSet,
    clock_ms: f64,
    mounted: bool,
    layout_seen: bool,
    visible: bool,
    previous_first: usize,
    subscriptions: Subscriptions,
    edge_policy: Box<dyn EdgeSettlePolicy>,
    animator: Option<Box<dyn SlideAnimator>>,
    outputs: Outputs,
}

impl Carousel {
    /// Create an unmounted carousel over `data_len` items.
    pub fn new(cfg: CarouselConfig, data_len: usize) -> Result<Self> {
        cfg.validate()?;
        let geometry = Geometry::build(&cfg, data_len);
        let first = geometry.mapper.first_item_custom_index(cfg.first_item);
        let state = ScrollState::new(first, cfg.scroll_enabled);
        Ok(Self {
            cfg,
            data_len,
            geometry,
            state,
            timers: TimerSet::new(),
            clock_ms: 0.0,
            mounted: false,
            layout_seen: false,
            visible: false,
            previous_first: first,
            subscriptions: Subscriptions::default(),
            edge_policy: Box::new(RecheckAfterDelay),
            animator: None,
            outputs: Outputs::default(),
        })
    }

    pub fn with_subscriptions(mut self, subscriptions: Subscriptions) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    pub fn with_edge_policy(mut self, policy: Box<dyn EdgeSettlePolicy>) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Install custom slide curves and styles.
    pub fn with_slide_animator(mut self, animator: Box<dyn SlideAnimator>) -> Self {
        self.set_slide_animator(Some(animator));
        self
    }

    pub fn set_subscriptions(&mut self, subscriptions: Subscriptions) {
        self.subscriptions = subscriptions;
    }

    /// Replace (or remove) the slide animator; per-slide curves are rebuilt.
    pub fn set_slide_animator(&mut self, animator: Option<Box<dyn SlideAnimator>>) {
        self.animator = animator;
        self.geometry = self.build_geometry();
    }

    fn build_geometry(&self) -> Geometry {
        Geometry::build_with(&self.cfg, self.data_len, self.animator.as_deref())
    }

    /// Attach to the scroll surface: start from a fresh scroll state, place
    /// the first item without animation and start the apparition delay.
    pub fn mount(&mut self) -> &Outputs {
        self.outputs.clear();
        self.mounted = true;
        self.geometry = self.build_geometry();

        let first = self.geometry.mapper.first_item_custom_index(self.cfg.first_item);
        self.state = ScrollState::new(first, self.cfg.scroll_enabled);
        self.previous_first = first;
        self.dispatch(Input::SnapTo {
            index: first as isize,
            options: SnapOptions {
                animated: false,
                fire_callback: false,
                initial: true,
                lock_scroll: false,
            },
        });

        if self.cfg.apparition_delay_ms > 0.0 {
            self.timers
                .schedule(TimerKind::Apparition, self.clock_ms + self.cfg.apparition_delay_ms);
        } else {
            self.show();
        }
        &self.outputs
    }

    /// Detach from the surface, drop every pending timer and forget the
    /// scroll state. A later [`Carousel::mount`] starts over.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.visible = false;
        self.layout_seen = false;
        self.timers.clear();
        self.outputs.clear();
        let first = self.geometry.mapper.first_item_custom_index(self.cfg.first_item);
        self.state = ScrollState::new(first, self.cfg.scroll_enabled);
    }

    /// Advance the engine clock and fire due timers in deadline order.
    pub fn tick(&mut self, dt_ms: f64) -> &Outputs {
        self.outputs.clear();
        self.clock_ms += dt_ms.max(0.0);
        while let Some(timer) = self.timers.pop_due(self.clock_ms) {
            match timer {
                TimerKind::Apparition => self.show(),
                _ => self.dispatch(Input::TimerFired { timer }),
            }
        }
        &self.outputs
    }

    pub fn on_scroll(&mut self, offset: f32) -> &Outputs {
        self.handle(Input::Scroll {
            offset: Some(offset),
        })
    }

    pub fn on_drag_begin(&mut self, offset: f32) -> &Outputs {
        self.handle(Input::DragBegin { offset })
    }

    pub fn on_drag_end(&mut self) -> &Outputs {
        self.handle(Input::DragEnd)
    }

    pub fn on_momentum_end(&mut self) -> &Outputs {
        self.handle(Input::MomentumEnd)
    }

    pub fn on_touch_end(&mut self) -> &Outputs {
        self.handle(Input::TouchEnd)
    }

    /// The surface was laid out again; the first layout is the initial one.
    pub fn on_layout(&mut self) -> &Outputs {
        self.outputs.clear();
        if self.layout_seen {
            self.geometry = self.build_geometry();
            let active = self.state.active as isize;
            self.dispatch(Input::SnapTo {
                index: active,
                options: SnapOptions::silent(),
            });
        } else {
            self.layout_seen = true;
        }
        &self.outputs
    }

    /// Snap to a data index; out-of-range indices clamp to the ends.
    pub fn snap_to_item(&mut self, index: isize, animated: bool, fire_callback: bool) -> &Outputs {
        let last = self.data_len.saturating_sub(1) as isize;
        let data_index = index.clamp(0, last) as usize;
        let custom = self.geometry.mapper.to_custom_index(data_index);
        self.snap_custom(custom as isize, animated, fire_callback)
    }

    /// Snap one slide forward, wrapping to the start when looping.
    pub fn snap_to_next(&mut self, animated: bool, fire_callback: bool) -> &Outputs {
        let len = self.geometry.custom_len();
        let mut next = self.state.active + 1;
        if next > len.saturating_sub(1) {
            if !self.geometry.mapper.is_looping() {
                self.outputs.clear();
                return &self.outputs;
            }
            next = 0;
        }
        self.snap_custom(next as isize, animated, fire_callback)
    }

    /// Snap one slide back, wrapping to the end when looping.
    pub fn snap_to_prev(&mut self, animated: bool, fire_callback: bool) -> &Outputs {
        let len = self.geometry.custom_len();
        let prev = match self.state.active.checked_sub(1) {
            Some(prev) => prev,
            None if self.geometry.mapper.is_looping() => len.saturating_sub(1),
            None => {
                self.outputs.clear();
                return &self.outputs;
            }
        };
        self.snap_custom(prev as isize, animated, fire_callback)
    }

    fn snap_custom(&mut self, index: isize, animated: bool, fire_callback: bool) -> &Outputs {
        self.handle(Input::SnapTo {
            index,
            options: SnapOptions {
                animated,
                fire_callback,
                ..SnapOptions::default()
            },
        })
    }

    /// Enable or disable user scrolling on the surface.
    pub fn set_scroll_enabled(&mut self, enabled: bool) -> &Outputs {
        self.cfg.scroll_enabled = enabled;
        self.handle(Input::SetScrollEnabled { enabled })
    }

    /// Replace the configuration; geometry changes re-snap without animation.
    pub fn set_config(&mut self, cfg: CarouselConfig) -> Result<&Outputs> {
        cfg.validate()?;
        let previous = std::mem::replace(&mut self.cfg, cfg);
        Ok(self.relayout(&previous, self.data_len))
    }

    /// The data set changed length.
    pub fn set_data_len(&mut self, data_len: usize) -> &Outputs {
        let previous_len = std::mem::replace(&mut self.data_len, data_len);
        let cfg = self.cfg.clone();
        self.relayout(&cfg, previous_len)
    }

    fn relayout(&mut self, previous: &CarouselConfig, previous_len: usize) -> &Outputs {
        self.outputs.clear();
        let old_len = self.geometry.custom_len();
        self.geometry = self.build_geometry();
        let len = self.geometry.custom_len();
        if len == 0 {
            return &self.outputs;
        }

        if self.cfg.scroll_enabled != previous.scroll_enabled {
            let enabled = self.cfg.scroll_enabled;
            self.dispatch(Input::SetScrollEnabled { enabled });
        }

        let next_first = self.geometry.mapper.first_item_custom_index(self.cfg.first_item);
        let resized = !self.cfg.same_geometry(previous);
        if len != old_len || previous_len != self.data_len || resized {
            self.state.active = self.state.active.min(len - 1);
            debug!("relayout: len {old_len} -> {len}, active={}", self.state.active);
            if resized {
                let active = self.state.active as isize;
                self.dispatch(Input::SnapTo {
                    index: active,
                    options: SnapOptions::silent(),
                });
            }
        } else if next_first != self.previous_first && next_first != self.state.active {
            self.state.active = next_first;
            self.previous_first = next_first;
            self.dispatch(Input::SnapTo {
                index: next_first as isize,
                options: SnapOptions {
                    fire_callback: true,
                    ..SnapOptions::silent()
                },
            });
        }
        &self.outputs
    }

    fn handle(&mut self, input: Input) -> &Outputs {
        self.outputs.clear();
        self.dispatch(input);
        &self.outputs
    }

    fn dispatch(&mut self, input: Input) {
        if !self.mounted {
            warn!("input {input:?} before mount");
        }
        let transition = {
            let ctx = Context {
                config: &self.cfg,
                geometry: &self.geometry,
                subscriptions: self.subscriptions,
                mounted: self.mounted,
                now_ms: self.clock_ms,
                edge_policy: self.edge_policy.as_ref(),
            };
            machine::step(&ctx, self.state.clone(), input)
        };
        self.state = transition.state;
        for effect in transition.effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollTo { offset, animated } => self
                .outputs
                .push_command(HostCommand::ScrollTo { offset, animated }),
            Effect::SetScrollEnabled { enabled } => self
                .outputs
                .push_command(HostCommand::SetScrollEnabled { enabled }),
            Effect::Schedule { timer, delay_ms } => {
                self.timers.schedule(timer, self.clock_ms + delay_ms)
            }
            Effect::Cancel { timer } => self.timers.cancel(timer),
            Effect::BeforeSnap { index } => {
                self.outputs.push_event(CarouselEvent::BeforeSnap { index })
            }
            Effect::Snap { index } => self.outputs.push_event(CarouselEvent::Snap { index }),
            Effect::Scrolled { offset } => {
                self.outputs.push_event(CarouselEvent::Scroll { offset })
            }
        }
    }

    fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.outputs.push_event(CarouselEvent::Shown);
        }
    }
}

impl Carousel {
    /// Data index of the active slide.
    pub fn current_index(&self) -> usize {
        self.geometry.data_index(self.state.active)
    }

    /// Custom (clone-padded) index of the active slide.
    pub fn real_index(&self) -> usize {
        self.state.active
    }

    pub fn current_scroll_position(&self) -> f32 {
        self.state.offset
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn slide_animator(&self) -> Option<&dyn SlideAnimator> {
        self.animator.as_deref()
    }

    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }
}
