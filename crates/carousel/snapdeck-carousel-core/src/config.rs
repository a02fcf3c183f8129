//! Carousel configuration.
//!
//! Every field except the two sizes has a serde default matching the stock
//! carousel behaviour, so a host can send `{"item_size": 240, "slider_size": 360}`
//! and get a centered, snapping, non-looping carousel.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Scroll axis of the slider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Where the active slide sits inside the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

/// Built-in slide layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideLayout {
    #[default]
    Default,
    Shift,
    Stack,
}

/// Stacking convention of the stack layout.
///
/// `Forward` piles upcoming cards behind the active one (positive scroll
/// direction); `Reverse` piles the cards already passed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackDirection {
    #[default]
    Forward,
    Reverse,
}

/// When the snap callbacks fire relative to the scroll events that reach the
/// pending target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackTiming {
    /// Before-snap fires when the target becomes active; snap waits for the
    /// first event whose offset lies within `callback_offset_margin` of the
    /// target offset recorded at snap time.
    #[default]
    Settled,
    /// Both callbacks fire on the event where the target becomes active.
    Immediate,
}

fn default_true() -> bool {
    true
}
fn default_clones() -> usize {
    3
}
fn default_slide_offset() -> f32 {
    20.0
}
fn default_opacity() -> f32 {
    0.7
}
fn default_scale() -> f32 {
    0.9
}
fn default_card_offset() -> f32 {
    18.0
}
fn default_lock_ms() -> f64 {
    1000.0
}
fn default_margin() -> f32 {
    5.0
}
fn default_edge_ms() -> f64 {
    250.0
}

/// Immutable-per-render configuration of a carousel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Size of one slide along the scroll axis.
    pub item_size: f32,
    /// Size of the viewport along the scroll axis.
    pub slider_size: f32,
    #[serde(default)]
    pub axis: Axis,

    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    #[serde(default = "default_clones")]
    pub loop_clones_per_side: usize,

    #[serde(default)]
    pub active_slide_alignment: Alignment,
    /// Band widening used by active item detection; 0 falls back to
    /// `swipe_threshold`.
    #[serde(default = "default_slide_offset")]
    pub active_slide_offset: f32,
    #[serde(default = "default_slide_offset")]
    pub swipe_threshold: f32,

    #[serde(default = "default_opacity")]
    pub inactive_slide_opacity: f32,
    #[serde(default = "default_scale")]
    pub inactive_slide_scale: f32,
    #[serde(default)]
    pub inactive_slide_shift: f32,

    #[serde(default)]
    pub layout: SlideLayout,
    /// Gap between stacked cards (stack layout only).
    #[serde(default = "default_card_offset")]
    pub layout_card_offset: f32,
    #[serde(default)]
    pub stack_direction: StackDirection,

    #[serde(default)]
    pub enable_momentum: bool,
    #[serde(default = "default_true")]
    pub enable_snap: bool,
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
    #[serde(default)]
    pub lock_scroll_while_snapping: bool,
    #[serde(default = "default_lock_ms")]
    pub lock_scroll_timeout_ms: f64,
    #[serde(default = "default_margin")]
    pub callback_offset_margin: f32,
    #[serde(default)]
    pub callback_timing: CallbackTiming,
    /// Delay of the edge-item momentum recheck.
    #[serde(default = "default_edge_ms")]
    pub edge_recheck_ms: f64,

    /// Data index shown first after mount.
    #[serde(default)]
    pub first_item: usize,
    #[serde(default)]
    pub apparition_delay_ms: f64,
    /// Mirror custom indices for right-to-left horizontal lists.
    #[serde(default)]
    pub mirrored: bool,
}

impl CarouselConfig {
    /// Config with stock defaults for the given geometry.
    pub fn new(item_size: f32, slider_size: f32) -> Self {
        Self {
            item_size,
            slider_size,
            axis: Axis::default(),
            loop_enabled: false,
            loop_clones_per_side: default_clones(),
            active_slide_alignment: Alignment::default(),
            active_slide_offset: default_slide_offset(),
            swipe_threshold: default_slide_offset(),
            inactive_slide_opacity: default_opacity(),
            inactive_slide_scale: default_scale(),
            inactive_slide_shift: 0.0,
            layout: SlideLayout::default(),
            layout_card_offset: default_card_offset(),
            stack_direction: StackDirection::default(),
            enable_momentum: false,
            enable_snap: true,
            scroll_enabled: true,
            lock_scroll_while_snapping: false,
            lock_scroll_timeout_ms: default_lock_ms(),
            callback_offset_margin: default_margin(),
            callback_timing: CallbackTiming::default(),
            edge_recheck_ms: default_edge_ms(),
            first_item: 0,
            apparition_delay_ms: 0.0,
            mirrored: false,
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: CarouselConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.item_size.is_finite() || self.item_size <= 0.0 {
            return Err(CarouselError::InvalidItemSize(self.item_size));
        }
        if !self.slider_size.is_finite() || self.slider_size < 0.0 {
            return Err(CarouselError::InvalidSliderSize(self.slider_size));
        }
        for (field, value) in [
            ("inactive_slide_opacity", self.inactive_slide_opacity),
            ("inactive_slide_scale", self.inactive_slide_scale),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CarouselError::OutOfUnitRange { field, value });
            }
        }
        for (field, value) in [
            ("active_slide_offset", self.active_slide_offset),
            ("swipe_threshold", self.swipe_threshold),
            ("callback_offset_margin", self.callback_offset_margin),
            ("lock_scroll_timeout_ms", self.lock_scroll_timeout_ms as f32),
            ("apparition_delay_ms", self.apparition_delay_ms as f32),
            ("edge_recheck_ms", self.edge_recheck_ms as f32),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CarouselError::Negative { field, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.axis == Axis::Vertical
    }

    /// Right-to-left mirroring only applies to horizontal lists.
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored && !self.is_vertical()
    }

    /// Half-width of the band widening used by active item detection.
    #[inline]
    pub fn center_tolerance(&self) -> f32 {
        if self.active_slide_offset != 0.0 {
            self.active_slide_offset
        } else {
            self.swipe_threshold
        }
    }

    #[inline]
    pub fn uses_stack_layout(&self) -> bool {
        self.layout == SlideLayout::Stack
    }

    /// Shift styles apply to the shift layout, and to the default layout as
    /// soon as a perpendicular shift is configured.
    #[inline]
    pub fn uses_shift_layout(&self) -> bool {
        match self.layout {
            SlideLayout::Shift => true,
            SlideLayout::Default => self.inactive_slide_shift != 0.0,
            SlideLayout::Stack => false,
        }
    }

    /// Whether slides carry scroll-driven styles at all.
    pub fn animates_slides(&self) -> bool {
        self.inactive_slide_opacity < 1.0
            || self.inactive_slide_scale < 1.0
            || self.uses_shift_layout()
            || self.uses_stack_layout()
    }

    /// Scroll locking only applies to free (non-momentum) snapping.
    #[inline]
    pub fn can_lock_scroll(&self) -> bool {
        self.scroll_enabled && !self.enable_momentum && self.lock_scroll_while_snapping
    }

    /// Geometry fields whose change requires a re-snap.
    pub(crate) fn same_geometry(&self, other: &CarouselConfig) -> bool {
        self.item_size == other.item_size
            && self.slider_size == other.slider_size
            && self.axis == other.axis
            && self.active_slide_alignment == other.active_slide_alignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults_match_constructor() {
        let cfg = CarouselConfig::from_json(r#"{"item_size": 240, "slider_size": 360}"#).unwrap();
        assert_eq!(cfg, CarouselConfig::new(240.0, 360.0));
    }

    #[test]
    fn loop_key_is_renamed() {
        let cfg =
            CarouselConfig::from_json(r#"{"item_size": 1, "slider_size": 1, "loop": true}"#).unwrap();
        assert!(cfg.loop_enabled);
    }

    #[test]
    fn rejects_bad_geometry() {
        let err = CarouselConfig::new(0.0, 100.0).validate().unwrap_err();
        assert_eq!(err, CarouselError::InvalidItemSize(0.0));
        let mut cfg = CarouselConfig::new(10.0, 100.0);
        cfg.inactive_slide_scale = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(CarouselError::OutOfUnitRange { field: "inactive_slide_scale", .. })
        ));
    }

    #[test]
    fn tolerance_falls_back_to_threshold() {
        let mut cfg = CarouselConfig::new(10.0, 100.0);
        cfg.active_slide_offset = 0.0;
        cfg.swipe_threshold = 7.0;
        assert_eq!(cfg.center_tolerance(), 7.0);
    }
}
