//! Derived carousel geometry: position table, loop mapping, per-slide
//! interpolators and the viewport maths used for active item detection.
//!
//! Rebuilt whenever the data length, loop settings or sizes change.

use crate::animator::SlideAnimator;
use crate::config::{Alignment, CarouselConfig};
use crate::interp::{interpolator_for, Interpolator};
use crate::looping::LoopMapper;
use crate::positions::PositionTable;

#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: PositionTable,
    pub mapper: LoopMapper,
    pub interpolators: Vec<Interpolator>,
    viewport_offset: f32,
    leading_margin: f32,
    trailing_margin: f32,
    tolerance: f32,
}

/// Padding before the first slide (or after the last when `opposite`) that
/// lets edge slides reach the active slot.
fn inner_margin(cfg: &CarouselConfig, opposite: bool) -> f32 {
    let free = cfg.slider_size - cfg.item_size;
    match (cfg.active_slide_alignment, opposite) {
        (Alignment::Start, false) | (Alignment::End, true) => 0.0,
        (Alignment::End, false) | (Alignment::Start, true) => free,
        (Alignment::Center, _) => free / 2.0,
    }
}

/// Distance from the viewport's leading edge to the active slot's center.
fn viewport_offset(cfg: &CarouselConfig) -> f32 {
    match cfg.active_slide_alignment {
        Alignment::Start => cfg.item_size / 2.0,
        Alignment::End => cfg.slider_size - cfg.item_size / 2.0,
        Alignment::Center => cfg.slider_size / 2.0,
    }
}

impl Geometry {
    pub fn build(cfg: &CarouselConfig, data_len: usize) -> Self {
        Self::build_with(cfg, data_len, None)
    }

    /// Like [`Geometry::build`], with per-slide curves from `animator`.
    pub fn build_with(
        cfg: &CarouselConfig,
        data_len: usize,
        animator: Option<&dyn SlideAnimator>,
    ) -> Self {
        let mapper = LoopMapper::new(
            data_len,
            cfg.loop_clones_per_side,
            cfg.loop_enabled,
            cfg.enable_snap,
        );
        let len = mapper.custom_len();
        let positions = PositionTable::compute(len, cfg.item_size);
        let interpolators = (0..len)
            .map(|i| interpolator_for(mirror_index(cfg, len, i), cfg, animator))
            .collect();
        Self {
            positions,
            mapper,
            interpolators,
            viewport_offset: viewport_offset(cfg),
            leading_margin: inner_margin(cfg, false),
            trailing_margin: inner_margin(cfg, true),
            tolerance: cfg.center_tolerance(),
        }
    }

    #[inline]
    pub fn custom_len(&self) -> usize {
        self.mapper.custom_len()
    }

    /// Point of the scroll axis, in content coordinates, sitting under the
    /// active slot for a given scroll offset.
    #[inline]
    pub fn center(&self, offset: f32) -> f32 {
        offset + self.viewport_offset - self.leading_margin
    }

    /// Custom index considered active at `offset`.
    #[inline]
    pub fn active_item_at(&self, offset: f32) -> usize {
        self.positions.index_at(self.center(offset), self.tolerance)
    }

    /// Leading and trailing content insets.
    #[inline]
    pub fn insets(&self) -> (f32, f32) {
        (self.leading_margin, self.trailing_margin)
    }

    #[inline]
    pub fn data_index(&self, custom: usize) -> usize {
        self.mapper.to_data_index(custom)
    }
}

/// Interpolation index for custom position `i`; mirrored lists count from
/// the far end.
#[inline]
pub fn mirror_index(cfg: &CarouselConfig, len: usize, i: usize) -> usize {
    if cfg.is_mirrored() && len > 0 {
        len - i - 1
    } else {
        i
    }
}
