//! Scroll interpolators.
//!
//! An interpolator maps the raw scroll offset onto a per-slide "position"
//! value: 1 at the active slide and 0 one slide away for the default family,
//! the signed slide distance for the stack family. Style functions in
//! [`crate::styles`] turn that value into opacity/scale/translation.

pub mod functions;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::animator::{animates_slides, SlideAnimator};
use crate::config::{CarouselConfig, StackDirection};
use functions::{input_range_from_offsets, interpolate, Extrapolate};

const DEFAULT_OFFSETS: [f32; 3] = [1.0, 0.0, -1.0];
const DEFAULT_OUTPUT: [f32; 3] = [0.0, 1.0, 0.0];
const STACK_FORWARD_OFFSETS: [f32; 5] = [3.0, 2.0, 1.0, 0.0, -1.0];
const STACK_REVERSE_OFFSETS: [f32; 5] = [1.0, 0.0, -1.0, -2.0, -3.0];

/// Input range (scroll offsets) → output range (slide position value).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interpolator {
    pub input_range: Vec<f32>,
    pub output_range: Vec<f32>,
}

impl Interpolator {
    /// Constant curve for slides that never animate.
    pub fn constant(value: f32) -> Self {
        Self {
            input_range: vec![0.0],
            output_range: vec![value],
        }
    }

    /// Evaluate at a scroll offset, clamped at both ends.
    #[inline]
    pub fn sample(&self, scroll_offset: f32) -> f32 {
        interpolate(
            scroll_offset,
            &self.input_range,
            &self.output_range,
            Extrapolate::Clamp,
        )
    }

    pub fn is_well_formed(&self) -> bool {
        !self.input_range.is_empty()
            && self.input_range.len() == self.output_range.len()
            && self.input_range.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Triangular closeness weight peaking at 1 when `index` is active.
pub fn default_scroll_interpolator(index: usize, cfg: &CarouselConfig) -> Interpolator {
    Interpolator {
        input_range: input_range_from_offsets(&DEFAULT_OFFSETS, index, cfg.item_size),
        output_range: DEFAULT_OUTPUT.to_vec(),
    }
}

/// Signed slide distance over a five-slide window oriented by the stack
/// direction.
pub fn stack_scroll_interpolator(index: usize, cfg: &CarouselConfig) -> Interpolator {
    let offsets: &[f32] = match cfg.stack_direction {
        StackDirection::Forward => &STACK_FORWARD_OFFSETS,
        StackDirection::Reverse => &STACK_REVERSE_OFFSETS,
    };
    Interpolator {
        input_range: input_range_from_offsets(offsets, index, cfg.item_size),
        output_range: offsets.to_vec(),
    }
}

/// Interpolator used for a slide under the configured layout, or the
/// animator's curve when it provides one.
pub fn interpolator_for(
    index: usize,
    cfg: &CarouselConfig,
    animator: Option<&dyn SlideAnimator>,
) -> Interpolator {
    if !animates_slides(cfg, animator) {
        return Interpolator::constant(1.0);
    }
    match animator.and_then(|a| a.scroll_interpolator(index, cfg)) {
        Some(custom) if custom.is_well_formed() => custom,
        Some(_) => {
            warn!("slide {index}: malformed custom interpolator, using the default curve");
            default_scroll_interpolator(index, cfg)
        }
        None if cfg.uses_stack_layout() => stack_scroll_interpolator(index, cfg),
        None => default_scroll_interpolator(index, cfg),
    }
}
