//! Slide style functions.
//!
//! Each function consumes the slide's interpolated position value (see
//! [`crate::interp`]) and returns only the properties that animate; an empty
//! [`SlideStyle`] means the slide renders untouched.

use serde::{Deserialize, Serialize};

use crate::animator::{animates_slides, SlideAnimator};
use crate::config::{CarouselConfig, StackDirection};
use crate::interp::functions::{interpolate, round_half_up, Extrapolate};

const CARD1_SCALE: f32 = 0.9;
const CARD2_SCALE: f32 = 0.8;

/// Animated style properties of one slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl SlideStyle {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.scale.is_none()
            && self.translate_x.is_none()
            && self.translate_y.is_none()
            && self.z_index.is_none()
    }

    fn set_translate(&mut self, vertical: bool, value: f32) {
        if vertical {
            self.translate_y = Some(value);
        } else {
            self.translate_x = Some(value);
        }
    }
}

#[inline]
fn unit_curve(value: f32, inactive: f32, active: f32) -> f32 {
    interpolate(value, &[0.0, 1.0], &[inactive, active], Extrapolate::Extend)
}

/// Opacity and scale fading towards the inactive thresholds.
pub fn default_animated_styles(_index: usize, value: f32, cfg: &CarouselConfig) -> SlideStyle {
    let mut style = SlideStyle::default();
    if cfg.inactive_slide_opacity < 1.0 {
        style.opacity = Some(unit_curve(value, cfg.inactive_slide_opacity, 1.0));
    }
    if cfg.inactive_slide_scale < 1.0 {
        style.scale = Some(unit_curve(value, cfg.inactive_slide_scale, 1.0));
    }
    style
}

/// Default styles plus a translation perpendicular to the scroll axis.
pub fn shift_animated_styles(index: usize, value: f32, cfg: &CarouselConfig) -> SlideStyle {
    let mut style = default_animated_styles(index, value, cfg);
    if cfg.inactive_slide_shift != 0.0 {
        let shift = unit_curve(value, cfg.inactive_slide_shift, 0.0);
        // Perpendicular axis: a vertical carousel shifts sideways.
        style.set_translate(!cfg.is_vertical(), shift);
    }
    style
}

/// Translation that lines a scaled card up behind the active one.
///
/// `card_index` is the signed distance to the active card; the sign of the
/// result follows the stack direction.
pub fn translate_from_scale(card_index: f32, scale: f32, cfg: &CarouselConfig) -> f32 {
    let size = cfg.item_size;
    let centered = -round_half_up(size * (card_index / scale));
    let edge_alignment = round_half_up((size - size * scale) / 2.0);
    let gap = round_half_up(cfg.layout_card_offset * card_index.abs() / scale);
    match cfg.stack_direction {
        StackDirection::Forward => centered + edge_alignment + gap,
        StackDirection::Reverse => centered - edge_alignment - gap,
    }
}

/// Layered card stack: upcoming (forward) or passed (reverse) cards shrink,
/// fade and tuck behind the active card.
pub fn stack_animated_styles(
    index: usize,
    value: f32,
    cfg: &CarouselConfig,
    data_len: usize,
) -> SlideStyle {
    let size = cfg.item_size;
    let opacity_stops: [f32; 4] = if cfg.inactive_slide_opacity == 1.0 {
        [1.0, 1.0, 1.0, 0.0]
    } else {
        [1.0, 0.75, 0.5, 0.0]
    };
    let clamp = Extrapolate::Clamp;
    let mut style = SlideStyle::default();

    match cfg.stack_direction {
        StackDirection::Forward => {
            style.z_index = Some(data_len as i32 - index as i32);
            style.opacity = Some(interpolate(value, &[0.0, 1.0, 2.0, 3.0], &opacity_stops, clamp));
            style.scale = Some(interpolate(
                value,
                &[-1.0, 0.0, 1.0, 2.0],
                &[CARD1_SCALE, 1.0, CARD1_SCALE, CARD2_SCALE],
                clamp,
            ));
            let translate = interpolate(
                value,
                &[-1.0, 0.0, 1.0, 2.0, 3.0],
                &[
                    -size * 0.5,
                    0.0,
                    translate_from_scale(1.0, CARD1_SCALE, cfg),
                    translate_from_scale(2.0, CARD2_SCALE, cfg),
                    translate_from_scale(3.0, CARD2_SCALE, cfg),
                ],
                clamp,
            );
            style.set_translate(cfg.is_vertical(), translate);
        }
        StackDirection::Reverse => {
            let mut reversed = opacity_stops;
            reversed.reverse();
            style.opacity = Some(interpolate(value, &[-3.0, -2.0, -1.0, 0.0], &reversed, clamp));
            style.scale = Some(interpolate(
                value,
                &[-2.0, -1.0, 0.0, 1.0],
                &[CARD2_SCALE, CARD1_SCALE, 1.0, CARD1_SCALE],
                clamp,
            ));
            let translate = interpolate(
                value,
                &[-3.0, -2.0, -1.0, 0.0, 1.0],
                &[
                    translate_from_scale(-3.0, CARD2_SCALE, cfg),
                    translate_from_scale(-2.0, CARD2_SCALE, cfg),
                    translate_from_scale(-1.0, CARD1_SCALE, cfg),
                    0.0,
                    size * 0.5,
                ],
                clamp,
            );
            style.set_translate(cfg.is_vertical(), translate);
        }
    }
    style
}

/// Style for a slide under the configured layout, or the animator's style
/// when it provides one.
pub fn slide_style(
    index: usize,
    value: f32,
    cfg: &CarouselConfig,
    data_len: usize,
    animator: Option<&dyn SlideAnimator>,
) -> SlideStyle {
    if let Some(style) = animator.and_then(|a| a.slide_style(index, value, cfg)) {
        style
    } else if !animates_slides(cfg, animator) {
        SlideStyle::default()
    } else if cfg.uses_stack_layout() {
        stack_animated_styles(index, value, cfg, data_len)
    } else if cfg.uses_shift_layout() {
        shift_animated_styles(index, value, cfg)
    } else {
        default_animated_styles(index, value, cfg)
    }
}
