//! Custom slide animation hooks.
//!
//! A [`SlideAnimator`] replaces the built-in curves and styles of the
//! configured layout. Installing one always turns slide animation on, even
//! when the inactive thresholds are neutral.

use crate::config::CarouselConfig;
use crate::interp::Interpolator;
use crate::styles::SlideStyle;

pub trait SlideAnimator: std::fmt::Debug {
    /// Curve of slide `index`. `None` keeps the layout's interpolator; a
    /// curve that is not well formed falls back to the default one.
    fn scroll_interpolator(&self, _index: usize, _cfg: &CarouselConfig) -> Option<Interpolator> {
        None
    }

    /// Style of slide `index` at interpolated `value`. `None` keeps the
    /// layout's style.
    fn slide_style(&self, _index: usize, _value: f32, _cfg: &CarouselConfig) -> Option<SlideStyle> {
        None
    }
}

/// Whether slides carry scroll-driven values and styles.
#[inline]
pub fn animates_slides(cfg: &CarouselConfig, animator: Option<&dyn SlideAnimator>) -> bool {
    animator.is_some() || cfg.animates_slides()
}
