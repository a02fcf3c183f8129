//! Interpolation helpers:
//! - lerp_f32 (scalar blend)
//! - interpolate (piecewise-linear range mapping with extend/clamp extrapolation)
//! - input_range_from_offsets (item-relative input ranges)
//! - round_half_up (host toolkit rounding used by the stack layout)

use serde::{Deserialize, Serialize};

/// Behaviour outside the first/last input stop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Round half toward positive infinity (`Math.round` semantics), so that
/// `-2.5` rounds to `-2` rather than `-3`.
#[inline]
pub fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

/// Map `x` through the piecewise-linear curve defined by `input` → `output`.
///
/// `input` must be ascending and both slices must have the same length.
/// Degenerate curves are fail-soft: an empty curve yields `x`, a single stop
/// yields its output.
pub fn interpolate(x: f32, input: &[f32], output: &[f32], extrapolate: Extrapolate) -> f32 {
    let n = input.len().min(output.len());
    match n {
        0 => return x,
        1 => return output[0],
        _ => {}
    }

    // Pick the segment containing x; outermost segments cover the overflow.
    let mut seg = n - 2;
    for i in 1..n {
        if x < input[i] {
            seg = i - 1;
            break;
        }
    }
    let (x0, x1) = (input[seg], input[seg + 1]);
    let (y0, y1) = (output[seg], output[seg + 1]);

    if extrapolate == Extrapolate::Clamp {
        if x <= input[0] {
            return output[0];
        }
        if x >= input[n - 1] {
            return output[n - 1];
        }
    }

    let span = x1 - x0;
    if span.abs() <= f32::EPSILON {
        return if x < x0 { y0 } else { y1 };
    }
    lerp_f32(y0, y1, (x - x0) / span)
}

/// For each offset `v`, produce `(index - v) * item_size`.
pub fn input_range_from_offsets(offsets: &[f32], index: usize, item_size: f32) -> Vec<f32> {
    offsets
        .iter()
        .map(|v| (index as f32 - v) * item_size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_inside_range() {
        let v = interpolate(150.0, &[0.0, 100.0, 200.0], &[0.0, 1.0, 0.0], Extrapolate::Clamp);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clamp_and_extend_differ_outside() {
        let input = [0.0, 1.0];
        let output = [0.7, 1.0];
        assert_eq!(interpolate(2.0, &input, &output, Extrapolate::Clamp), 1.0);
        let extended = interpolate(2.0, &input, &output, Extrapolate::Extend);
        assert!((extended - 1.3).abs() < 1e-6);
        let below = interpolate(-1.0, &input, &output, Extrapolate::Extend);
        assert!((below - 0.4).abs() < 1e-6);
    }

    #[test]
    fn degenerate_curves_fail_soft() {
        assert_eq!(interpolate(3.0, &[], &[], Extrapolate::Clamp), 3.0);
        assert_eq!(interpolate(3.0, &[1.0], &[9.0], Extrapolate::Extend), 9.0);
    }

    #[test]
    fn rounds_half_up_like_the_host() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn input_range_is_item_relative() {
        assert_eq!(
            input_range_from_offsets(&[1.0, 0.0, -1.0], 2, 100.0),
            vec![100.0, 200.0, 300.0]
        );
    }
}
