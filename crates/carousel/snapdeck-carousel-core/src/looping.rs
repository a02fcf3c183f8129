//! Custom (clone-padded) index ↔ data index mapping.
//!
//! Looping pads the data with `C` clones on each side: the tail of the data
//! (wrapping through the whole set when `C > N`) before the head, and the
//! head after the tail. The padded sequence is never materialized; every
//! custom position maps back to its data index as `(i - C) mod N`.

use serde::{Deserialize, Serialize};

/// Loop geometry for a data set of length `N` with `C` clones per side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopMapper {
    data_len: usize,
    clones: usize,
    looping: bool,
}

impl LoopMapper {
    /// Looping only takes effect with snapping on and more than one item.
    pub fn new(data_len: usize, clones_per_side: usize, loop_enabled: bool, snap_enabled: bool) -> Self {
        Self {
            data_len,
            clones: clones_per_side,
            looping: loop_enabled && snap_enabled && data_len > 1,
        }
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    /// Effective clones per side (0 when not looping).
    #[inline]
    pub fn clones(&self) -> usize {
        if self.looping {
            self.clones
        } else {
            0
        }
    }

    #[inline]
    pub fn custom_len(&self) -> usize {
        self.data_len + 2 * self.clones()
    }

    /// Data index rendered at custom position `custom`.
    pub fn to_data_index(&self, custom: usize) -> usize {
        if !self.looping || self.data_len == 0 {
            return custom;
        }
        let n = self.data_len as isize;
        (custom as isize - self.clones as isize).rem_euclid(n) as usize
    }

    /// Custom position of the real (non-clone) copy of `data_index`.
    #[inline]
    pub fn to_custom_index(&self, data_index: usize) -> usize {
        data_index + self.clones()
    }

    /// Custom index of the initially shown item; out-of-range requests fall
    /// back to the first item.
    pub fn first_item_custom_index(&self, requested: usize) -> usize {
        if self.data_len == 0 || requested >= self.data_len {
            return 0;
        }
        self.to_custom_index(requested)
    }

    #[inline]
    pub fn is_clone(&self, custom: usize) -> bool {
        self.looping && (custom < self.clones || custom >= self.data_len + self.clones)
    }

    /// Equivalent position one data length closer to the real band, for
    /// slides that landed on a clone.
    pub fn reposition_target(&self, custom: usize) -> Option<usize> {
        if !self.is_clone(custom) {
            return None;
        }
        if custom >= self.data_len + self.clones {
            Some(custom - self.data_len)
        } else {
            Some(custom + self.data_len)
        }
    }

    /// The padded sequence as references into `data`.
    pub fn custom_data<'a, T>(&'a self, data: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let len = if data.is_empty() { 0 } else { self.custom_len() };
        (0..len).filter_map(move |i| data.get(self.to_data_index(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_loop_is_identity() {
        let m = LoopMapper::new(4, 3, false, true);
        assert_eq!(m.custom_len(), 4);
        assert_eq!(m.to_data_index(2), 2);
        assert_eq!(m.first_item_custom_index(3), 3);
        assert_eq!(m.reposition_target(0), None);
    }

    #[test]
    fn single_item_never_loops() {
        let m = LoopMapper::new(1, 3, true, true);
        assert!(!m.is_looping());
        assert_eq!(m.custom_len(), 1);
    }

    #[test]
    fn snap_disabled_never_loops() {
        assert!(!LoopMapper::new(5, 2, true, false).is_looping());
    }

    #[test]
    fn more_clones_than_items() {
        let data = ["a", "b", "c"];
        let m = LoopMapper::new(3, 2, true, true);
        assert_eq!(m.custom_len(), 7);
        let padded: Vec<_> = m.custom_data(&data).copied().collect();
        assert_eq!(padded, vec!["b", "c", "a", "b", "c", "a", "b"]);
        assert_eq!(m.to_data_index(0), 1);
        assert_eq!(m.to_data_index(2), 0);
        assert_eq!(m.to_data_index(6), 1);

        let m = LoopMapper::new(2, 5, true, true);
        let padded: Vec<_> = m.custom_data(&["x", "y"]).copied().collect();
        assert_eq!(padded, vec!["y", "x", "y", "x", "y", "x", "y", "x", "y", "x", "y", "x"]);
    }

    #[test]
    fn reposition_moves_into_real_band() {
        let m = LoopMapper::new(4, 2, true, true);
        assert_eq!(m.reposition_target(1), Some(5));
        assert_eq!(m.reposition_target(6), Some(2));
        assert_eq!(m.reposition_target(3), None);
        assert_eq!(m.to_data_index(m.reposition_target(6).unwrap()), m.to_data_index(6));
    }

    #[test]
    fn first_item_out_of_range() {
        let m = LoopMapper::new(4, 2, true, true);
        assert_eq!(m.first_item_custom_index(1), 3);
        assert_eq!(m.first_item_custom_index(4), 0);
        assert_eq!(LoopMapper::new(0, 2, true, true).first_item_custom_index(0), 0);
    }
}
