//! Per-slide extents along the scroll axis.

use serde::{Deserialize, Serialize};

/// `[start, end)` extent of one slide, in scroll-offset units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f32,
    pub end: f32,
}

/// Contiguous, non-overlapping bands, one per custom index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    bands: Vec<Band>,
}

impl PositionTable {
    pub fn compute(len: usize, item_size: f32) -> Self {
        let bands = (0..len)
            .map(|i| {
                let start = i as f32 * item_size;
                Band {
                    start,
                    end: start + item_size,
                }
            })
            .collect();
        Self { bands }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[inline]
    pub fn band(&self, index: usize) -> Option<Band> {
        self.bands.get(index).copied()
    }

    /// Scroll offset that aligns `index` with the active slot.
    #[inline]
    pub fn start(&self, index: usize) -> Option<f32> {
        self.bands.get(index).map(|b| b.start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        self.bands.iter()
    }

    /// First slide whose band, widened by `tolerance` on both sides, contains
    /// `center`. Past the last band the last index wins; otherwise 0.
    pub fn index_at(&self, center: f32, tolerance: f32) -> usize {
        if let Some(i) = self
            .bands
            .iter()
            .position(|b| center + tolerance >= b.start && center - tolerance <= b.end)
        {
            return i;
        }
        match self.bands.last() {
            Some(last) if center - tolerance > last.end => self.bands.len() - 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_contiguous() {
        let table = PositionTable::compute(4, 75.0);
        assert_eq!(table.len(), 4);
        for (a, b) in table.iter().zip(table.iter().skip(1)) {
            assert_eq!(a.end, b.start);
        }
        assert_eq!(table.band(3), Some(Band { start: 225.0, end: 300.0 }));
    }

    #[test]
    fn empty_table() {
        let table = PositionTable::compute(0, 75.0);
        assert!(table.is_empty());
        assert_eq!(table.start(0), None);
        assert_eq!(table.index_at(100.0, 20.0), 0);
    }

    #[test]
    fn index_at_handles_overflow() {
        let table = PositionTable::compute(3, 100.0);
        assert_eq!(table.index_at(150.0, 0.0), 1);
        assert_eq!(table.index_at(10_000.0, 20.0), 2);
        assert_eq!(table.index_at(-500.0, 20.0), 0);
    }
}
