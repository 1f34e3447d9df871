//! The [`CaptureSet`] bitmap of occupied-or-attacked cells.

use crate::id::CellIndex;

/// A fixed-capacity set of cell indices implemented as a packed bitset.
///
/// One bit per cell, 64 cells per `u64` word. A set bit means the cell is
/// occupied by a queen or attacked by one. The capacity is fixed at
/// construction and never grows; bits past the capacity in the last word
/// are always zero.
///
/// Indices must be below [`capacity`](CaptureSet::capacity). The search
/// engine only produces in-range indices, so the check is a
/// `debug_assert!`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureSet {
    bits: Vec<u64>,
    capacity: usize,
}

impl CaptureSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty set able to hold indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            bits: vec![0; words],
            capacity,
        }
    }

    /// Number of addressable cells.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether a cell is captured.
    #[inline]
    pub fn contains(&self, cell: CellIndex) -> bool {
        let i = cell.as_usize();
        debug_assert!(i < self.capacity, "cell {i} out of range {}", self.capacity);
        self.bits[i / Self::BITS_PER_WORD] & (1u64 << (i % Self::BITS_PER_WORD)) != 0
    }

    /// Mark a cell as captured.
    #[inline]
    pub fn insert(&mut self, cell: CellIndex) {
        let i = cell.as_usize();
        debug_assert!(i < self.capacity, "cell {i} out of range {}", self.capacity);
        self.bits[i / Self::BITS_PER_WORD] |= 1u64 << (i % Self::BITS_PER_WORD);
    }

    /// Clear a cell's captured mark.
    #[inline]
    pub fn remove(&mut self, cell: CellIndex) {
        let i = cell.as_usize();
        debug_assert!(i < self.capacity, "cell {i} out of range {}", self.capacity);
        self.bits[i / Self::BITS_PER_WORD] &= !(1u64 << (i % Self::BITS_PER_WORD));
    }

    /// Returns the number of captured cells.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no cell is captured.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// First uncaptured cell at or after `from`, if any.
    ///
    /// Scans whole words, so runs of captured cells are skipped 64 at a time.
    pub fn next_vacant(&self, from: usize) -> Option<CellIndex> {
        if from >= self.capacity {
            return None;
        }
        let mut word_idx = from / Self::BITS_PER_WORD;
        let mut vacant = !self.bits[word_idx] & (u64::MAX << (from % Self::BITS_PER_WORD));
        loop {
            if vacant != 0 {
                let i = word_idx * Self::BITS_PER_WORD + vacant.trailing_zeros() as usize;
                // Padding bits past the capacity read as vacant.
                return (i < self.capacity).then_some(CellIndex(i as u32));
            }
            word_idx += 1;
            if word_idx >= self.bits.len() {
                return None;
            }
            vacant = !self.bits[word_idx];
        }
    }

    /// Iterate over the captured cells, in ascending order.
    pub fn iter(&self) -> CaptureSetIter<'_> {
        CaptureSetIter {
            bits: &self.bits,
            word_idx: 0,
            pending: self.bits.first().copied().unwrap_or(0),
        }
    }
}

impl<'a> IntoIterator for &'a CaptureSet {
    type Item = CellIndex;
    type IntoIter = CaptureSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over captured cells in a [`CaptureSet`], yielding ascending indices.
pub struct CaptureSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    pending: u64,
}

impl Iterator for CaptureSetIter<'_> {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.pending = self.bits[self.word_idx];
        }
        let bit = self.pending.trailing_zeros() as usize;
        self.pending &= self.pending - 1;
        Some(CellIndex((self.word_idx * 64 + bit) as u32))
    }
}
