//! A fixed-capacity bit set over vertex indices.
//!
//! Traversals track visited vertices in a [`BitSet`] sized to the vertex count of the graph,
//! which keeps the per-vertex marker at one bit and makes membership checks a shift and a mask.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut visited = BitSet::new(100);
//! assert!(visited.insert(50));
//! assert!(!visited.insert(50));
//! assert!(visited.contains(50));
//! assert_eq!(visited.count(), 1);
//! ```

/// A bit vector holding a subset of `0..capacity`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, 64 per word.
    words: Vec<u64>,
    /// The number of addressable bits.
    len: usize,
}

impl BitSet {
    /// Creates an empty bit set able to hold `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            len: capacity,
        }
    }

    /// Sets the bit at `index`.
    ///
    /// # Returns
    ///
    /// `true` if the bit was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        let mask = 1u64 << (index % 64);
        let word = &mut self.words[index / 64];
        let was_clear = *word & mask == 0;
        *word |= mask;
        was_clear
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        (self.words[index / 64] & (1u64 << (index % 64))) != 0
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns an iterator over the indices of set bits in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            set: self,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits in a [`BitSet`].
pub struct BitSetIter<'a> {
    set: &'a BitSet,
    word_idx: usize,
    /// Remaining bits of the current word
    current: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * 64 + bit);
            }
            self.word_idx += 1;
            self.current = *self.set.words.get(self.word_idx)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_basic() {
        let mut bs = BitSet::new(100);
        assert_eq!(bs.count(), 0);

        assert!(bs.insert(0));
        assert!(bs.insert(50));
        assert!(bs.insert(99));
        assert!(!bs.insert(50));

        assert!(bs.contains(0));
        assert!(bs.contains(99));
        assert!(!bs.contains(1));
        assert_eq!(bs.count(), 3);
    }

    #[test]
    fn test_bitset_iter_crosses_words() {
        let mut bs = BitSet::new(200);
        for i in [3, 63, 64, 130, 199] {
            bs.insert(i);
        }
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![3, 63, 64, 130, 199]);
    }

    #[test]
    fn test_bitset_zero_capacity() {
        let bs = BitSet::new(0);
        assert_eq!(bs.count(), 0);
        assert_eq!(bs.iter().next(), None);
    }

    #[test]
    fn test_bitset_debug() {
        let mut bs = BitSet::new(8);
        bs.insert(1);
        bs.insert(5);
        assert_eq!(format!("{bs:?}"), "{1, 5}");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bitset_out_of_bounds() {
        let mut bs = BitSet::new(4);
        bs.insert(4);
    }
}
