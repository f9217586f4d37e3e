//! Internal helpers shared by the algorithms.

mod bitset;

pub(crate) use bitset::BitSet;
