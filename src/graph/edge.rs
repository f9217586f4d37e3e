//! Weighted edge representation shared by all graph encodings.
//!
//! This module provides the [`Edge`] type, a `(source, destination, weight)` triple, and the
//! [`Weight`] alias used for every edge weight and path length in the crate.
//!
//! Edge identity is defined by its endpoints only: two edges with the same `(source,
//! destination)` pair compare equal and hash identically regardless of their weights. This
//! mirrors how lookups behave in the edge-list encoding, where the first stored entry for a pair
//! answers `has_edge` and `weight` queries.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Integer edge weight and accumulated path length.
pub type Weight = i64;

/// The weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A directed, weighted edge between two vertices.
///
/// Undirected graphs store each logical edge as two `Edge` values, one per direction, with
/// identical weights.
///
/// # Equality
///
/// Equality and hashing only consider the endpoints, so an `Edge` can be used to look up
/// "the edge from `u` to `v`" without knowing its weight:
///
/// ```rust
/// use graphsuite::Edge;
///
/// assert_eq!(Edge::new(0, 1, 5), Edge::new(0, 1, 99));
/// assert_ne!(Edge::new(0, 1, 5), Edge::new(1, 0, 5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// The vertex the edge leaves
    pub source: usize,
    /// The vertex the edge enters
    pub destination: usize,
    /// The weight of the edge
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge from `source` to `destination` with the given weight.
    #[must_use]
    #[inline]
    pub const fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }

    /// Creates a new edge with the default weight of 1.
    #[must_use]
    #[inline]
    pub const fn unit(source: usize, destination: usize) -> Self {
        Edge::new(source, destination, DEFAULT_WEIGHT)
    }

    /// Returns the `(source, destination)` pair of this edge.
    #[must_use]
    #[inline]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.destination)
    }

    /// Returns the same edge pointing in the opposite direction.
    #[must_use]
    #[inline]
    pub const fn reversed(&self) -> Self {
        Edge::new(self.destination, self.source, self.weight)
    }

    /// Returns `true` if the edge starts and ends at the same vertex.
    #[must_use]
    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (w={})", self.source, self.destination, self.weight)
    }
}

impl From<(usize, usize, Weight)> for Edge {
    #[inline]
    fn from((source, destination, weight): (usize, usize, Weight)) -> Self {
        Edge::new(source, destination, weight)
    }
}
