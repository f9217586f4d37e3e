//! Trait definition shared by every graph encoding.
//!
//! This module defines [`Graph`], the contract implemented by
//! [`AdjacencyList`](crate::AdjacencyList), [`AdjacencyMatrix`](crate::AdjacencyMatrix) and
//! [`EdgeList`](crate::EdgeList). Algorithms are written against the trait so that every
//! algorithm runs on every encoding.
//!
//! # Architecture
//!
//! The trait is split into two layers:
//!
//! - **Checked operations** (`add_edge`, `has_edge`, `weight`, `neighbors`, ...) validate
//!   their vertex arguments and fail with [`Error::OutOfRange`](crate::Error::OutOfRange).
//!   These form the public contract of a graph.
//! - **Unchecked iteration** ([`adjacent`](Graph::adjacent), [`edges`](Graph::edges)) returns
//!   lazy iterators without validation. Algorithms validate their inputs once up front and then
//!   use these in their inner loops.
//!
//! # Design Principles
//!
//! ## Dense Vertex Indices
//!
//! Vertices are the integers `0..vertex_count`, fixed at construction. Vertices are never
//! removed, so per-vertex algorithm state is a plain vector indexed by vertex.
//!
//! ## Logical Edge Counting
//!
//! `edge_count` counts logical edges: adding an undirected edge stores both directions but
//! increments the count once.

use std::ops::Range;

use crate::{
    graph::edge::{Edge, Weight, DEFAULT_WEIGHT},
    Error, Result,
};

/// Common contract of the in-memory graph encodings.
///
/// # Required Methods
///
/// - [`new`](Graph::new) - Creates an empty graph with a fixed vertex count
/// - [`vertex_count`](Graph::vertex_count), [`edge_count`](Graph::edge_count) - Sizes
/// - [`is_directed`](Graph::is_directed), [`has_negative_weight`](Graph::has_negative_weight) - Flags
/// - [`add_edge`](Graph::add_edge), [`has_edge`](Graph::has_edge), [`weight`](Graph::weight) - Edge access
/// - [`adjacent`](Graph::adjacent), [`edges`](Graph::edges) - Unchecked iteration
///
/// # Examples
///
/// ```rust
/// use graphsuite::{AdjacencyList, EdgeList, Graph};
///
/// fn total_weight<G: Graph>(graph: &G) -> i64 {
///     graph.edges().map(|edge| edge.weight).sum()
/// }
///
/// let directed = AdjacencyList::from_edges(3, true, &[(0, 1, 4), (1, 2, 5)])?;
/// let undirected = EdgeList::from_edges(3, false, &[(0, 1, 4)])?;
///
/// assert_eq!(total_weight(&directed), 9);
/// // Undirected edges are stored once per direction
/// assert_eq!(total_weight(&undirected), 8);
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub trait Graph {
    /// Creates an empty graph with `vertex_count` vertices.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Number of vertices, must be at least 1
    /// * `directed` - `true` for a directed graph, `false` for an undirected one
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `vertex_count` is zero.
    fn new(vertex_count: usize, directed: bool) -> Result<Self>
    where
        Self: Sized;

    /// Creates a graph and adds every `(source, destination, weight)` triple in order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`new`](Graph::new) or [`add_edge`](Graph::add_edge).
    fn from_edges(
        vertex_count: usize,
        directed: bool,
        edges: &[(usize, usize, Weight)],
    ) -> Result<Self>
    where
        Self: Sized,
    {
        let mut graph = Self::new(vertex_count, directed)?;
        for &(source, destination, weight) in edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical edges added so far.
    fn edge_count(&self) -> usize;

    /// Returns `true` if the graph is directed.
    fn is_directed(&self) -> bool;

    /// Returns `true` once an edge with a negative weight has been added.
    fn has_negative_weight(&self) -> bool;

    /// Adds an edge from `source` to `destination` with the given weight.
    ///
    /// On an undirected graph both directions are stored atomically and the edge count grows
    /// by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex of the graph. Nothing
    /// is stored in that case.
    fn add_edge(&mut self, source: usize, destination: usize, weight: Weight) -> Result<()>;

    /// Adds an edge with the default weight of 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex of the graph.
    fn add_unit_edge(&mut self, source: usize, destination: usize) -> Result<()> {
        self.add_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Returns `true` if an edge from `source` to `destination` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex of the graph.
    fn has_edge(&self, source: usize, destination: usize) -> Result<bool>;

    /// Returns the weight of the edge from `source` to `destination`.
    ///
    /// When several edges share the same endpoints, the result depends on the encoding: the
    /// list encodings return the first one added, while an
    /// [`AdjacencyMatrix`](crate::AdjacencyMatrix) keeps only the last weight written to
    /// the pair.
    ///
    /// # Returns
    ///
    /// `Some(weight)` if the edge exists, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either endpoint is not a vertex of the graph.
    fn weight(&self, source: usize, destination: usize) -> Result<Option<Weight>>;

    /// Returns an iterator over the `(neighbor, weight)` pairs leaving `vertex`.
    ///
    /// Pairs are yielded in insertion order for encodings that keep one, which makes every
    /// traversal built on top of this method deterministic.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a vertex of the graph. Use [`neighbors`](Graph::neighbors)
    /// for a checked variant.
    fn adjacent(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)>;

    /// Returns an iterator over every stored directed edge.
    ///
    /// Undirected graphs yield each logical edge twice, once per direction.
    fn edges(&self) -> impl Iterator<Item = Edge>;

    /// Returns the `(neighbor, weight)` pairs leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `vertex` is not a vertex of the graph.
    fn neighbors(&self, vertex: usize) -> Result<Vec<(usize, Weight)>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacent(vertex).collect())
    }

    /// Returns the number of stored edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `vertex` is not a vertex of the graph.
    fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacent(vertex).count())
    }

    /// Returns the range of all vertex indices.
    fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Validates that `vertex` is in `0..vertex_count`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] otherwise.
    fn check_vertex(&self, vertex: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count,
            })
        }
    }

    /// Returns the reverse graph.
    ///
    /// Only a directed [`AdjacencyList`](crate::AdjacencyList) flips its edges; every other
    /// graph returns an identical copy of itself. Algorithms that need a real transpose of an
    /// arbitrary encoding use [`AdjacencyList::transpose_of`](crate::AdjacencyList::transpose_of).
    #[must_use]
    fn reverse(&self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }
}
