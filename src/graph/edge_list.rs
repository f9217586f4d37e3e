//! Edge-list graph encoding.
//!
//! [`EdgeList`] keeps the stored edges in a single vector. It is the most compact encoding
//! and the natural input for edge-driven algorithms such as Kruskal and Bellman-Ford, at
//! the cost of O(E) edge lookup and neighbor enumeration.

use std::fmt;

use tracing::trace;

use crate::{
    graph::{
        edge::{Edge, Weight},
        traits::Graph,
    },
    Result,
};

/// A graph stored as a flat list of edges.
///
/// An undirected edge is stored as two entries, `(u, v)` followed by `(v, u)`. Lookups scan
/// the list and report the first matching entry.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{EdgeList, Graph};
///
/// let graph = EdgeList::from_edges(3, false, &[(0, 1, 9), (1, 2, 4)])?;
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.stored().len(), 4);
/// let weights: Vec<_> = graph.sorted_by_weight().iter().map(|e| e.weight).collect();
/// assert_eq!(weights, vec![4, 4, 9, 9]);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Stored directed edges in insertion order
    edges: Vec<Edge>,
    /// Number of vertices
    vertex_count: usize,
    /// Number of logical edges
    edge_count: usize,
    /// Whether edges are one-way
    directed: bool,
    /// Set once a negative weight is added
    negative_weight: bool,
}

impl EdgeList {
    /// Returns the stored directed edges in insertion order.
    #[must_use]
    pub fn stored(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns a copy of the stored edges sorted by ascending weight.
    ///
    /// The sort is stable: edges of equal weight keep their insertion order. The graph
    /// itself is not modified.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<Edge> {
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(|edge| edge.weight);
        sorted
    }
}

impl Graph for EdgeList {
    fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        if vertex_count == 0 {
            return Err(invalid_input!("a graph needs at least one vertex"));
        }

        Ok(EdgeList {
            edges: Vec::new(),
            vertex_count,
            edge_count: 0,
            directed,
            negative_weight: false,
        })
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    fn has_negative_weight(&self) -> bool {
        self.negative_weight
    }

    fn add_edge(&mut self, source: usize, destination: usize, weight: Weight) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        trace!(source, destination, weight, "edge list: add edge");
        let edge = Edge::new(source, destination, weight);
        self.edges.push(edge);
        if !self.directed {
            self.edges.push(edge.reversed());
        }

        self.edge_count += 1;
        if weight < 0 {
            self.negative_weight = true;
        }
        Ok(())
    }

    fn has_edge(&self, source: usize, destination: usize) -> Result<bool> {
        Ok(self.weight(source, destination)?.is_some())
    }

    fn weight(&self, source: usize, destination: usize) -> Result<Option<Weight>> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        Ok(self
            .edges
            .iter()
            .find(|edge| edge.endpoints() == (source, destination))
            .map(|edge| edge.weight))
    }

    fn adjacent(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> {
        self.edges
            .iter()
            .filter(move |edge| edge.source == vertex)
            .map(|edge| (edge.destination, edge.weight))
    }

    fn edges(&self) -> impl Iterator<Item = Edge> {
        self.edges.iter().copied()
    }
}

impl fmt::Display for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "edge list ({}): {} vertices, {} edges",
            if self.directed { "directed" } else { "undirected" },
            self.vertex_count(),
            self.edge_count
        )?;
        for edge in self.edges() {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}
