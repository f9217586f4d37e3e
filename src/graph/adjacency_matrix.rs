//! Adjacency-matrix graph encoding.
//!
//! [`AdjacencyMatrix`] stores one weight slot per ordered vertex pair in a flat row-major
//! vector. Edge lookup is O(1) while neighbor enumeration is O(V). Empty slots hold the
//! reserved [`NO_EDGE`] weight, which therefore cannot be used as an edge weight.

use std::fmt;

use tracing::{trace, warn};

use crate::{
    graph::{
        edge::{Edge, Weight},
        traits::Graph,
    },
    Result,
};

/// Marker stored in slots without an edge.
pub const NO_EDGE: Weight = Weight::MIN;

/// A graph stored as a `V x V` weight matrix.
///
/// Each ordered pair holds at most one edge. Adding an edge over an existing one overwrites
/// the stored weight but still counts as a new edge in [`edge_count`](Graph::edge_count).
///
/// # Examples
///
/// ```rust
/// use graphsuite::{AdjacencyMatrix, Graph};
///
/// let mut graph = AdjacencyMatrix::new(3, true)?;
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(2, 1, -2)?;
///
/// assert_eq!(graph.weight(2, 1)?, Some(-2));
/// assert!(graph.has_negative_weight());
/// assert!(graph.add_edge(0, 2, i64::MIN).is_err());
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Row-major weights, `NO_EDGE` where absent
    cells: Vec<Weight>,
    /// Number of vertices, the matrix side length
    vertex_count: usize,
    /// Number of logical edges added
    edge_count: usize,
    /// Whether edges are one-way
    directed: bool,
    /// Set once a negative weight is added
    negative_weight: bool,
}

impl AdjacencyMatrix {
    #[inline]
    fn slot(&self, source: usize, destination: usize) -> usize {
        source * self.vertex_count + destination
    }
}

impl Graph for AdjacencyMatrix {
    fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        if vertex_count == 0 {
            return Err(invalid_input!("a graph needs at least one vertex"));
        }

        let Some(cells) = vertex_count.checked_mul(vertex_count) else {
            return Err(invalid_input!(
                "{} vertices exceed the matrix capacity",
                vertex_count
            ));
        };

        Ok(AdjacencyMatrix {
            cells: vec![NO_EDGE; cells],
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
        if weight == NO_EDGE {
            warn!(source, destination, "adjacency matrix: reserved weight rejected");
            return Err(invalid_input!(
                "weight {} is reserved by the adjacency matrix",
                weight
            ));
        }

        trace!(source, destination, weight, "adjacency matrix: set edge");
        let forward = self.slot(source, destination);
        self.cells[forward] = weight;
        if !self.directed {
            let backward = self.slot(destination, source);
            self.cells[backward] = weight;
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

        let weight = self.cells[self.slot(source, destination)];
        Ok((weight != NO_EDGE).then_some(weight))
    }

    fn adjacent(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> {
        let start = vertex * self.vertex_count;
        self.cells[start..start + self.vertex_count]
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != NO_EDGE)
            .map(|(neighbor, &weight)| (neighbor, weight))
    }

    fn edges(&self) -> impl Iterator<Item = Edge> {
        let side = self.vertex_count;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != NO_EDGE)
            .map(move |(slot, &weight)| Edge::new(slot / side, slot % side, weight))
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "adjacency matrix ({}): {} vertices, {} edges",
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
