//! Adjacency-list graph encoding.
//!
//! This module provides [`AdjacencyList`], the default encoding used by the algorithms in
//! this crate. Each vertex owns a vector of `(neighbor, weight)` pairs in insertion order,
//! which gives O(1) edge insertion and O(out-degree) neighbor enumeration.

use std::fmt;

use tracing::trace;

use crate::{
    graph::{
        edge::{Edge, Weight},
        traits::Graph,
    },
    Result,
};

/// A graph stored as one neighbor list per vertex.
///
/// Undirected edges are stored once in each endpoint's list. Parallel edges and self-loops
/// are kept as added.
///
/// # Memory Layout
///
/// - `lists[v]` holds the `(neighbor, weight)` pairs leaving `v`
/// - The edge count is tracked separately and counts logical edges
///
/// # Examples
///
/// ```rust
/// use graphsuite::{AdjacencyList, Graph};
///
/// let mut graph = AdjacencyList::new(3, false)?;
/// graph.add_edge(0, 1, 5)?;
/// graph.add_unit_edge(1, 2)?;
///
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge(1, 0)?);
/// assert_eq!(graph.neighbors(1)?, vec![(0, 5), (2, 1)]);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    /// Outgoing `(neighbor, weight)` pairs per vertex
    lists: Vec<Vec<(usize, Weight)>>,
    /// Number of logical edges
    edge_count: usize,
    /// Whether edges are one-way
    directed: bool,
    /// Set once a negative weight is added
    negative_weight: bool,
}

impl AdjacencyList {
    /// Builds the transpose of any graph as an adjacency list.
    ///
    /// Every stored edge `u -> v` of `graph` becomes `v -> u` in the result. For an undirected
    /// graph both stored directions are flipped, so the result is equivalent to the input.
    /// The directedness, edge count and negative-weight flag are preserved.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to transpose
    ///
    /// # Returns
    ///
    /// A new adjacency list with all stored edges reversed.
    ///
    /// # Complexity
    ///
    /// O(V + E)
    #[must_use]
    pub fn transpose_of<G: Graph>(graph: &G) -> Self {
        let mut lists = vec![Vec::new(); graph.vertex_count()];
        for edge in graph.edges() {
            lists[edge.destination].push((edge.source, edge.weight));
        }

        AdjacencyList {
            lists,
            edge_count: graph.edge_count(),
            directed: graph.is_directed(),
            negative_weight: graph.has_negative_weight(),
        }
    }
}

impl Graph for AdjacencyList {
    fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        if vertex_count == 0 {
            return Err(invalid_input!("a graph needs at least one vertex"));
        }

        Ok(AdjacencyList {
            lists: vec![Vec::new(); vertex_count],
            edge_count: 0,
            directed,
            negative_weight: false,
        })
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.lists.len()
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

        trace!(source, destination, weight, "adjacency list: add edge");
        self.lists[source].push((destination, weight));
        if !self.directed {
            self.lists[destination].push((source, weight));
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

        Ok(self.lists[source]
            .iter()
            .find(|&&(neighbor, _)| neighbor == destination)
            .map(|&(_, weight)| weight))
    }

    #[inline]
    fn adjacent(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> {
        self.lists[vertex].iter().copied()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> {
        self.lists.iter().enumerate().flat_map(|(source, list)| {
            list.iter()
                .map(move |&(destination, weight)| Edge::new(source, destination, weight))
        })
    }

    /// Returns the reverse graph.
    ///
    /// A directed graph gets every edge flipped. An undirected graph is returned unchanged.
    fn reverse(&self) -> Self {
        if self.directed {
            AdjacencyList::transpose_of(self)
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "adjacency list ({}): {} vertices, {} edges",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            AdjacencyList::new(0, true),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = AdjacencyList::new(4, true).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
        assert!(!graph.has_negative_weight());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = AdjacencyList::new(3, true).unwrap();
        graph.add_edge(0, 2, 9).unwrap();

        assert!(graph.has_edge(0, 2).unwrap());
        assert!(!graph.has_edge(2, 0).unwrap());
        assert_eq!(graph.weight(0, 2).unwrap(), Some(9));
        assert_eq!(graph.weight(2, 0).unwrap(), None);
    }

    #[test]
    fn test_undirected_edge_stored_twice_counted_once() {
        let mut graph = AdjacencyList::new(3, false).unwrap();
        graph.add_edge(0, 2, 9).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 2);
        assert!(graph.has_edge(2, 0).unwrap());
    }

    #[test]
    fn test_add_edge_out_of_range_leaves_graph_unchanged() {
        let mut graph = AdjacencyList::new(3, false).unwrap();
        let err = graph.add_edge(1, 3, 1).unwrap_err();

        assert_eq!(
            err,
            Error::OutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(1).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let graph =
            AdjacencyList::from_edges(4, true, &[(0, 3, 1), (0, 1, 2), (0, 2, 3)]).unwrap();
        assert_eq!(graph.neighbors(0).unwrap(), vec![(3, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_parallel_edges_first_weight_wins() {
        let graph = AdjacencyList::from_edges(2, true, &[(0, 1, 4), (0, 1, 2)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(0, 1).unwrap(), Some(4));
    }

    #[test]
    fn test_negative_weight_flag() {
        let mut graph = AdjacencyList::new(2, true).unwrap();
        graph.add_edge(0, 1, 3).unwrap();
        assert!(!graph.has_negative_weight());
        graph.add_edge(1, 0, -1).unwrap();
        assert!(graph.has_negative_weight());
    }

    #[test]
    fn test_reverse_directed() {
        let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 5), (1, 2, 6)]).unwrap();
        let reversed = graph.reverse();

        assert!(reversed.has_edge(1, 0).unwrap());
        assert!(reversed.has_edge(2, 1).unwrap());
        assert!(!reversed.has_edge(0, 1).unwrap());
        assert_eq!(reversed.weight(2, 1).unwrap(), Some(6));
        assert_eq!(reversed.edge_count(), 2);
    }

    #[test]
    fn test_reverse_undirected_is_identity() {
        let graph = AdjacencyList::from_edges(3, false, &[(0, 1, 5)]).unwrap();
        assert_eq!(graph.reverse(), graph);
    }

    #[test]
    fn test_display_lists_edges() {
        let graph = AdjacencyList::from_edges(2, true, &[(0, 1, 3)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "adjacency list (directed): 2 vertices, 1 edges\n  0 -> 1 (w=3)\n"
        );
    }

    #[test]
    fn test_self_loop() {
        let graph = AdjacencyList::from_edges(2, false, &[(1, 1, 3)]).unwrap();
        assert!(graph.has_edge(1, 1).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }
}
