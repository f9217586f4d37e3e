//! Minimum spanning forests with Kruskal's algorithm.

use tracing::{debug, instrument, trace, warn};

use crate::{
    disjoint_set::DisjointSet,
    graph::{Edge, Graph, Weight},
    Result,
};

/// The edges accepted by [`kruskal`].
///
/// For a connected graph this is a minimum spanning tree with `V - 1` edges. Otherwise it is a
/// minimum spanning forest with one tree per connected component, and `V - C` edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in the order they were accepted, which is ascending weight.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the accepted edge weights, saturating at the bounds of [`Weight`].
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .fold(0, |total, edge| total.saturating_add(edge.weight))
    }

    /// Returns `true` if the forest is a single tree covering every vertex.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }
}

/// Computes a minimum spanning forest of an undirected graph.
///
/// Stored edges are sorted by ascending weight with a stable sort, so ties keep their storage
/// order. Each edge is accepted when its endpoints lie in different sets of a
/// [`DisjointSet`], and the two sets are merged. Self-loops and the stored reverse of an
/// accepted edge are always rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for directed graphs.
///
/// # Complexity
///
/// O(E log E)
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::kruskal, EdgeList, Graph};
///
/// let graph = EdgeList::from_edges(4, false, &[(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 7)])?;
/// let forest = kruskal(&graph)?;
///
/// assert_eq!(forest.total_weight(), 10);
/// assert_eq!(forest.edges().len(), 3);
/// assert!(forest.is_spanning_tree());
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal<G: Graph>(graph: &G) -> Result<SpanningForest> {
    if graph.is_directed() {
        warn!("kruskal requested on a directed graph");
        return Err(invalid_input!(
            "minimum spanning trees require an undirected graph"
        ));
    }

    let mut candidates: Vec<Edge> = graph.edges().collect();
    candidates.sort_by_key(|edge| edge.weight);

    let vertex_count = graph.vertex_count();
    let mut sets = DisjointSet::from_elements(graph.vertices())?;
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    for edge in candidates {
        if accepted.len() + 1 == vertex_count {
            break;
        }
        if sets.union(&edge.source, &edge.destination)? {
            trace!(%edge, "accept");
            accepted.push(edge);
        }
    }

    let forest = SpanningForest {
        edges: accepted,
        vertex_count,
    };
    debug!(
        accepted = forest.edges.len(),
        weight = forest.total_weight(),
        "spanning forest built"
    );
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::connected_components,
        test::{mst_graph, undirected_components_graph},
        AdjacencyList, AdjacencyMatrix, EdgeList, Error,
    };

    fn check_fixture<G: Graph>() {
        let graph: G = mst_graph();
        let forest = kruskal(&graph).unwrap();

        assert_eq!(forest.total_weight(), 148);
        assert_eq!(forest.edges().len(), 12);
        assert!(forest.is_spanning_tree());
    }

    #[test]
    fn test_fixture_all_encodings() {
        check_fixture::<AdjacencyList>();
        check_fixture::<AdjacencyMatrix>();
        check_fixture::<EdgeList>();
    }

    #[test]
    fn test_edges_are_ascending() {
        let graph: EdgeList = mst_graph();
        let forest = kruskal(&graph).unwrap();
        assert!(forest
            .edges()
            .windows(2)
            .all(|pair| pair[0].weight <= pair[1].weight));
        assert_eq!(forest.edges()[0], Edge::new(7, 6, 1));
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let graph: AdjacencyList = undirected_components_graph();
        let forest = kruskal(&graph).unwrap();
        let components = connected_components(&graph).unwrap();

        assert_eq!(
            forest.edges().len(),
            graph.vertex_count() - components.count()
        );
        assert!(!forest.is_spanning_tree());
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let graph = EdgeList::from_edges(3, false, &[(0, 1, 5), (1, 2, 5), (0, 2, 5)]).unwrap();
        let forest = kruskal(&graph).unwrap();
        assert_eq!(forest.edges(), &[Edge::new(0, 1, 5), Edge::new(1, 2, 5)]);
    }

    #[test]
    fn test_total_weight_saturates() {
        let graph = AdjacencyList::from_edges(
            3,
            false,
            &[(0, 1, Weight::MAX - 1), (1, 2, Weight::MAX - 1)],
        )
        .unwrap();
        let forest = kruskal(&graph).unwrap();
        assert_eq!(forest.edges().len(), 2);
        assert_eq!(forest.total_weight(), Weight::MAX);
    }

    #[test]
    fn test_self_loops_are_ignored() {
        let graph = AdjacencyList::from_edges(2, false, &[(0, 0, -3), (0, 1, 2)]).unwrap();
        let forest = kruskal(&graph).unwrap();
        assert_eq!(forest.total_weight(), 2);
    }

    #[test]
    fn test_rejects_directed() {
        let graph = AdjacencyList::new(2, true).unwrap();
        assert!(matches!(kruskal(&graph), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_single_vertex() {
        let graph = EdgeList::new(1, false).unwrap();
        let forest = kruskal(&graph).unwrap();
        assert!(forest.edges().is_empty());
        assert!(forest.is_spanning_tree());
    }
}
