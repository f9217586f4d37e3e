//! Single-source Dijkstra.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument, trace};

use crate::{
    algorithms::shortest_path::{ensure_non_negative, ShortestPathTree},
    graph::{Graph, Weight},
    utils::BitSet,
    Result,
};

/// Computes shortest distances from `source` with Dijkstra's algorithm.
///
/// Uses a binary heap keyed by tentative distance. Superseded heap entries are skipped when
/// popped through a settled check, so every vertex relaxes its edges exactly once.
///
/// # Arguments
///
/// * `graph` - The graph to search, with non-negative weights
/// * `source` - The start vertex
///
/// # Errors
///
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) if `source` is not a vertex of `graph`
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) if `graph` has a negative weight
///
/// # Complexity
///
/// O((V + E) log V)
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::dijkstra, EdgeList, Graph};
///
/// let graph = EdgeList::from_edges(3, false, &[(0, 1, 2), (1, 2, 2), (0, 2, 5)])?;
/// let tree = dijkstra(&graph, 2)?;
/// assert_eq!(tree.distance(0)?, Some(4));
/// assert_eq!(tree.path(0)?, Some(vec![2, 1, 0]));
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<G: Graph>(graph: &G, source: usize) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;
    ensure_non_negative(graph, "Dijkstra")?;

    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    let mut settled = BitSet::new(vertex_count);
    let mut heap: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();

    distances[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, vertex))) = heap.pop() {
        if !settled.insert(vertex) {
            continue;
        }

        for (neighbor, weight) in graph.adjacent(vertex) {
            let candidate = distance.saturating_add(weight);
            if distances[neighbor].is_none_or(|current| candidate < current) {
                trace!(vertex, neighbor, candidate, "relax");
                distances[neighbor] = Some(candidate);
                predecessors[neighbor] = Some(vertex);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    debug!(settled = settled.count(), "dijkstra finished");
    Ok(ShortestPathTree::new(source, distances, predecessors, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::reference_graph, AdjacencyList, AdjacencyMatrix, EdgeList, Error};

    fn check_reference_graph<G: Graph>() {
        let graph: G = reference_graph();
        let tree = dijkstra(&graph, 6).unwrap();

        assert_eq!(tree.distance(6).unwrap(), Some(0));
        assert_eq!(tree.distance(3).unwrap(), Some(23));
        assert_eq!(tree.path(3).unwrap(), Some(vec![6, 4, 2, 3]));
        assert_eq!(tree.distance(0).unwrap(), Some(10));
        assert_eq!(tree.distance(12).unwrap(), Some(45));
        assert_eq!(tree.distance(7).unwrap(), None);
    }

    #[test]
    fn test_reference_graph_all_encodings() {
        check_reference_graph::<AdjacencyList>();
        check_reference_graph::<AdjacencyMatrix>();
        check_reference_graph::<EdgeList>();
    }

    #[test]
    fn test_rejects_negative_weights() {
        let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 2), (1, 2, -1)]).unwrap();
        assert!(matches!(dijkstra(&graph, 0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 0), (1, 2, 0)]).unwrap();
        let tree = dijkstra(&graph, 0).unwrap();
        assert_eq!(tree.distance(2).unwrap(), Some(0));
        assert_eq!(tree.path(2).unwrap(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_stale_entries_do_not_override() {
        // 0 -> 2 is pushed with 10 before the cheaper 0 -> 1 -> 2 route
        let graph =
            AdjacencyList::from_edges(3, true, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]).unwrap();
        let tree = dijkstra(&graph, 0).unwrap();
        assert_eq!(tree.distance(2).unwrap(), Some(2));
        assert_eq!(tree.predecessor(2).unwrap(), Some(1));
    }

    #[test]
    fn test_source_out_of_range() {
        let graph = AdjacencyList::new(1, true).unwrap();
        assert!(matches!(
            dijkstra(&graph, 1),
            Err(Error::OutOfRange { .. })
        ));
    }
}
