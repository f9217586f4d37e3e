//! Breadth-first shortest paths, measured in hops.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    algorithms::shortest_path::{ensure_non_negative, ShortestPathTree},
    graph::{Graph, Weight},
    Result,
};

/// Computes the fewest-edges path from `source` to every vertex.
///
/// Edge weights are ignored: the distance of a vertex is the number of edges on its most
/// direct path. Neighbors are explored in adjacency order, so among several equally short
/// paths the one through the earliest-listed neighbors wins.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The start vertex
///
/// # Errors
///
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) if `source` is not a vertex of `graph`
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) if `graph` has a negative weight
///
/// # Complexity
///
/// O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::bfs_shortest_paths, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, false, &[(0, 1, 9), (1, 2, 9), (0, 3, 1), (3, 2, 1)])?;
/// let tree = bfs_shortest_paths(&graph, 0)?;
///
/// assert_eq!(tree.distance(2)?, Some(2));
/// assert_eq!(tree.path(2)?, Some(vec![0, 1, 2]));
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bfs_shortest_paths<G: Graph>(graph: &G, source: usize) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;
    ensure_non_negative(graph, "breadth-first shortest paths")?;

    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    distances[source] = Some(0);

    let mut queue = VecDeque::from([source]);
    while let Some(vertex) = queue.pop_front() {
        let hops = distances[vertex].unwrap_or(0) + 1;
        for (neighbor, _) in graph.adjacent(vertex) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(hops);
                predecessors[neighbor] = Some(vertex);
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        reached = distances.iter().filter(|d| d.is_some()).count(),
        "breadth-first search finished"
    );
    Ok(ShortestPathTree::new(source, distances, predecessors, false))
}
