//! Topological ordering of directed acyclic graphs.

use tracing::{debug, instrument, warn};

use crate::{
    algorithms::{cycles::has_cycle, traversal::full_postorder},
    graph::Graph,
    Result,
};

/// Orders the vertices of a DAG so that every edge points forward.
///
/// The order is the reverse of a full depth-first post-order with roots taken in index order.
/// For a fixed graph and insertion order the result is therefore deterministic.
///
/// # Returns
///
/// `Some(order)` for an acyclic graph, `None` if the graph contains a cycle. A cycle is an
/// expected outcome, not an error.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for undirected graphs.
///
/// # Complexity
///
/// O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::topological_sort, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, true, &[(2, 0, 1), (0, 1, 1), (3, 2, 1)])?;
/// assert_eq!(topological_sort(&graph)?, Some(vec![3, 2, 0, 1]));
///
/// let cyclic = AdjacencyList::from_edges(2, true, &[(0, 1, 1), (1, 0, 1)])?;
/// assert_eq!(topological_sort(&cyclic)?, None);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn topological_sort<G: Graph>(graph: &G) -> Result<Option<Vec<usize>>> {
    if !graph.is_directed() {
        warn!("topological sort requested on an undirected graph");
        return Err(invalid_input!("topological sort requires a directed graph"));
    }

    if has_cycle(graph) {
        debug!("graph has a cycle, no topological order");
        return Ok(None);
    }

    let mut order = full_postorder(graph);
    order.reverse();

    debug!(vertices = order.len(), "topological order computed");
    Ok(Some(order))
}
