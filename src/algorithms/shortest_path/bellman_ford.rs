//! Single-source Bellman-Ford with optional negative-cycle detection.

use tracing::{debug, instrument, trace, warn};

use crate::{
    algorithms::shortest_path::{ShortestPathConfig, ShortestPathTree},
    graph::{Edge, Graph, Weight},
    Error, Result,
};

/// Relaxes every edge once, returning `true` if any distance improved.
fn relax_all(
    edges: &[Edge],
    distances: &mut [Option<Weight>],
    predecessors: &mut [Option<usize>],
) -> bool {
    let mut changed = false;
    for edge in edges {
        let Some(base) = distances[edge.source] else {
            continue;
        };
        let candidate = base.saturating_add(edge.weight);
        if distances[edge.destination].is_none_or(|current| candidate < current) {
            trace!(%edge, candidate, "relax");
            distances[edge.destination] = Some(candidate);
            predecessors[edge.destination] = Some(edge.source);
            changed = true;
        }
    }
    changed
}

/// Computes shortest distances from `source` with the default [`ShortestPathConfig`].
///
/// Negative weights are supported. A negative cycle reachable from the source is flagged
/// through [`ShortestPathTree::has_negative_cycle`]; distances on such a graph are the values
/// reached after `|V| - 1` rounds.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `source` is not a vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::bellman_ford, EdgeList, Graph};
///
/// let graph = EdgeList::from_edges(3, true, &[(0, 1, 4), (0, 2, 5), (2, 1, -3)])?;
/// let tree = bellman_ford(&graph, 0)?;
///
/// assert_eq!(tree.distance(1)?, Some(2));
/// assert_eq!(tree.path(1)?, Some(vec![0, 2, 1]));
/// assert!(!tree.has_negative_cycle());
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub fn bellman_ford<G: Graph>(graph: &G, source: usize) -> Result<ShortestPathTree> {
    bellman_ford_with(graph, source, ShortestPathConfig::default())
}

/// Computes shortest distances from `source` with an explicit configuration.
///
/// Runs at most `|V| - 1` relaxation passes over the stored edges, stopping early when
/// `config.early_exit` is set and a pass changes nothing. With `config.detect_negative_cycles`
/// one more pass is run; any improvement in it proves a reachable negative cycle.
///
/// # Arguments
///
/// * `graph` - The graph to search, negative weights allowed
/// * `source` - The start vertex
/// * `config` - Negative cycle handling
///
/// # Errors
///
/// - [`Error::OutOfRange`] if `source` is not a vertex of `graph`
/// - [`Error::NegativeCycle`] if a cycle is detected and `config.reject_negative_cycles` is set
///
/// # Complexity
///
/// O(V · E)
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford_with<G: Graph>(
    graph: &G,
    source: usize,
    config: ShortestPathConfig,
) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertex_count();
    let edges: Vec<Edge> = graph.edges().collect();
    let mut distances: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    distances[source] = Some(0);

    let mut passes = 0;
    let mut converged = false;
    while passes + 1 < vertex_count {
        passes += 1;
        if !relax_all(&edges, &mut distances, &mut predecessors) && config.early_exit {
            converged = true;
            break;
        }
    }

    let negative_cycle = config.detect_negative_cycles && !converged && {
        let mut probe_distances = distances.clone();
        let mut probe_predecessors = predecessors.clone();
        relax_all(&edges, &mut probe_distances, &mut probe_predecessors)
    };

    if negative_cycle {
        warn!(source, "negative cycle reachable from source");
        if config.reject_negative_cycles {
            return Err(Error::NegativeCycle { vertex: source });
        }
    }

    debug!(passes, negative_cycle, "bellman-ford finished");
    Ok(ShortestPathTree::new(
        source,
        distances,
        predecessors,
        negative_cycle,
    ))
}
