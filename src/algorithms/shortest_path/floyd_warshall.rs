//! All-pairs shortest paths with Floyd-Warshall.

use tracing::{debug, instrument, warn};

use crate::{
    algorithms::shortest_path::{ensure_non_negative, ShortestPathConfig},
    graph::{Graph, Weight},
    Error, Result,
};

/// Distances and next hops between every ordered pair of vertices.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::floyd_warshall, AdjacencyMatrix, Graph};
///
/// let graph = AdjacencyMatrix::from_edges(3, true, &[(0, 1, 2), (1, 2, 3), (0, 2, 9)])?;
/// let all_pairs = floyd_warshall(&graph)?;
///
/// assert_eq!(all_pairs.distance(0, 2)?, Some(5));
/// assert_eq!(all_pairs.path(0, 2)?, Some(vec![0, 1, 2]));
/// assert_eq!(all_pairs.distance(2, 0)?, None);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairs {
    vertex_count: usize,
    /// Row-major distances
    distances: Vec<Option<Weight>>,
    /// Row-major first hop after the row vertex
    next: Vec<Option<usize>>,
    negative_cycle: bool,
}

impl AllPairs {
    #[inline]
    fn slot(&self, source: usize, destination: usize) -> usize {
        source * self.vertex_count + destination
    }

    fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Returns the number of vertices of the searched graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` if some vertex lies on a negative cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns the shortest distance from `source` to `destination`.
    ///
    /// A vertex is always at distance 0 from itself unless it lies on a negative cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex is not in the searched graph.
    pub fn distance(&self, source: usize, destination: usize) -> Result<Option<Weight>> {
        self.check(source)?;
        self.check(destination)?;
        Ok(self.distances[self.slot(source, destination)])
    }

    /// Reconstructs the shortest path from `source` to `destination` by following next hops.
    ///
    /// Returns `None` if `destination` is unreachable, or if the walk exceeds the vertex count,
    /// which only happens when the path runs through a negative cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either vertex is not in the searched graph.
    pub fn path(&self, source: usize, destination: usize) -> Result<Option<Vec<usize>>> {
        self.check(source)?;
        self.check(destination)?;

        let mut path = vec![source];
        let mut current = source;
        while current != destination {
            if path.len() > self.vertex_count {
                return Ok(None);
            }
            match self.next[self.slot(current, destination)] {
                Some(hop) => {
                    path.push(hop);
                    current = hop;
                }
                None => return Ok(None),
            }
        }
        Ok(Some(path))
    }
}

/// Computes all-pairs shortest distances on a graph with non-negative weights.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `graph` has a negative weight. Use
/// [`floyd_warshall_with`] for graphs with negative weights.
///
/// # Complexity
///
/// O(V³) time, O(V²) space
pub fn floyd_warshall<G: Graph>(graph: &G) -> Result<AllPairs> {
    ensure_non_negative(graph, "Floyd-Warshall")?;
    floyd_warshall_with(graph, ShortestPathConfig::default())
}

/// Computes all-pairs shortest distances with an explicit configuration.
///
/// Distances start at `None` except for the diagonal (0) and direct edges, where the lightest
/// of several parallel edges is kept. The classic triple loop then tries every vertex `k` as an
/// intermediate. With `config.detect_negative_cycles`, a negative diagonal entry marks the
/// result as containing a negative cycle.
///
/// # Errors
///
/// Returns [`Error::NegativeCycle`] if a cycle is detected and
/// `config.reject_negative_cycles` is set.
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn floyd_warshall_with<G: Graph>(graph: &G, config: ShortestPathConfig) -> Result<AllPairs> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; n * n];
    let mut next: Vec<Option<usize>> = vec![None; n * n];

    for vertex in graph.vertices() {
        distances[vertex * n + vertex] = Some(0);
        next[vertex * n + vertex] = Some(vertex);
    }
    for edge in graph.edges() {
        let slot = edge.source * n + edge.destination;
        if distances[slot].is_none_or(|current| edge.weight < current) {
            distances[slot] = Some(edge.weight);
            next[slot] = Some(edge.destination);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(to_k) = distances[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(from_k) = distances[k * n + j] else {
                    continue;
                };
                let candidate = to_k.saturating_add(from_k);
                if distances[i * n + j].is_none_or(|current| candidate < current) {
                    distances[i * n + j] = Some(candidate);
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    let on_cycle = if config.detect_negative_cycles {
        (0..n).find(|&v| distances[v * n + v].is_some_and(|d| d < 0))
    } else {
        None
    };

    if let Some(vertex) = on_cycle {
        warn!(vertex, "negative cycle detected");
        if config.reject_negative_cycles {
            return Err(Error::NegativeCycle { vertex });
        }
    }

    debug!(negative_cycle = on_cycle.is_some(), "floyd-warshall finished");
    Ok(AllPairs {
        vertex_count: n,
        distances,
        next,
        negative_cycle: on_cycle.is_some(),
    })
}
