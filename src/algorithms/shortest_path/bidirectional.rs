//! Bidirectional Dijkstra between a fixed source and target.
//!
//! A forward search from the source over the graph and a backward search from the target over
//! its transpose run in lockstep, one settled vertex per side per round. The search stops the
//! first time a vertex is settled by both sides. The answer is then the best
//! `forward + backward` sum over every vertex labelled by both searches, which is not
//! necessarily the vertex where the frontiers met.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, instrument, trace};

use crate::{
    algorithms::shortest_path::ensure_non_negative,
    graph::{AdjacencyList, Graph, Weight},
    utils::BitSet,
    Result,
};

/// Result of a point-to-point bidirectional search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidirectionalPath {
    source: usize,
    target: usize,
    distance: Option<Weight>,
    path: Option<Vec<usize>>,
    meeting_vertex: Option<usize>,
}

impl BidirectionalPath {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the target vertex.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the shortest distance, `None` if the target is unreachable.
    #[must_use]
    pub fn distance(&self) -> Option<Weight> {
        self.distance
    }

    /// Returns the shortest path from source to target, both included.
    #[must_use]
    pub fn path(&self) -> Option<&[usize]> {
        self.path.as_deref()
    }

    /// Returns the vertex at which the forward and backward halves of the path are joined.
    #[must_use]
    pub fn meeting_vertex(&self) -> Option<usize> {
        self.meeting_vertex
    }
}

/// One direction of the search.
struct Frontier {
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<usize>>,
    settled: BitSet,
    heap: BinaryHeap<Reverse<(Weight, usize)>>,
}

impl Frontier {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[start] = Some(0);

        Frontier {
            distances,
            predecessors: vec![None; vertex_count],
            settled: BitSet::new(vertex_count),
            heap: BinaryHeap::from([Reverse((0, start))]),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.heap.is_empty()
    }

    /// Settles the closest unsettled vertex and relaxes its edges.
    fn step<H: Graph>(&mut self, graph: &H) -> Option<usize> {
        while let Some(Reverse((distance, vertex))) = self.heap.pop() {
            if !self.settled.insert(vertex) {
                continue;
            }

            for (neighbor, weight) in graph.adjacent(vertex) {
                let candidate = distance.saturating_add(weight);
                if self.distances[neighbor].is_none_or(|current| candidate < current) {
                    self.distances[neighbor] = Some(candidate);
                    self.predecessors[neighbor] = Some(vertex);
                    self.heap.push(Reverse((candidate, neighbor)));
                }
            }
            return Some(vertex);
        }
        None
    }

    /// Returns the chain `vertex, predecessor, ...` back to the start of this side.
    fn chain(&self, vertex: usize) -> Vec<usize> {
        let mut chain = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.predecessors[current] {
            chain.push(previous);
            current = previous;
        }
        chain
    }
}

/// Computes the shortest path from `source` to `target` with bidirectional Dijkstra.
///
/// # Arguments
///
/// * `graph` - The graph to search, with non-negative weights
/// * `source` - The start vertex
/// * `target` - The destination vertex
///
/// # Errors
///
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) if either vertex is not in `graph`
/// - [`Error::InvalidInput`](crate::Error::InvalidInput) if `graph` has a negative weight
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::bidirectional_dijkstra, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(
///     5,
///     true,
///     &[(0, 1, 1), (1, 2, 1), (2, 4, 1), (0, 3, 1), (3, 4, 5)],
/// )?;
/// let result = bidirectional_dijkstra(&graph, 0, 4)?;
///
/// assert_eq!(result.distance(), Some(3));
/// assert_eq!(result.path(), Some(&[0, 1, 2, 4][..]));
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bidirectional_dijkstra<G: Graph>(
    graph: &G,
    source: usize,
    target: usize,
) -> Result<BidirectionalPath> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    ensure_non_negative(graph, "bidirectional Dijkstra")?;

    if source == target {
        return Ok(BidirectionalPath {
            source,
            target,
            distance: Some(0),
            path: Some(vec![source]),
            meeting_vertex: Some(source),
        });
    }

    let vertex_count = graph.vertex_count();
    let reverse = AdjacencyList::transpose_of(graph);
    let mut forward = Frontier::new(vertex_count, source);
    let mut backward = Frontier::new(vertex_count, target);

    while !forward.is_exhausted() || !backward.is_exhausted() {
        if let Some(vertex) = forward.step(graph) {
            if backward.settled.contains(vertex) {
                trace!(vertex, "frontiers met on forward step");
                break;
            }
        }
        if let Some(vertex) = backward.step(&reverse) {
            if forward.settled.contains(vertex) {
                trace!(vertex, "frontiers met on backward step");
                break;
            }
        }
    }

    let best = graph
        .vertices()
        .filter_map(|vertex| {
            let ahead = forward.distances[vertex]?;
            let behind = backward.distances[vertex]?;
            Some((ahead.saturating_add(behind), vertex))
        })
        .min();

    let Some((distance, meeting)) = best else {
        debug!("target unreachable");
        return Ok(BidirectionalPath {
            source,
            target,
            distance: None,
            path: None,
            meeting_vertex: None,
        });
    };

    let mut path = forward.chain(meeting);
    path.reverse();
    path.extend(backward.chain(meeting).into_iter().skip(1));

    debug!(distance, meeting, hops = path.len() - 1, "bidirectional search finished");
    Ok(BidirectionalPath {
        source,
        target,
        distance: Some(distance),
        path: Some(path),
        meeting_vertex: Some(meeting),
    })
}
