//! Graph traversal primitives.
//!
//! This module provides the depth-first and breadth-first building blocks the other
//! algorithms are assembled from. Every traversal uses an explicit stack or queue, so deep
//! graphs never exhaust the call stack.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`postorder`] - Depth-first search with post-order visitation
//! - [`reverse_postorder`] - Reverse post-order from a single root
//! - [`full_postorder`] - Post-order over every vertex, roots taken in index order
//!
//! # Ordering Guarantees
//!
//! The depth-first traversals visit neighbors in the order reported by
//! [`Graph::adjacent`] and produce exactly the order a recursive implementation would.
//! This keeps topological orders and component numbering stable across runs.
//!
//! # Iteration vs Collection
//!
//! The [`dfs`] and [`bfs`] functions return iterators for lazy evaluation, avoiding
//! unnecessary work when only part of the traversal is needed. The post-order functions
//! return collected vectors since the order requires a full traversal anyway.

use std::collections::VecDeque;

use crate::{graph::Graph, utils::BitSet, Result};

/// Vertex state during three-color depth-first search.
///
/// A vertex starts [`White`](Color::White), turns [`Gray`](Color::Gray) while it is on the
/// exploration stack and becomes [`Black`](Color::Black) once all its descendants are
/// finished. An edge to a gray vertex is a back edge and closes a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not yet discovered
    #[default]
    White,
    /// Discovered, still on the stack
    Gray,
    /// Finished
    Black,
}

/// Depth-first search iterator over vertices.
///
/// Visits every vertex reachable from the start exactly once, in pre-order.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Graph`]
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    stack: Vec<usize>,
    visited: BitSet,
}

impl<'g, G: Graph> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: usize) -> Self {
        DfsIterator {
            graph,
            stack: vec![start],
            visited: BitSet::new(graph.vertex_count()),
        }
    }
}

impl<G: Graph> Iterator for DfsIterator<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if !self.visited.insert(vertex) {
                continue;
            }

            // Push in reverse so the first neighbor is explored first
            let neighbors: Vec<usize> = self.graph.adjacent(vertex).map(|(n, _)| n).collect();
            for &neighbor in neighbors.iter().rev() {
                if !self.visited.contains(neighbor) {
                    self.stack.push(neighbor);
                }
            }

            return Some(vertex);
        }
    }
}

/// Returns a depth-first search iterator starting from the given vertex.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting vertex
///
/// # Returns
///
/// An iterator yielding vertices in DFS pre-order.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is not a vertex of
/// `graph`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the visited set and stack
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::dfs, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, true, &[(0, 1, 1), (0, 2, 1), (1, 3, 1)])?;
/// let order: Vec<usize> = dfs(&graph, 0)?.collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub fn dfs<G: Graph>(graph: &G, start: usize) -> Result<DfsIterator<'_, G>> {
    graph.check_vertex(start)?;
    Ok(DfsIterator::new(graph, start))
}

/// Breadth-first search iterator over vertices.
///
/// Visits every vertex reachable from the start exactly once, all vertices at hop
/// distance `d` before any vertex at distance `d + 1`.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    queue: VecDeque<usize>,
    visited: BitSet,
}

impl<'g, G: Graph> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: usize) -> Self {
        let mut visited = BitSet::new(graph.vertex_count());
        visited.insert(start);

        BfsIterator {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<G: Graph> Iterator for BfsIterator<'_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for (neighbor, _) in self.graph.adjacent(vertex) {
            if self.visited.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

/// Returns a breadth-first search iterator starting from the given vertex.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is not a vertex of
/// `graph`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn bfs<G: Graph>(graph: &G, start: usize) -> Result<BfsIterator<'_, G>> {
    graph.check_vertex(start)?;
    Ok(BfsIterator::new(graph, start))
}

/// Appends the vertices reachable from `start` and not yet in `visited`, in DFS pre-order.
pub(crate) fn explore_preorder<G: Graph>(
    graph: &G,
    start: usize,
    visited: &mut BitSet,
    order: &mut Vec<usize>,
) {
    let mut stack = vec![start];
    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        order.push(vertex);

        let neighbors: Vec<usize> = graph.adjacent(vertex).map(|(n, _)| n).collect();
        for &neighbor in neighbors.iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }
}

/// Appends the vertices reachable from `start` and not yet in `visited`, in DFS post-order.
#[allow(clippy::items_after_statements)]
pub(crate) fn explore_postorder<G: Graph>(
    graph: &G,
    start: usize,
    visited: &mut BitSet,
    order: &mut Vec<usize>,
) {
    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, State::Enter)];

    while let Some((vertex, state)) = stack.pop() {
        match state {
            State::Enter => {
                if !visited.insert(vertex) {
                    continue;
                }

                // Exit is processed after every child pushed below
                stack.push((vertex, State::Exit));

                let neighbors: Vec<usize> = graph.adjacent(vertex).map(|(n, _)| n).collect();
                for &neighbor in neighbors.iter().rev() {
                    if !visited.contains(neighbor) {
                        stack.push((neighbor, State::Enter));
                    }
                }
            }
            State::Exit => order.push(vertex),
        }
    }
}

/// Computes the post-order of the vertices reachable from `start`.
///
/// A vertex is emitted once all of its descendants have been emitted.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is not a vertex of
/// `graph`.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::postorder, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 1), (1, 2, 1)])?;
/// assert_eq!(postorder(&graph, 0)?, vec![2, 1, 0]);
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub fn postorder<G: Graph>(graph: &G, start: usize) -> Result<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = BitSet::new(graph.vertex_count());
    let mut order = Vec::with_capacity(graph.vertex_count());
    explore_postorder(graph, start, &mut visited, &mut order);
    Ok(order)
}

/// Computes the reverse post-order of the vertices reachable from `start`.
///
/// In a DAG, every vertex precedes all of its successors.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is not a vertex of
/// `graph`.
pub fn reverse_postorder<G: Graph>(graph: &G, start: usize) -> Result<Vec<usize>> {
    let mut order = postorder(graph, start)?;
    order.reverse();
    Ok(order)
}

/// Computes a post-order covering every vertex.
///
/// Unvisited vertices are taken as new roots in increasing index order, so disconnected
/// graphs are covered completely.
///
/// # Complexity
///
/// O(V + E)
#[must_use]
pub fn full_postorder<G: Graph>(graph: &G) -> Vec<usize> {
    let mut visited = BitSet::new(graph.vertex_count());
    let mut order = Vec::with_capacity(graph.vertex_count());
    for root in graph.vertices() {
        if !visited.contains(root) {
            explore_postorder(graph, root, &mut visited, &mut order);
        }
    }
    order
}
