//! Cycle detection.
//!
//! Directed graphs are searched with three-color depth-first search: an edge into a vertex
//! that is still on the stack ([`Color::Gray`]) is a back edge and closes a cycle. Every
//! white vertex is used as a root in index order, so disconnected graphs are covered.
//!
//! Undirected graphs store each edge in both directions, which would make every edge look
//! like a back edge. They are tested with the forest property instead: a graph is acyclic
//! exactly when its edge count equals its vertex count minus its component count. Edges are
//! counted from what is stored, so an overwritten matrix cell is one edge. Under this rule a
//! single edge is not a cycle, while self-loops and parallel edges are.

use tracing::{debug, instrument, trace};

use crate::{
    algorithms::{components::label_components, traversal::Color},
    graph::Graph,
    Result,
};

/// Three-color DFS from every white vertex, returning the first cycle found.
fn first_cycle<G: Graph>(graph: &G) -> Option<Vec<usize>> {
    let mut colors = vec![Color::White; graph.vertex_count()];

    for root in graph.vertices() {
        if colors[root] != Color::White {
            continue;
        }

        // Each frame is a gray vertex and its not yet inspected neighbors
        colors[root] = Color::Gray;
        let mut stack: Vec<(usize, std::vec::IntoIter<usize>)> = vec![(
            root,
            graph
                .adjacent(root)
                .map(|(n, _)| n)
                .collect::<Vec<_>>()
                .into_iter(),
        )];

        while let Some((vertex, children)) = stack.last_mut() {
            let vertex = *vertex;
            match children.next() {
                Some(child) => match colors[child] {
                    Color::White => {
                        colors[child] = Color::Gray;
                        let grandchildren: Vec<usize> =
                            graph.adjacent(child).map(|(n, _)| n).collect();
                        stack.push((child, grandchildren.into_iter()));
                    }
                    Color::Gray => {
                        trace!(from = vertex, to = child, "back edge");
                        let start = stack
                            .iter()
                            .position(|&(v, _)| v == child)
                            .unwrap_or(0);
                        let mut cycle: Vec<usize> = stack[start..].iter().map(|&(v, _)| v).collect();
                        cycle.push(child);
                        return Some(cycle);
                    }
                    Color::Black => {}
                },
                None => {
                    colors[vertex] = Color::Black;
                    stack.pop();
                }
            }
        }
    }
    None
}

/// Forest check for undirected graphs, counting the edges actually stored.
///
/// `edge_count` is not used because an adjacency matrix counts overwritten pairs.
fn undirected_cycle<G: Graph>(graph: &G) -> bool {
    let mut stored = 0;
    for edge in graph.edges() {
        if edge.source == edge.destination {
            trace!(vertex = edge.source, "self-loop");
            return true;
        }
        stored += 1;
    }

    // Acyclic undirected graphs are forests: E = V - C
    let components = label_components(graph);
    stored / 2 + components.count() > graph.vertex_count()
}

/// Returns `true` if the graph contains a cycle.
///
/// Directed graphs use three-color DFS. Undirected graphs use the forest property, so that
/// an edge and its stored reverse are not mistaken for a cycle.
///
/// # Complexity
///
/// O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::has_cycle, AdjacencyList, Graph};
///
/// let dag = AdjacencyList::from_edges(3, true, &[(0, 1, 1), (1, 2, 1)])?;
/// assert!(!has_cycle(&dag));
///
/// let cyclic = AdjacencyList::from_edges(3, true, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)])?;
/// assert!(has_cycle(&cyclic));
///
/// let path = AdjacencyList::from_edges(3, false, &[(0, 1, 1), (1, 2, 1)])?;
/// assert!(!has_cycle(&path));
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[must_use]
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count(), directed = graph.is_directed()))]
pub fn has_cycle<G: Graph>(graph: &G) -> bool {
    let cyclic = if graph.is_directed() {
        first_cycle(graph).is_some()
    } else {
        undirected_cycle(graph)
    };

    debug!(cyclic, "cycle check finished");
    cyclic
}

/// Finds a cycle in a directed graph.
///
/// # Returns
///
/// `Some(vertices)` listing a cycle in edge order, starting and ending with the same vertex,
/// or `None` if the graph is acyclic. A self-loop on `v` is reported as `[v, v]`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for undirected graphs.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::find_cycle, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, true, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 1, 1)])?;
/// assert_eq!(find_cycle(&graph)?, Some(vec![1, 2, 3, 1]));
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub fn find_cycle<G: Graph>(graph: &G) -> Result<Option<Vec<usize>>> {
    if !graph.is_directed() {
        return Err(invalid_input!("cycle extraction requires a directed graph"));
    }
    Ok(first_cycle(graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test::{cyclic_graph, dag},
        AdjacencyList, AdjacencyMatrix, EdgeList, Error,
    };

    fn assert_is_cycle<G: Graph>(graph: &G, cycle: &[usize]) {
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]).unwrap(), "{pair:?}");
        }
    }

    #[test]
    fn test_fixtures_all_encodings() {
        assert!(has_cycle(&cyclic_graph::<AdjacencyList>()));
        assert!(has_cycle(&cyclic_graph::<AdjacencyMatrix>()));
        assert!(has_cycle(&cyclic_graph::<EdgeList>()));

        assert!(!has_cycle(&dag::<AdjacencyList>()));
        assert!(!has_cycle(&dag::<AdjacencyMatrix>()));
        assert!(!has_cycle(&dag::<EdgeList>()));
    }

    #[test]
    fn test_find_cycle_returns_real_cycle() {
        let graph: AdjacencyList = cyclic_graph();
        let cycle = find_cycle(&graph).unwrap().unwrap();
        assert_is_cycle(&graph, &cycle);
    }

    #[test]
    fn test_find_cycle_on_dag() {
        let graph: EdgeList = dag();
        assert_eq!(find_cycle(&graph).unwrap(), None);
    }

    #[test]
    fn test_find_cycle_self_loop() {
        let graph = AdjacencyList::from_edges(2, true, &[(0, 1, 1), (1, 1, 1)]).unwrap();
        assert_eq!(find_cycle(&graph).unwrap(), Some(vec![1, 1]));
    }

    #[test]
    fn test_find_cycle_rejects_undirected() {
        let graph = AdjacencyList::new(2, false).unwrap();
        assert!(matches!(find_cycle(&graph), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_cross_edge_is_not_a_cycle() {
        // Diamond: 0 -> 1 -> 3 and 0 -> 2 -> 3
        let graph =
            AdjacencyList::from_edges(4, true, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])
                .unwrap();
        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_undirected_forest_rules() {
        let tree = AdjacencyList::from_edges(4, false, &[(0, 1, 1), (1, 2, 1), (1, 3, 1)]).unwrap();
        assert!(!has_cycle(&tree));

        let triangle =
            EdgeList::from_edges(3, false, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        assert!(has_cycle(&triangle));

        let self_loop = AdjacencyList::from_edges(2, false, &[(1, 1, 1)]).unwrap();
        assert!(has_cycle(&self_loop));

        let parallel = AdjacencyList::from_edges(2, false, &[(0, 1, 1), (0, 1, 2)]).unwrap();
        assert!(has_cycle(&parallel));
    }

    #[test]
    fn test_undirected_matrix_overwrite_is_not_a_cycle() {
        let mut matrix = AdjacencyMatrix::new(2, false).unwrap();
        matrix.add_edge(0, 1, 5).unwrap();
        matrix.add_edge(0, 1, 3).unwrap();
        assert_eq!(matrix.edge_count(), 2);
        assert!(!has_cycle(&matrix));

        let transposed = AdjacencyList::transpose_of(&matrix);
        assert!(!has_cycle(&transposed));

        let mut path = AdjacencyMatrix::new(3, false).unwrap();
        path.add_edge(0, 1, 1).unwrap();
        path.add_edge(1, 2, 1).unwrap();
        path.add_edge(1, 2, 4).unwrap();
        assert!(!has_cycle(&path));
        path.add_edge(2, 0, 1).unwrap();
        assert!(has_cycle(&path));

        let mut looped = AdjacencyMatrix::new(2, false).unwrap();
        looped.add_edge(1, 1, 2).unwrap();
        assert!(has_cycle(&looped));
    }

    #[test]
    fn test_disconnected_cycle_found() {
        let graph = AdjacencyList::from_edges(5, true, &[(0, 1, 1), (3, 4, 1), (4, 3, 1)]).unwrap();
        assert_eq!(find_cycle(&graph).unwrap(), Some(vec![3, 4, 3]));
    }
}
