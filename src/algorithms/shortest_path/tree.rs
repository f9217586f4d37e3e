//! Single-source shortest-path result.

use crate::{graph::Weight, Error, Result};

/// Distances and predecessors from one source vertex.
///
/// Produced by [`bfs_shortest_paths`](super::bfs_shortest_paths),
/// [`dijkstra`](super::dijkstra) and [`bellman_ford`](super::bellman_ford). Unreached
/// vertices have no distance and no predecessor.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::dijkstra, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(4, true, &[(0, 1, 4), (1, 2, 1), (0, 2, 7)])?;
/// let tree = dijkstra(&graph, 0)?;
///
/// assert_eq!(tree.distance(2)?, Some(5));
/// assert_eq!(tree.path(2)?, Some(vec![0, 1, 2]));
/// assert!(!tree.is_reachable(3)?);
/// assert_eq!(tree.path(3)?, None);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<usize>>,
    negative_cycle: bool,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Option<Weight>>,
        predecessors: Vec<Option<usize>>,
        negative_cycle: bool,
    ) -> Self {
        ShortestPathTree {
            source,
            distances,
            predecessors,
            negative_cycle,
        }
    }

    /// Returns the source vertex of the search.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the per-vertex distances, `None` for unreached vertices.
    #[must_use]
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// Returns `true` if the search detected a negative cycle reachable from the source.
    ///
    /// Always `false` for searches that reject negative weights up front.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns the distance from the source to `target`.
    ///
    /// # Returns
    ///
    /// `Some(distance)` if `target` was reached, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `target` is not a vertex of the searched graph.
    pub fn distance(&self, target: usize) -> Result<Option<Weight>> {
        self.check(target)?;
        Ok(self.distances[target])
    }

    /// Returns `true` if `target` was reached from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `target` is not a vertex of the searched graph.
    pub fn is_reachable(&self, target: usize) -> Result<bool> {
        Ok(self.distance(target)?.is_some())
    }

    /// Returns the vertex preceding `target` on its shortest path.
    ///
    /// The source and unreached vertices have no predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `target` is not a vertex of the searched graph.
    pub fn predecessor(&self, target: usize) -> Result<Option<usize>> {
        self.check(target)?;
        Ok(self.predecessors[target])
    }

    /// Reconstructs the path from the source to `target` by walking predecessors.
    ///
    /// # Returns
    ///
    /// The vertices of the path, source first and `target` last, or `None` when `target` is
    /// unreached. A walk longer than the vertex count can only come from a negative cycle;
    /// it is cut off and reported as `None` as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `target` is not a vertex of the searched graph.
    pub fn path(&self, target: usize) -> Result<Option<Vec<usize>>> {
        if !self.is_reachable(target)? {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            if path.len() > self.distances.len() {
                return Ok(None);
            }
            match self.predecessors[current] {
                Some(previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => return Ok(None),
            }
        }

        path.reverse();
        Ok(Some(path))
    }

    fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.distances.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.distances.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_tree() -> ShortestPathTree {
        // 0 -> 1 -> 2, 3 unreached
        ShortestPathTree::new(
            0,
            vec![Some(0), Some(2), Some(5), None],
            vec![None, Some(0), Some(1), None],
            false,
        )
    }

    #[test]
    fn test_distance_and_reachability() {
        let tree = create_tree();
        assert_eq!(tree.source(), 0);
        assert_eq!(tree.distance(2).unwrap(), Some(5));
        assert!(tree.is_reachable(1).unwrap());
        assert!(!tree.is_reachable(3).unwrap());
        assert_eq!(tree.distances().len(), 4);
    }

    #[test]
    fn test_path() {
        let tree = create_tree();
        assert_eq!(tree.path(2).unwrap(), Some(vec![0, 1, 2]));
        assert_eq!(tree.path(0).unwrap(), Some(vec![0]));
        assert_eq!(tree.path(3).unwrap(), None);
    }

    #[test]
    fn test_out_of_range() {
        let tree = create_tree();
        assert_eq!(
            tree.distance(4),
            Err(Error::OutOfRange {
                vertex: 4,
                vertex_count: 4
            })
        );
        assert!(tree.path(9).is_err());
        assert!(tree.predecessor(9).is_err());
    }

    #[test]
    fn test_path_on_predecessor_cycle_terminates() {
        // 1 and 2 point at each other, as a negative cycle leaves them
        let tree = ShortestPathTree::new(
            0,
            vec![Some(0), Some(-10), Some(-12)],
            vec![None, Some(2), Some(1)],
            true,
        );
        assert!(tree.has_negative_cycle());
        assert_eq!(tree.path(1).unwrap(), None);
    }
}
