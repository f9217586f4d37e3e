//! Graph algorithms.
//!
//! Every algorithm is a free function that takes any [`Graph`](crate::Graph) by reference,
//! validates its arguments before doing any work, and returns an owned result. No algorithm
//! modifies the graph it is given.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Lazy depth-first pre-order
//! - [`bfs`] - Lazy breadth-first order
//! - [`postorder`] / [`reverse_postorder`] - Finish order from a single root
//! - [`full_postorder`] - Finish order covering every vertex
//!
//! ## Shortest Paths
//!
//! - [`bfs_shortest_paths`] - Hop counts
//! - [`dijkstra`] - Non-negative weights
//! - [`bidirectional_dijkstra`] - Non-negative weights, single target
//! - [`bellman_ford`] / [`bellman_ford_with`] - Negative weights, cycle detection
//! - [`floyd_warshall`] / [`floyd_warshall_with`] - All pairs
//!
//! ## Structure
//!
//! - [`has_cycle`] / [`find_cycle`] - Cycle detection
//! - [`topological_sort`] - Ordering of a DAG
//! - [`connected_components`] - Undirected components
//! - [`strongly_connected_components`] - Kosaraju's algorithm
//! - [`weakly_connected_components`] - Components ignoring direction
//! - [`components`] - Connected or strongly connected, by direction
//! - [`reachable`] - Vertices reachable from a source
//! - [`condensation`] - Component DAG
//!
//! ## Spanning Trees
//!
//! - [`kruskal`] - Minimum spanning forest
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Dijkstra | O((V + E) log V) | Weighted single source |
//! | Bellman-Ford | O(V · E) | Negative weights |
//! | Floyd-Warshall | O(V³) | Dense all-pairs queries |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | SCC | O(V + E) | Cycle grouping, condensation |
//! | Kruskal | O(E log E) | Minimum spanning forest |
//!
//! # Examples
//!
//! ```rust
//! use graphsuite::{algorithms, AdjacencyList, Graph};
//!
//! let graph = AdjacencyList::from_edges(4, true, &[(0, 1, 2), (1, 2, 2), (0, 2, 5), (2, 3, 1)])?;
//!
//! let order: Vec<usize> = algorithms::dfs(&graph, 0)?.collect();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! let tree = algorithms::dijkstra(&graph, 0)?;
//! assert_eq!(tree.distance(3)?, Some(5));
//!
//! assert_eq!(algorithms::topological_sort(&graph)?, Some(vec![0, 1, 2, 3]));
//! # Ok::<(), graphsuite::Error>(())
//! ```

mod components;
mod cycles;
mod mst;
mod shortest_path;
mod topological;
mod traversal;

pub use components::{
    components, condensation, connected_components, reachable, strongly_connected_components,
    weakly_connected_components, Components,
};
pub use cycles::{find_cycle, has_cycle};
pub use mst::{kruskal, SpanningForest};
pub use shortest_path::{
    bellman_ford, bellman_ford_with, bfs_shortest_paths, bidirectional_dijkstra, dijkstra,
    floyd_warshall, floyd_warshall_with, AllPairs, BidirectionalPath, ShortestPathConfig,
    ShortestPathTree,
};
pub use topological::topological_sort;
pub use traversal::{
    bfs, dfs, full_postorder, postorder, reverse_postorder, BfsIterator, Color, DfsIterator,
};
