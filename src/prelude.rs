//! # graphsuite Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! algorithms of the graphsuite library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphsuite operations
pub use crate::Error;

/// The result type used throughout graphsuite
pub use crate::Result;

/// Negative-cycle handling for Bellman-Ford and Floyd-Warshall
pub use crate::ShortestPathConfig;

// ================================================================================================
// Graph Encodings
// ================================================================================================

/// The shared graph contract
pub use crate::Graph;

/// Concrete encodings
pub use crate::{AdjacencyList, AdjacencyMatrix, EdgeList};

/// Edge and weight types
pub use crate::{Edge, Weight, DEFAULT_WEIGHT};

/// Union-find with union by size
pub use crate::DisjointSet;

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversals
pub use crate::algorithms::{bfs, dfs, full_postorder, postorder, reverse_postorder};

/// Shortest paths
pub use crate::algorithms::{
    bellman_ford, bellman_ford_with, bfs_shortest_paths, bidirectional_dijkstra, dijkstra,
    floyd_warshall, floyd_warshall_with,
};

/// Structural analysis
pub use crate::algorithms::{
    components, condensation, connected_components, find_cycle, has_cycle, reachable,
    strongly_connected_components, topological_sort, weakly_connected_components,
};

/// Spanning trees
pub use crate::algorithms::kruskal;

// ================================================================================================
// Algorithm Results
// ================================================================================================

/// Result types returned by the algorithms
pub use crate::algorithms::{
    AllPairs, BidirectionalPath, Components, ShortestPathTree, SpanningForest,
};
