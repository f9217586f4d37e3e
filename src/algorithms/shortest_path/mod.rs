//! Shortest-path algorithms.
//!
//! # Available Algorithms
//!
//! | Algorithm | Weights | Result | Complexity |
//! |-----------|---------|--------|------------|
//! | [`bfs_shortest_paths`] | ignored (hop count) | [`ShortestPathTree`] | O(V + E) |
//! | [`dijkstra`] | non-negative | [`ShortestPathTree`] | O((V + E) log V) |
//! | [`bidirectional_dijkstra`] | non-negative | [`BidirectionalPath`] | O((V + E) log V) |
//! | [`bellman_ford`] | any | [`ShortestPathTree`] | O(V · E) |
//! | [`floyd_warshall`] | non-negative | [`AllPairs`] | O(V³) |
//! | [`floyd_warshall_with`] | any | [`AllPairs`] | O(V³) |
//!
//! Every algorithm except the Bellman-Ford family and [`floyd_warshall_with`] rejects a graph
//! whose [`has_negative_weight`](crate::Graph::has_negative_weight) flag is set with
//! [`Error::InvalidInput`](crate::Error::InvalidInput). The negative-weight algorithms take a
//! [`ShortestPathConfig`] deciding how negative cycles are reported.
//!
//! Distances are `Option<Weight>`: `None` marks an unreached vertex.

mod bellman_ford;
mod bidirectional;
mod config;
mod dijkstra;
mod floyd_warshall;
mod tree;
mod unweighted;

pub use bellman_ford::{bellman_ford, bellman_ford_with};
pub use bidirectional::{bidirectional_dijkstra, BidirectionalPath};
pub use config::ShortestPathConfig;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with, AllPairs};
pub use tree::ShortestPathTree;
pub use unweighted::bfs_shortest_paths;

use tracing::warn;

use crate::{graph::Graph, Result};

/// Fails with `InvalidInput` if `graph` carries a negative weight.
fn ensure_non_negative<G: Graph>(graph: &G, algorithm: &str) -> Result<()> {
    if graph.has_negative_weight() {
        warn!(algorithm, "negative edge weight rejected");
        return Err(invalid_input!(
            "{} requires non-negative edge weights",
            algorithm
        ));
    }
    Ok(())
}
