// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphsuite
//!
//! A library of classic graph algorithms over interchangeable in-memory graph encodings.
//!
//! ## Features
//!
//! - **Three encodings** - [`AdjacencyList`], [`AdjacencyMatrix`] and [`EdgeList`] behind one
//!   [`Graph`] trait, so every algorithm runs on every encoding
//! - **Shortest paths** - BFS hop counts, Dijkstra, bidirectional Dijkstra, Bellman-Ford with
//!   negative-cycle detection, and Floyd-Warshall
//! - **Structure** - Cycle detection, topological sort, connected, strongly connected and
//!   weakly connected components, reachability, condensation
//! - **Spanning trees** - Kruskal over a union-by-size [`DisjointSet`]
//! - **Explicit stacks** - No traversal recurses, so depth is bounded by the heap only
//!
//! ## Quick Start
//!
//! ```rust
//! use graphsuite::prelude::*;
//!
//! let mut graph = AdjacencyList::new(4, true)?;
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(0, 2, 1)?;
//! graph.add_edge(2, 1, 2)?;
//! graph.add_edge(1, 3, 5)?;
//!
//! let tree = dijkstra(&graph, 0)?;
//! assert_eq!(tree.distance(3)?, Some(8));
//! assert_eq!(tree.path(3)?, Some(vec![0, 2, 1, 3]));
//!
//! assert_eq!(topological_sort(&graph)?, Some(vec![0, 2, 1, 3]));
//! # Ok::<(), graphsuite::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`]. Arguments are validated before any work is
//! done, so a failed call never leaves a modified graph or a half-built result behind. See
//! [`Error`] for the categories.
//!
//! ## Logging
//!
//! Algorithms are instrumented with [`tracing`](https://docs.rs/tracing) spans at `debug`
//! level and emit `trace` events from their inner loops. The library installs no subscriber.
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

mod disjoint_set;
pub(crate) mod utils;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphsuite::prelude::*;
///
/// let graph = EdgeList::from_edges(3, false, &[(0, 1, 2), (1, 2, 3), (0, 2, 9)])?;
/// assert_eq!(kruskal(&graph)?.total_weight(), 5);
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub mod prelude;

/// Graph encodings and the [`Graph`] trait they share.
///
/// # Key Types
///
/// - [`graph::Graph`] - The common contract of every encoding
/// - [`graph::AdjacencyList`] - Per-vertex neighbor lists in insertion order
/// - [`graph::AdjacencyMatrix`] - Dense weight grid
/// - [`graph::EdgeList`] - Flat list of stored edges
/// - [`graph::Edge`] - A directed, weighted edge
pub mod graph;

/// Traversals, shortest paths, structural analysis and spanning trees.
pub mod algorithms;

/// `graphsuite` Result type
///
/// A type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// `graphsuite` Error type
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::dijkstra, AdjacencyList, Error, Graph};
///
/// let graph = AdjacencyList::from_edges(2, true, &[(0, 1, -5)])?;
/// match dijkstra(&graph, 0) {
///     Err(Error::InvalidInput(message)) => println!("rejected: {message}"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), graphsuite::Error>(())
/// ```
pub use error::Error;

pub use disjoint_set::DisjointSet;

pub use graph::{
    AdjacencyList, AdjacencyMatrix, Edge, EdgeList, Graph, Weight, DEFAULT_WEIGHT, NO_EDGE,
};

pub use algorithms::ShortestPathConfig;
