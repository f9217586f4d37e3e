//! In-memory weighted graphs with three interchangeable encodings.
//!
//! # Architecture
//!
//! - **Core Types**: [`Edge`] and [`Weight`] describe a single weighted edge
//! - **Contract**: [`Graph`] is implemented by every encoding and is what algorithms consume
//! - **Encodings**: [`AdjacencyList`], [`AdjacencyMatrix`] and [`EdgeList`]
//!
//! # Choosing an Encoding
//!
//! | Encoding | `add_edge` | `has_edge` | neighbors | Memory |
//! |----------|-----------|------------|-----------|--------|
//! | [`AdjacencyList`] | O(1) | O(deg) | O(deg) | O(V + E) |
//! | [`AdjacencyMatrix`] | O(1) | O(1) | O(V) | O(V²) |
//! | [`EdgeList`] | O(1) | O(E) | O(E) | O(E) |
//!
//! Distances and component partitions agree across all three encodings, while orders
//! may not: lists yield neighbors in insertion order, the matrix in index order, so traversal
//! and topological orders may differ. The matrix also keeps only the last weight per ordered
//! pair, so graphs with parallel edges may differ.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphsuite::{AdjacencyMatrix, Graph};
//!
//! let graph = AdjacencyMatrix::from_edges(4, true, &[(0, 1, 2), (1, 3, 4), (0, 3, 9)])?;
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.out_degree(0)?, 2);
//! # Ok::<(), graphsuite::Error>(())
//! ```

mod adjacency_list;
mod adjacency_matrix;
mod edge;
mod edge_list;
mod traits;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::{AdjacencyMatrix, NO_EDGE};
pub use edge::{Edge, Weight, DEFAULT_WEIGHT};
pub use edge_list::EdgeList;
pub use traits::Graph;
