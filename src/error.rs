use thiserror::Error;

/// Builds an [`Error::InvalidInput`] from a message or a format string.
///
/// ```rust,ignore
/// return Err(invalid_input!("graph is directed"));
/// return Err(invalid_input!("graph has {} vertices", n));
/// ```
macro_rules! invalid_input {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidInput($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidInput(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every operation validates its arguments before doing any work, so an error always means
/// that nothing was changed and no partial result was produced.
///
/// # Error Categories
///
/// ## Argument Errors
/// - [`Error::OutOfRange`] - A vertex index outside `0..vertex_count`
/// - [`Error::InvalidInput`] - A structural precondition of the algorithm was violated
///
/// ## Disjoint-Set Errors
/// - [`Error::NotFound`] - The element was never inserted with `make_set`
/// - [`Error::DuplicateElement`] - The bulk constructor was given the same element twice
///
/// ## Shortest-Path Errors
/// - [`Error::NegativeCycle`] - A negative cycle was found and the configuration rejects it
///
/// # Examples
///
/// ```rust
/// use graphsuite::{AdjacencyList, Error, Graph};
///
/// let mut graph = AdjacencyList::new(3, true)?;
/// match graph.add_edge(0, 7, 1) {
///     Err(Error::OutOfRange { vertex, vertex_count }) => {
///         assert_eq!(vertex, 7);
///         assert_eq!(vertex_count, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index is not in `0..vertex_count`.
    ///
    /// Raised immediately by the offending call; the graph is never partially modified.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex index
        vertex: usize,
        /// The number of vertices of the graph that rejected it
        vertex_count: usize,
    },

    /// A structural precondition was violated.
    ///
    /// Examples are a graph with negative weights handed to Dijkstra, a directed graph
    /// handed to Kruskal, or a graph constructed with zero vertices.
    #[error("Invalid input - {0}")]
    InvalidInput(String),

    /// A disjoint-set operation referenced an element that was never inserted.
    #[error("element {0} is not present in the disjoint set")]
    NotFound(String),

    /// A disjoint set was constructed from a list that contains the same element twice.
    #[error("element {0} appears more than once")]
    DuplicateElement(String),

    /// A negative-weight cycle was detected.
    ///
    /// Only returned when the caller asked for negative cycles to be rejected through
    /// [`ShortestPathConfig::reject_negative_cycles`](crate::ShortestPathConfig).
    #[error("negative cycle detected while searching from vertex {vertex}")]
    NegativeCycle {
        /// The source vertex of the search (for all-pairs searches, a vertex on the cycle)
        vertex: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange {
            vertex: 12,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "vertex 12 is out of range for a graph with 4 vertices"
        );
    }

    #[test]
    fn test_invalid_input_macro() {
        let plain = invalid_input!("graph is directed");
        assert_eq!(plain, Error::InvalidInput("graph is directed".to_string()));

        let formatted = invalid_input!("graph has {} vertices", 0);
        assert_eq!(formatted.to_string(), "Invalid input - graph has 0 vertices");
    }

    #[test]
    fn test_negative_cycle_message() {
        let err = Error::NegativeCycle { vertex: 3 };
        assert!(err.to_string().contains("vertex 3"));
    }
}
