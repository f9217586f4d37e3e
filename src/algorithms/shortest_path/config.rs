//! Configuration for the algorithms that accept negative weights.
//!
//! Bellman-Ford and Floyd-Warshall are the only shortest-path algorithms in this crate that
//! run on graphs with negative edge weights. On such graphs a reachable negative cycle makes
//! shortest distances undefined; this module decides how that case is reported.

/// Configuration for negative-weight shortest-path searches
///
/// The default detects negative cycles and flags them on the result, leaving the decision to
/// the caller. Use [`strict`](Self::strict) to turn a detected cycle into an error, or
/// [`legacy`](Self::legacy) to run the plain fixed-round algorithm with no detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    /// Run negative cycle detection
    /// Bellman-Ford performs one extra relaxation pass, Floyd-Warshall inspects its diagonal
    pub detect_negative_cycles: bool,

    /// Fail with [`Error::NegativeCycle`](crate::Error::NegativeCycle) when a cycle is detected
    /// Has no effect unless `detect_negative_cycles` is set
    pub reject_negative_cycles: bool,

    /// Stop Bellman-Ford as soon as a full pass relaxes nothing
    /// Results are identical, only the number of passes changes
    pub early_exit: bool,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            detect_negative_cycles: true,
            reject_negative_cycles: false,
            early_exit: true,
        }
    }
}

impl ShortestPathConfig {
    /// Creates a configuration that rejects negative cycles with an error
    #[must_use]
    pub fn strict() -> Self {
        Self {
            detect_negative_cycles: true,
            reject_negative_cycles: true,
            early_exit: true,
        }
    }

    /// Creates a configuration running exactly `|V| - 1` Bellman-Ford passes with no detection
    ///
    /// Distances on a graph with a reachable negative cycle are whatever the fixed number of
    /// rounds converges to.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            detect_negative_cycles: false,
            reject_negative_cycles: false,
            early_exit: false,
        }
    }
}
