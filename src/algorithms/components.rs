//! Connected, strongly connected and weakly connected components.
//!
//! All component functions label every vertex with a dense component id in `0..count`.
//! Ids are assigned in the order components are discovered, which is deterministic for a
//! given graph and insertion order.
//!
//! Strongly connected components use Kosaraju's algorithm: a full post-order of the
//! transposed graph, then one exploration of the original graph per unlabelled vertex in
//! decreasing finish order. Each exploration is confined to exactly one component because
//! the vertex finishing last in the transpose is a source of the condensation DAG.

use std::collections::BTreeMap;

use tracing::{debug, instrument, trace, warn};

use crate::{
    algorithms::traversal::{dfs, explore_preorder, full_postorder},
    disjoint_set::DisjointSet,
    graph::{AdjacencyList, Graph, Weight},
    utils::BitSet,
    Error, Result,
};

/// A partition of the vertices of a graph into components.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::connected_components, AdjacencyList, Graph};
///
/// let graph = AdjacencyList::from_edges(5, false, &[(0, 1, 1), (3, 4, 1)])?;
/// let components = connected_components(&graph)?;
///
/// assert_eq!(components.count(), 3);
/// assert_eq!(components.groups(), vec![vec![0, 1], vec![2], vec![3, 4]]);
/// assert_eq!(components.component_of(4)?, 2);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    fn from_labels(labels: Vec<usize>, count: usize) -> Self {
        Components { labels, count }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the component id of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `vertex` was not part of
    /// the labelled graph.
    pub fn component_of(&self, vertex: usize) -> Result<usize> {
        self.labels
            .get(vertex)
            .copied()
            .ok_or(Error::OutOfRange {
                vertex,
                vertex_count: self.labels.len(),
            })
    }

    /// Returns `true` if both vertices belong to the same component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an unknown vertex.
    pub fn connected(&self, first: usize, second: usize) -> Result<bool> {
        Ok(self.component_of(first)? == self.component_of(second)?)
    }

    /// Returns the component id of every vertex, indexed by vertex.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the vertices of each component, indexed by component id.
    ///
    /// Vertices inside a group are in ascending order.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (vertex, &label) in self.labels.iter().enumerate() {
            groups[label].push(vertex);
        }
        groups
    }
}

/// Labels the connected components of an undirected graph.
///
/// Every unlabelled vertex, in index order, starts a depth-first sweep that labels everything
/// it reaches with a fresh id.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for directed graphs. Use
/// [`strongly_connected_components`] or [`weakly_connected_components`] instead.
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn connected_components<G: Graph>(graph: &G) -> Result<Components> {
    if graph.is_directed() {
        warn!("connected components requested on a directed graph");
        return Err(invalid_input!(
            "connected components require an undirected graph"
        ));
    }

    Ok(label_components(graph))
}

/// Labels every vertex with the id of the set of vertices its sweep reaches.
///
/// On undirected graphs these are the connected components.
pub(crate) fn label_components<G: Graph>(graph: &G) -> Components {
    let vertex_count = graph.vertex_count();
    let mut visited = BitSet::new(vertex_count);
    let mut labels = vec![0; vertex_count];
    let mut count = 0;
    let mut reached = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        reached.clear();
        explore_preorder(graph, root, &mut visited, &mut reached);
        for &vertex in &reached {
            labels[vertex] = count;
        }
        trace!(root, size = reached.len(), "component");
        count += 1;
    }

    debug!(count, "connected components labelled");
    Components::from_labels(labels, count)
}

/// Labels the strongly connected components with Kosaraju's algorithm.
///
/// Undirected graphs are accepted; their strongly connected components are their connected
/// components.
///
/// # Complexity
///
/// O(V + E), plus one transposed copy of the graph
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::strongly_connected_components, AdjacencyList, Graph};
///
/// // 0 <-> 1 -> 2
/// let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 1), (1, 0, 1), (1, 2, 1)])?;
/// let components = strongly_connected_components(&graph);
///
/// assert_eq!(components.count(), 2);
/// assert!(components.connected(0, 1)?);
/// assert!(!components.connected(1, 2)?);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[must_use]
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn strongly_connected_components<G: Graph>(graph: &G) -> Components {
    let vertex_count = graph.vertex_count();
    let transpose = AdjacencyList::transpose_of(graph);
    let finish_order = full_postorder(&transpose);

    let mut visited = BitSet::new(vertex_count);
    let mut labels = vec![0; vertex_count];
    let mut count = 0;
    let mut reached = Vec::new();

    for &root in finish_order.iter().rev() {
        if visited.contains(root) {
            continue;
        }
        reached.clear();
        explore_preorder(graph, root, &mut visited, &mut reached);
        for &vertex in &reached {
            labels[vertex] = count;
        }
        trace!(root, size = reached.len(), "strong component");
        count += 1;
    }

    debug!(count, "strongly connected components labelled");
    Components::from_labels(labels, count)
}

/// Labels the weakly connected components of a graph, ignoring edge direction.
///
/// Endpoints of every stored edge are merged in a [`DisjointSet`]. Component ids follow the
/// index of the first vertex of each component.
///
/// # Errors
///
/// Propagates disjoint-set errors, which cannot occur for a well-formed graph.
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn weakly_connected_components<G: Graph>(graph: &G) -> Result<Components> {
    let mut sets = DisjointSet::from_elements(graph.vertices())?;
    for edge in graph.edges() {
        if sets.union(&edge.source, &edge.destination)? {
            trace!(%edge, "union");
        }
    }

    let mut root_labels: BTreeMap<usize, usize> = BTreeMap::new();
    let mut labels = Vec::with_capacity(graph.vertex_count());
    for vertex in graph.vertices() {
        let root = sets.find(&vertex)?;
        let next = root_labels.len();
        labels.push(*root_labels.entry(root).or_insert(next));
    }

    let count = root_labels.len();
    debug!(count, "weakly connected components labelled");
    Ok(Components::from_labels(labels, count))
}

/// Labels the components appropriate for the graph's direction.
///
/// Undirected graphs get their connected components, directed graphs their strongly
/// connected components.
///
/// # Errors
///
/// Does not fail for a well-formed graph; the `Result` mirrors [`connected_components`].
pub fn components<G: Graph>(graph: &G) -> Result<Components> {
    if graph.is_directed() {
        Ok(strongly_connected_components(graph))
    } else {
        connected_components(graph)
    }
}

/// Returns every vertex reachable from `source`, in depth-first discovery order.
///
/// The source itself is always included.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `source` is not a vertex of
/// `graph`.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{algorithms::reachable, EdgeList, Graph};
///
/// let graph = EdgeList::from_edges(4, true, &[(0, 1, 1), (1, 2, 1), (3, 0, 1)])?;
/// assert_eq!(reachable(&graph, 0)?, vec![0, 1, 2]);
/// assert_eq!(reachable(&graph, 2)?, vec![2]);
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn reachable<G: Graph>(graph: &G, source: usize) -> Result<Vec<usize>> {
    let reached: Vec<usize> = dfs(graph, source)?.collect();
    debug!(reached = reached.len(), "reachability finished");
    Ok(reached)
}

/// Collapses every component into a single vertex.
///
/// The result is a directed [`AdjacencyList`] with one vertex per component. An edge
/// `a -> b` exists when some edge of `graph` leads from component `a` to a different component
/// `b`; parallel edges are merged, keeping the lightest weight. For strongly connected
/// components the result is acyclic.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if `components` does not label
/// exactly the vertices of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphsuite::{
///     algorithms::{condensation, has_cycle, strongly_connected_components},
///     AdjacencyList, Graph,
/// };
///
/// let graph = AdjacencyList::from_edges(4, true, &[(0, 1, 1), (1, 0, 1), (1, 2, 4), (2, 3, 1), (3, 2, 1)])?;
/// let components = strongly_connected_components(&graph);
/// let dag = condensation(&graph, &components)?;
///
/// assert_eq!(dag.vertex_count(), 2);
/// assert_eq!(dag.edge_count(), 1);
/// assert!(!has_cycle(&dag));
/// # Ok::<(), graphsuite::Error>(())
/// ```
#[instrument(level = "debug", skip(graph, components), fields(vertices = graph.vertex_count(), components = components.count()))]
pub fn condensation<G: Graph>(graph: &G, components: &Components) -> Result<AdjacencyList> {
    if components.labels().len() != graph.vertex_count() {
        warn!(
            labelled = components.labels().len(),
            "component labels do not match the graph"
        );
        return Err(invalid_input!(
            "components label {} vertices, graph has {}",
            components.labels().len(),
            graph.vertex_count()
        ));
    }

    let labels = components.labels();
    let mut crossing: BTreeMap<(usize, usize), Weight> = BTreeMap::new();
    for edge in graph.edges() {
        let from = labels[edge.source];
        let to = labels[edge.destination];
        if from == to {
            continue;
        }
        crossing
            .entry((from, to))
            .and_modify(|weight| *weight = (*weight).min(edge.weight))
            .or_insert(edge.weight);
    }

    let mut dag = AdjacencyList::new(components.count(), true)?;
    for ((from, to), weight) in crossing {
        dag.add_edge(from, to, weight)?;
    }

    debug!(edges = dag.edge_count(), "condensation built");
    Ok(dag)
}
