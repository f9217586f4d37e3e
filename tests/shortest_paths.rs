//! Integration tests for the shortest-path family on the 13-vertex reference graph.

use graphsuite::{
    algorithms::{
        bellman_ford, bellman_ford_with, bfs_shortest_paths, bidirectional_dijkstra, dijkstra,
        floyd_warshall, floyd_warshall_with,
    },
    AdjacencyList, AdjacencyMatrix, EdgeList, Error, Graph, Result, ShortestPathConfig, Weight,
};

const REFERENCE_EDGES: &[(usize, usize, Weight)] = &[
    (0, 5, 3),
    (0, 1, 9),
    (2, 0, 2),
    (2, 3, 15),
    (3, 5, 14),
    (3, 2, 8),
    (4, 3, 44),
    (4, 2, 6),
    (5, 4, 1),
    (6, 4, 2),
    (6, 8, 3),
    (6, 0, 11),
    (6, 9, 23),
    (7, 6, 9),
    (8, 6, 3),
    (9, 11, 8),
    (9, 10, 5),
    (10, 12, 17),
    (11, 12, 33),
    (12, 9, 10),
];

fn reference<G: Graph>() -> Result<G> {
    G::from_edges(13, true, REFERENCE_EDGES)
}

fn check_six_to_three<G: Graph>() -> Result<()> {
    let graph: G = reference()?;

    let tree = dijkstra(&graph, 6)?;
    assert_eq!(tree.distance(6)?, Some(0));
    assert_eq!(tree.distance(3)?, Some(23));
    assert_eq!(tree.path(3)?, Some(vec![6, 4, 2, 3]));

    let all_pairs = floyd_warshall(&graph)?;
    assert_eq!(all_pairs.distance(6, 6)?, Some(0));
    assert_eq!(all_pairs.distance(6, 3)?, Some(23));

    let bidirectional = bidirectional_dijkstra(&graph, 6, 3)?;
    assert_eq!(bidirectional.distance(), Some(23));

    let relaxed = bellman_ford(&graph, 6)?;
    assert_eq!(relaxed.distance(3)?, Some(23));
    Ok(())
}

#[test]
fn test_reference_scenario_all_encodings() -> Result<()> {
    check_six_to_three::<AdjacencyList>()?;
    check_six_to_three::<AdjacencyMatrix>()?;
    check_six_to_three::<EdgeList>()?;
    Ok(())
}

#[test]
fn test_unreachable_vertex() -> Result<()> {
    let graph: AdjacencyList = reference()?;
    let tree = dijkstra(&graph, 6)?;

    assert_eq!(tree.distance(7)?, None);
    assert_eq!(tree.path(7)?, None);
    assert!(!tree.is_reachable(7)?);
    Ok(())
}

#[test]
fn test_floyd_warshall_agrees_with_bellman_ford() -> Result<()> {
    let graph: EdgeList = reference()?;
    let all_pairs = floyd_warshall(&graph)?;

    for source in graph.vertices() {
        let tree = bellman_ford(&graph, source)?;
        for target in graph.vertices() {
            assert_eq!(
                all_pairs.distance(source, target)?,
                tree.distance(target)?,
                "{source} -> {target}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_unit_weights_dijkstra_equals_bfs() -> Result<()> {
    let edges: Vec<_> = REFERENCE_EDGES.iter().map(|&(u, v, _)| (u, v, 1)).collect();
    let graph = AdjacencyList::from_edges(13, true, &edges)?;

    for source in graph.vertices() {
        assert_eq!(
            dijkstra(&graph, source)?.distances(),
            bfs_shortest_paths(&graph, source)?.distances()
        );
    }
    Ok(())
}

#[test]
fn test_negative_weights_rejected_by_non_negative_family() -> Result<()> {
    let graph = AdjacencyList::from_edges(3, true, &[(0, 1, 2), (1, 2, -1)])?;

    assert!(matches!(dijkstra(&graph, 0), Err(Error::InvalidInput(_))));
    assert!(matches!(
        bfs_shortest_paths(&graph, 0),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bidirectional_dijkstra(&graph, 0, 2),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(floyd_warshall(&graph), Err(Error::InvalidInput(_))));

    assert_eq!(bellman_ford(&graph, 0)?.distance(2)?, Some(1));
    assert_eq!(
        floyd_warshall_with(&graph, ShortestPathConfig::default())?.distance(0, 2)?,
        Some(1)
    );
    Ok(())
}

#[test]
fn test_negative_cycle_policies() -> Result<()> {
    let graph = EdgeList::from_edges(4, true, &[(0, 1, 1), (1, 2, -2), (2, 1, 1), (2, 3, 1)])?;

    assert!(bellman_ford(&graph, 0)?.has_negative_cycle());
    assert_eq!(
        bellman_ford_with(&graph, 0, ShortestPathConfig::strict()),
        Err(Error::NegativeCycle { vertex: 0 })
    );
    assert!(!bellman_ford_with(&graph, 0, ShortestPathConfig::legacy())?.has_negative_cycle());

    assert!(floyd_warshall_with(&graph, ShortestPathConfig::default())?.has_negative_cycle());
    assert!(matches!(
        floyd_warshall_with(&graph, ShortestPathConfig::strict()),
        Err(Error::NegativeCycle { .. })
    ));
    Ok(())
}

#[test]
fn test_source_out_of_range() -> Result<()> {
    let graph: AdjacencyMatrix = reference()?;

    assert!(matches!(dijkstra(&graph, 13), Err(Error::OutOfRange { .. })));
    assert!(matches!(
        bellman_ford(&graph, 20),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        bidirectional_dijkstra(&graph, 0, 13),
        Err(Error::OutOfRange { .. })
    ));
    Ok(())
}
