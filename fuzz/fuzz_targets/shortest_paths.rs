#![no_main]

use graphsuite::{
    algorithms::{
        bellman_ford, bidirectional_dijkstra, dijkstra, floyd_warshall_with, has_cycle,
        strongly_connected_components, topological_sort,
    },
    AdjacencyList, EdgeList, Graph, ShortestPathConfig, Weight,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let [header, flags, rest @ ..] = data else {
        return;
    };
    let vertices = usize::from(header % 16) + 1;
    let directed = flags & 1 == 1;

    let edges: Vec<(usize, usize, Weight)> = rest
        .chunks_exact(3)
        .map(|chunk| {
            (
                usize::from(chunk[0]) % vertices,
                usize::from(chunk[1]) % vertices,
                Weight::from(chunk[2] as i8),
            )
        })
        .collect();

    let Ok(list) = AdjacencyList::from_edges(vertices, directed, &edges) else {
        return;
    };
    let Ok(edge_list) = EdgeList::from_edges(vertices, directed, &edges) else {
        return;
    };

    let all_pairs = floyd_warshall_with(&edge_list, ShortestPathConfig::default()).unwrap();
    for source in list.vertices() {
        let relaxed = bellman_ford(&edge_list, source).unwrap();

        if !list.has_negative_weight() {
            let tree = dijkstra(&list, source).unwrap();
            assert_eq!(tree.distances(), relaxed.distances());

            for target in list.vertices() {
                let result = bidirectional_dijkstra(&list, source, target).unwrap();
                assert_eq!(result.distance(), tree.distance(target).unwrap());
                assert_eq!(all_pairs.distance(source, target).unwrap(), tree.distance(target).unwrap());
            }
        } else if !all_pairs.has_negative_cycle() {
            for target in list.vertices() {
                assert_eq!(all_pairs.distance(source, target).unwrap(), relaxed.distance(target).unwrap());
            }
        }
    }

    if directed {
        let components = strongly_connected_components(&list);
        assert!(components.count() <= vertices);
        assert_eq!(topological_sort(&list).unwrap().is_some(), !has_cycle(&list));
    }
});
