#![allow(unused)]
extern crate graphsuite;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphsuite::{
    algorithms::{
        bellman_ford, bidirectional_dijkstra, dijkstra, floyd_warshall, kruskal,
        strongly_connected_components, topological_sort,
    },
    AdjacencyList, AdjacencyMatrix, EdgeList, Graph, Weight,
};
use rand::prelude::*;
use std::hint::black_box;

/// Seeded random edges, so every run measures the same graphs.
fn generate_edges(vertices: usize, edges: usize) -> Vec<(usize, usize, Weight)> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..edges)
        .map(|_| {
            let source = rng.random_range(0..vertices);
            let destination = rng.random_range(0..vertices);
            let weight: Weight = rng.random_range(0..100);
            (source, destination, weight)
        })
        .collect()
}

/// Benchmark single-source shortest paths on each encoding
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for &vertices in &[100_usize, 1_000] {
        let edges = generate_edges(vertices, vertices * 8);
        let list = AdjacencyList::from_edges(vertices, true, &edges).unwrap();
        let matrix = AdjacencyMatrix::from_edges(vertices, true, &edges).unwrap();
        let edge_list = EdgeList::from_edges(vertices, true, &edges).unwrap();

        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("dijkstra_list", vertices), &list, |b, g| {
            b.iter(|| black_box(dijkstra(black_box(g), 0).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("dijkstra_matrix", vertices),
            &matrix,
            |b, g| {
                b.iter(|| black_box(dijkstra(black_box(g), 0).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bidirectional_list", vertices),
            &list,
            |b, g| {
                b.iter(|| black_box(bidirectional_dijkstra(black_box(g), 0, vertices - 1).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bellman_ford_edges", vertices),
            &edge_list,
            |b, g| {
                b.iter(|| black_box(bellman_ford(black_box(g), 0).unwrap()));
            },
        );
    }
    group.finish();
}

/// Benchmark all-pairs shortest paths on a dense graph
fn bench_all_pairs(c: &mut Criterion) {
    let edges = generate_edges(120, 2_000);
    let matrix = AdjacencyMatrix::from_edges(120, true, &edges).unwrap();

    c.bench_function("floyd_warshall_120", |b| {
        b.iter(|| black_box(floyd_warshall(black_box(&matrix)).unwrap()));
    });
}

/// Benchmark structural algorithms
fn bench_structure(c: &mut Criterion) {
    let vertices = 5_000;
    let edges = generate_edges(vertices, vertices * 4);
    let directed = AdjacencyList::from_edges(vertices, true, &edges).unwrap();
    let undirected = EdgeList::from_edges(vertices, false, &edges).unwrap();

    let forward: Vec<_> = edges
        .iter()
        .filter(|&&(u, v, _)| u != v)
        .map(|&(u, v, w)| (u.min(v), u.max(v), w))
        .collect();
    let dag = AdjacencyList::from_edges(vertices, true, &forward).unwrap();

    let mut group = c.benchmark_group("structure");
    group.throughput(Throughput::Elements(edges.len() as u64));
    group.bench_function("strongly_connected_components", |b| {
        b.iter(|| black_box(strongly_connected_components(black_box(&directed))));
    });
    group.bench_function("topological_sort", |b| {
        b.iter(|| black_box(topological_sort(black_box(&dag)).unwrap()));
    });
    group.bench_function("kruskal", |b| {
        b.iter(|| black_box(kruskal(black_box(&undirected)).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_shortest_paths, bench_all_pairs, bench_structure);
criterion_main!(benches);
