//! Benchmarks for the traversal engines.
//!
//! Measures both engines on generated sparse graphs:
//! - Heap-backed Dijkstra
//! - Linear-scan Dijkstra (small graphs only)
//! - Kosaraju on a random graph and on one long cycle
//! - Loading the edge-list text format

extern crate graphscope;

use criterion::{criterion_group, criterion_main, Criterion};
use graphscope::{
    algorithms::{shortest_paths, shortest_paths_scan, strongly_connected_components},
    graph::parse_edge_list,
    Graph,
};
use std::hint::black_box;

/// Build a reproducible random graph on vertices `1..=vertices`.
fn random_graph(vertices: u64, edges: usize) -> Graph {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut graph = Graph::with_capacity(vertices as usize);
    for label in 1..=vertices {
        graph.add_vertex(label);
    }
    for _ in 0..edges {
        let tail = next() % vertices + 1;
        let head = next() % vertices + 1;
        let weight = (next() % 1000) as u32;
        graph.add_edge(tail, head, weight);
    }
    graph
}

/// Benchmark heap-backed Dijkstra on 50k vertices and 400k edges.
fn bench_dijkstra_heap(c: &mut Criterion) {
    let graph = random_graph(50_000, 400_000);

    c.bench_function("dijkstra_heap_50k", |b| {
        b.iter(|| {
            let paths = shortest_paths(black_box(&graph), 1).unwrap();
            black_box(paths.reachable_count())
        });
    });
}

/// Benchmark the scanning variant where it is meant to be used: small graphs.
fn bench_dijkstra_scan(c: &mut Criterion) {
    let graph = random_graph(200, 4_000);

    c.bench_function("dijkstra_scan_200", |b| {
        b.iter(|| {
            let paths = shortest_paths_scan(black_box(&graph), 1).unwrap();
            black_box(paths.reachable_count())
        });
    });
}

/// Benchmark Kosaraju on a random graph with one giant component.
fn bench_kosaraju_random(c: &mut Criterion) {
    let graph = random_graph(100_000, 300_000);

    c.bench_function("kosaraju_random_100k", |b| {
        b.iter(|| {
            let components = strongly_connected_components(black_box(&graph));
            black_box(components.largest(5))
        });
    });
}

/// Benchmark Kosaraju on a single 200k-vertex cycle, the deepest possible search.
fn bench_kosaraju_deep_cycle(c: &mut Criterion) {
    let n = 200_000u64;
    let mut graph = Graph::with_capacity(n as usize);
    for i in 0..n {
        graph.add_edge(i, (i + 1) % n, 1);
    }

    c.bench_function("kosaraju_cycle_200k", |b| {
        b.iter(|| {
            let components = strongly_connected_components(black_box(&graph));
            black_box(components.count())
        });
    });
}

/// Benchmark parsing an edge list with 100k lines.
fn bench_parse_edge_list(c: &mut Criterion) {
    let text: String = (1..=100_000u64)
        .map(|i| format!("{i} {}\n", i % 5_000 + 1))
        .collect();

    c.bench_function("parse_edge_list_100k", |b| {
        b.iter(|| {
            let graph = parse_edge_list(black_box(&text)).unwrap();
            black_box(graph.edge_count())
        });
    });
}

criterion_group!(
    benches,
    bench_dijkstra_heap,
    bench_dijkstra_scan,
    bench_kosaraju_random,
    bench_kosaraju_deep_cycle,
    bench_parse_edge_list
);
criterion_main!(benches);
