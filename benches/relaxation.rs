use bellman_sssp::graph::generators::{generate_random_digraph, generate_with_potentials};
use bellman_sssp::{BellmanFordSP, DijkstraSP};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_negative_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("negative_edges");
    for &n in &[1_000usize, 10_000] {
        let graph = generate_with_potentials(n, n * 4, 42);
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| BellmanFordSP::new(g, black_box(0)).unwrap())
        });
    }
    group.finish();
}

fn bench_negative_cycle(c: &mut Criterion) {
    let graph = generate_random_digraph(10_000, 40_000, -10.0, 100.0, 42);
    c.bench_function("negative_cycle_detection", |b| {
        b.iter(|| BellmanFordSP::new(&graph, black_box(0)).unwrap().has_negative_cycle())
    });
}

fn bench_positive_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("positive_weights");
    let graph = generate_random_digraph(10_000, 40_000, 1.0, 100.0, 42);
    group.bench_function("bellman_ford", |b| b.iter(|| BellmanFordSP::new(&graph, black_box(0)).unwrap()));
    group.bench_function("dijkstra", |b| b.iter(|| DijkstraSP::new(&graph, black_box(0)).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_negative_edges, bench_negative_cycle, bench_positive_weights);
criterion_main!(benches);
