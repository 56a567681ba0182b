use bellman_sssp::graph::generators::{generate_random_digraph, generate_with_potentials};
use bellman_sssp::graph::Graph;
use bellman_sssp::{BellmanFordSP, DijkstraSP, EdgeWeightedDigraph, ShortestPaths};
use rayon::prelude::*;
use std::time::{Duration, Instant};

// Runs Bellman-Ford from several sources in parallel over one shared graph
fn benchmark_sources(name: &str, graph: &EdgeWeightedDigraph<f64>, sources: &[usize]) -> Duration {
    println!("Running {} from {} sources on graph with {} vertices...", name, sources.len(), graph.vertex_count());

    let start = Instant::now();
    let outcomes: Vec<(bool, usize)> = sources
        .par_iter()
        .map(|&s| {
            let sp = BellmanFordSP::new(graph, s).expect("source is in range");
            (sp.has_negative_cycle(), sp.stats().relaxations)
        })
        .collect();
    let duration = start.elapsed();

    let cycles = outcomes.iter().filter(|(cycle, _)| *cycle).count();
    let relaxations: usize = outcomes.iter().map(|(_, r)| r).sum();
    println!("  - {} runs hit a negative cycle, {} relaxations in {:?}", cycles, relaxations, duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let edge_factor = 4;
    let sources: Vec<usize> = (0..8).collect();

    println!("=====================================================");
    println!("Benchmark: Bellman-Ford (queue based) vs Dijkstra");
    println!("Edge factor: {} edges per vertex", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating graphs with {} vertices...", size);
        let positive = generate_random_digraph(size, size * edge_factor, 1.0, 100.0, size as u64);
        let potentials = generate_with_potentials(size, size * edge_factor, size as u64);
        let cyclic = generate_random_digraph(size, size * edge_factor, -10.0, 100.0, size as u64);

        let start = Instant::now();
        let dijkstra = DijkstraSP::new(&positive, 0).expect("weights are positive");
        let dijkstra_time = start.elapsed();
        let reachable = (0..size).filter(|&v| dijkstra.has_path_to(v).unwrap_or(false)).count();
        println!("Dijkstra: {} reachable vertices in {:?}", reachable, dijkstra_time);

        let start = Instant::now();
        let bellman = BellmanFordSP::new(&positive, 0).expect("source is in range");
        let bellman_time = start.elapsed();
        println!("Bellman-Ford (same graph): {:?}, {:?}", bellman_time, bellman.stats());

        let potentials_time = benchmark_sources("Bellman-Ford (negative edges)", &potentials, &sources);
        let cyclic_time = benchmark_sources("Bellman-Ford (negative cycles)", &cyclic, &sources);

        results.push((size, dijkstra_time, bellman_time, potentials_time, cyclic_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<14} | {:<14} | {:<14} | {:<14}",
             "Vertices", "Dijkstra (ms)", "BF (ms)", "BF neg (ms)", "BF cycle (ms)");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bellman_time, potentials_time, cyclic_time) in &results {
        println!("{:<10} | {:<14} | {:<14} | {:<14} | {:<14}",
                 size,
                 dijkstra_time.as_millis(),
                 bellman_time.as_millis(),
                 potentials_time.as_millis(),
                 cyclic_time.as_millis());
    }
}
