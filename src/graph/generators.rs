use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::EdgeWeightedDigraph;

/// Generates a random digraph with `n` vertices and `m` edges whose weights
/// are drawn uniformly from `[min_weight, max_weight)`
///
/// Self-loops and parallel edges are allowed. With a negative `min_weight`
/// the graph may well contain negative cycles.
pub fn generate_random_digraph(
    n: usize,
    m: usize,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> EdgeWeightedDigraph<f64> {
    assert!(n > 0 || m == 0, "edges need at least one vertex");
    assert!(min_weight < max_weight, "empty weight range");

    let mut graph = EdgeWeightedDigraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(min_weight..max_weight);
        graph.add(u, v, weight).expect("endpoints in range");
    }

    graph
}

/// Generates a random digraph that has negative edges but no negative cycle
///
/// Each vertex gets a random potential `p`, and the edge `u -> v` weighs
/// `c + p[u] - p[v]` for a non-negative `c`. Potentials cancel around any
/// cycle, so every cycle weighs the sum of its `c` terms.
pub fn generate_with_potentials(n: usize, m: usize, seed: u64) -> EdgeWeightedDigraph<f64> {
    assert!(n > 0 || m == 0, "edges need at least one vertex");

    let mut graph = EdgeWeightedDigraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let potential: Vec<f64> = (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect();

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost = rng.gen_range(0.0..20.0);
        graph
            .add(u, v, cost + potential[u] - potential[v])
            .expect("endpoints in range");
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn same_seed_same_graph() {
        let a = generate_random_digraph(20, 60, -5.0, 10.0, 7);
        let b = generate_random_digraph(20, 60, -5.0, 10.0, 7);
        assert_eq!(a.edge_count(), 60);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn potentials_keep_weights_in_range() {
        let g = generate_with_potentials(10, 40, 3);
        assert_eq!(g.edge_count(), 40);
        for id in g.edges() {
            let w = g.edge(id).weight();
            assert!(w.is_finite());
            assert!(w > -100.0 && w < 120.0);
        }
    }

    #[test]
    fn edges_stay_inside_the_graph() {
        for seed in 0..20 {
            let g = generate_random_digraph(3, 30, -1.0, 1.0, seed);
            assert!(g.edges().all(|id| g.edge(id).to() < 3 && g.edge(id).from() < 3));
            assert_eq!(generate_with_potentials(1, 5, seed).edge_count(), 5);
        }
    }
}
