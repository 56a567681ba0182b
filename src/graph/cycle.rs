//! Directed cycle detection on edge-weighted graphs.
//!
//! Uses an iterative depth-first search so deep graphs cannot overflow the
//! call stack. Roots are tried in vertex order and edges in insertion order,
//! which makes the reported cycle deterministic for a given graph.

use num_traits::Float;
use std::fmt::Debug;

use crate::graph::edge::EdgeId;
use crate::graph::traits::Graph;

/// Finds one directed cycle in a graph, if any exists
#[derive(Debug, Default)]
pub struct DirectedCycle;

impl DirectedCycle {
    /// Returns the edges of a directed cycle in traversal order, or `None`
    /// if the graph is acyclic
    ///
    /// The first edge leaves the vertex where the cycle was closed and the
    /// last edge returns to it. A self-loop is reported as a single edge.
    pub fn find<W, G>(graph: &G) -> Option<Vec<EdgeId>>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<EdgeId>> = vec![None; n];

        for root in 0..n {
            if marked[root] {
                continue;
            }

            marked[root] = true;
            on_stack[root] = true;
            let mut stack: Vec<(usize, Box<dyn Iterator<Item = EdgeId> + '_>)> =
                vec![(root, graph.outgoing_edges(root))];

            loop {
                let Some((v, edges)) = stack.last_mut() else {
                    break;
                };
                let v = *v;
                let next = edges.next();

                let Some(id) = next else {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                };

                let w = graph.edge(id).to();
                if !marked[w] {
                    marked[w] = true;
                    on_stack[w] = true;
                    edge_to[w] = Some(id);
                    stack.push((w, graph.outgoing_edges(w)));
                } else if on_stack[w] {
                    return Some(trace_cycle(graph, &edge_to, id, v, w));
                }
            }
        }

        None
    }
}

// Walks tree edges back from `v` to `w`, then closes with the back edge `v -> w`.
fn trace_cycle<W, G>(
    graph: &G,
    edge_to: &[Option<EdgeId>],
    back_edge: EdgeId,
    v: usize,
    w: usize,
) -> Vec<EdgeId>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let mut cycle = vec![back_edge];
    let mut x = v;
    // `w` is an ancestor of `v` on the DFS path, so every vertex strictly
    // below it has a tree edge.
    while x != w {
        let Some(tree_edge) = edge_to[x] else {
            break;
        };
        cycle.push(tree_edge);
        x = graph.edge(tree_edge).from();
    }
    cycle.reverse();
    debug_assert!(is_cycle(graph, &cycle));
    cycle
}

/// Returns true if the edges chain head-to-tail and the last edge returns to
/// the origin of the first
pub fn is_cycle<W, G>(graph: &G, edges: &[EdgeId]) -> bool
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    let (Some(&first), Some(&last)) = (edges.first(), edges.last()) else {
        return false;
    };

    let chained = edges
        .windows(2)
        .all(|pair| graph.edge(pair[0]).to() == graph.edge(pair[1]).from());
    chained && graph.edge(last).to() == graph.edge(first).from()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeWeightedDigraph;

    #[test]
    fn dag_has_no_cycle() {
        let mut g = EdgeWeightedDigraph::new(4);
        g.add(0, 1, 1.0).unwrap();
        g.add(0, 2, 1.0).unwrap();
        g.add(1, 3, 1.0).unwrap();
        g.add(2, 3, 1.0).unwrap();
        assert_eq!(DirectedCycle::find(&g), None);
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        let g: EdgeWeightedDigraph<f64> = EdgeWeightedDigraph::new(0);
        assert_eq!(DirectedCycle::find(&g), None);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut g = EdgeWeightedDigraph::new(2);
        g.add(0, 1, 1.0).unwrap();
        let looped = g.add(1, 1, -1.0).unwrap();
        assert_eq!(DirectedCycle::find(&g), Some(vec![looped]));
    }

    #[test]
    fn finds_cycle_in_traversal_order() {
        let mut g = EdgeWeightedDigraph::new(5);
        let e01 = g.add(0, 1, 1.0).unwrap();
        let e12 = g.add(1, 2, 1.0).unwrap();
        let e23 = g.add(2, 3, 1.0).unwrap();
        let e31 = g.add(3, 1, 1.0).unwrap();
        g.add(3, 4, 1.0).unwrap();

        let cycle = DirectedCycle::find(&g).unwrap();
        assert_eq!(cycle, vec![e12, e23, e31]);
        assert!(!cycle.contains(&e01));
        assert!(is_cycle(&g, &cycle));
    }

    #[test]
    fn cycle_unreachable_from_vertex_zero_is_found() {
        let mut g = EdgeWeightedDigraph::new(4);
        g.add(0, 1, 1.0).unwrap();
        g.add(2, 3, 1.0).unwrap();
        g.add(3, 2, 1.0).unwrap();

        let cycle = DirectedCycle::find(&g).unwrap();
        assert_eq!(cycle.len(), 2);
        assert!(is_cycle(&g, &cycle));
    }

    #[test]
    fn is_cycle_rejects_open_chains() {
        let mut g = EdgeWeightedDigraph::new(3);
        let a = g.add(0, 1, 1.0).unwrap();
        let b = g.add(1, 2, 1.0).unwrap();
        assert!(!is_cycle(&g, &[a, b]));
        assert!(!is_cycle(&g, &[]));
    }
}
