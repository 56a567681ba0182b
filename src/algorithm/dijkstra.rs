use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::traits::ShortestPaths;
use crate::algorithm::tree::ShortestPathTree;
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{DirectedEdge, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm for graphs without negative edges
///
/// Serves as a faster alternative to [`BellmanFordSP`](crate::BellmanFordSP)
/// when every weight is non-negative, and as a reference to check it against.
#[derive(Debug)]
pub struct DijkstraSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    tree: ShortestPathTree<W>,
}

impl<'g, W, G> DijkstraSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Computes shortest paths from `source`; fails if any edge is negative
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if let Some(id) = graph.edges().find(|&id| graph.edge(id).weight() < W::zero()) {
            let weight = graph.edge(id).weight().to_f64().unwrap_or(f64::NAN);
            return Err(Error::NegativeWeight(weight));
        }

        let mut tree = ShortestPathTree::new(graph.vertex_count(), source);
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, OrderedFloat(W::zero()));

        // Main Dijkstra loop
        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if tree.dist_to[u] < dist_u {
                continue;
            }

            for id in graph.outgoing_edges(u) {
                let edge = graph.edge(id);
                if tree.relax(id, edge) {
                    queue.push(edge.to(), OrderedFloat(tree.dist_to[edge.to()]));
                }
            }
        }

        Ok(DijkstraSP { graph, tree })
    }
}

impl<'g, W, G> ShortestPaths<W> for DijkstraSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn source(&self) -> usize {
        self.tree.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.tree.check_vertex(v)?;
        Ok(self.tree.dist_to[v])
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.tree.check_vertex(v)?;
        Ok(self.tree.dist_to[v] < W::infinity())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.tree.path_to(self.graph, v)
    }
}
