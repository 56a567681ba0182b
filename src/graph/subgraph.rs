use num_traits::Float;
use std::fmt::Debug;

use crate::graph::edge::{DirectedEdge, EdgeId};
use crate::graph::traits::Graph;

/// A graph made of a chosen subset of another graph's edges
///
/// Holds the same vertex set as its parent and reuses the parent's edge
/// handles, so anything found in the subgraph (paths, cycles) can be reported
/// directly in terms of the parent graph.
#[derive(Debug)]
pub struct EdgeSubgraph<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    parent: &'g G,
    adjacency: Vec<Vec<EdgeId>>,
    edge_count: usize,
    _weight: std::marker::PhantomData<W>,
}

impl<'g, W, G> EdgeSubgraph<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Creates an empty view over `parent`
    pub fn new(parent: &'g G) -> Self {
        EdgeSubgraph {
            parent,
            adjacency: vec![Vec::new(); parent.vertex_count()],
            edge_count: 0,
            _weight: std::marker::PhantomData,
        }
    }

    /// Builds a view from a set of parent edges
    pub fn from_edges<I>(parent: &'g G, edges: I) -> Self
    where
        I: IntoIterator<Item = EdgeId>,
    {
        let mut subgraph = EdgeSubgraph::new(parent);
        for id in edges {
            subgraph.insert(id);
        }
        subgraph
    }

    /// Adds one of the parent's edges to the view
    pub fn insert(&mut self, id: EdgeId) {
        let from = self.parent.edge(id).from();
        self.adjacency[from].push(id);
        self.edge_count += 1;
    }
}

impl<'g, W, G> Graph<W> for EdgeSubgraph<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge(&self, id: EdgeId) -> &DirectedEdge<W> {
        self.parent.edge(id)
    }
}
