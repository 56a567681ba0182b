use num_traits::Float;
use std::fmt::Debug;

use crate::graph::edge::{DirectedEdge, EdgeId};

/// Trait representing a read-only weighted directed graph
///
/// Edges are addressed through [`EdgeId`] handles so that algorithms can keep
/// back-references into the graph without owning or copying edges.
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Resolves an edge handle issued by this graph
    fn edge(&self, id: EdgeId) -> &DirectedEdge<W>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Number of edges leaving a vertex
    fn outdegree(&self, vertex: usize) -> usize {
        self.outgoing_edges(vertex).count()
    }

    /// Returns every edge, grouped by origin vertex
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new((0..self.vertex_count()).flat_map(move |v| self.outgoing_edges(v)))
    }
}
