use num_traits::Float;
use std::fmt::{self, Debug, Display};

use crate::graph::edge::{DirectedEdge, EdgeId};
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// An edge-weighted directed graph using adjacency lists
///
/// The vertex count is fixed at construction. Edges are stored once in an
/// arena and only ever appended; adjacency lists hold handles into it.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Every edge in insertion order
    edges: Vec<DirectedEdge<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [edge handle]
    adjacency: Vec<Vec<EdgeId>>,

    /// Number of edges pointing into each vertex
    indegree: Vec<usize>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
            indegree: vec![0; vertices],
        }
    }

    /// Appends an edge and returns its handle
    pub fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<EdgeId> {
        let (from, to) = (edge.from(), edge.to());
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.adjacency[from].push(id);
        self.indegree[to] += 1;
        Ok(id)
    }

    /// Builds and appends the edge `from -> to`
    pub fn add(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId> {
        self.add_edge(DirectedEdge::new(from, to, weight)?)
    }

    /// Number of edges pointing into a vertex
    pub fn indegree(&self, vertex: usize) -> Result<usize> {
        self.indegree
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns the graph with every edge reversed
    pub fn reverse(&self) -> Self {
        let mut reversed = EdgeWeightedDigraph::new(self.vertex_count());
        for edge in &self.edges {
            // Same vertex set, so endpoints are always in range.
            let flipped = edge.reversed();
            let id = EdgeId(reversed.edges.len());
            reversed.adjacency[flipped.from()].push(id);
            reversed.indegree[flipped.to()] += 1;
            reversed.edges.push(flipped);
        }
        reversed
    }
}

impl<W> Graph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge(&self, id: EdgeId) -> &DirectedEdge<W> {
        &self.edges[id.0]
    }

    fn outdegree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new(self.adjacency.iter().flatten().copied())
    }
}

impl<W> Display for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for (v, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", v)?;
            for &id in edges {
                write!(f, " {}", self.edge(id))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
