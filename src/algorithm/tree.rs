use num_traits::Float;
use std::fmt::Debug;

use crate::graph::{DirectedEdge, EdgeId, Graph};
use crate::{Error, Result};

/// Distances from a source and the edge that last improved each vertex
#[derive(Debug, Clone)]
pub(crate) struct ShortestPathTree<W>
where
    W: Float + Debug + Copy,
{
    pub(crate) source: usize,
    pub(crate) dist_to: Vec<W>,
    pub(crate) edge_to: Vec<Option<EdgeId>>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Debug + Copy,
{
    /// Every vertex unreachable except `source` at distance zero
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut dist_to = vec![W::infinity(); vertex_count];
        dist_to[source] = W::zero();
        ShortestPathTree {
            source,
            dist_to,
            edge_to: vec![None; vertex_count],
        }
    }

    /// Tries to shorten the path to the head of `edge`; returns true on improvement
    pub(crate) fn relax(&mut self, id: EdgeId, edge: &DirectedEdge<W>) -> bool {
        let (v, w) = (edge.from(), edge.to());
        let candidate = self.dist_to[v] + edge.weight();
        if candidate < self.dist_to[w] {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(id);
            true
        } else {
            false
        }
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.dist_to.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(v))
        }
    }

    /// Source-to-`v` edges, `None` when `v` is unreachable
    ///
    /// The walk is capped at one edge per vertex, so a corrupted (cyclic)
    /// predecessor forest yields an error instead of looping.
    pub(crate) fn path_to<G>(&self, graph: &G, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>>
    where
        G: Graph<W>,
    {
        self.check_vertex(v)?;
        if self.dist_to[v] == W::infinity() {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut x = v;
        while let Some(id) = self.edge_to[x] {
            if path.len() == self.dist_to.len() {
                return Err(Error::AlgorithmError(format!(
                    "predecessor walk from vertex {} did not reach the source",
                    v
                )));
            }
            let edge = *graph.edge(id);
            path.push(edge);
            x = edge.from();
        }
        path.reverse();
        Ok(Some(path))
    }
}
