//! Queue-based Bellman-Ford with online negative cycle detection.
//!
//! Only vertices whose distance just improved are re-examined, in strict FIFO
//! order. A reachable negative cycle would keep the queue busy forever, so every
//! `V` edge relaxations the predecessor forest is searched for a cycle; any cycle
//! in that forest has negative weight and ends the run.

use log::{debug, trace};
use num_traits::Float;
use serde::Serialize;
use std::fmt::Debug;

use crate::algorithm::traits::ShortestPaths;
use crate::algorithm::tree::ShortestPathTree;
use crate::data_structures::VertexQueue;
use crate::graph::{DirectedCycle, DirectedEdge, EdgeId, EdgeSubgraph, Graph};
use crate::{Error, Result};

/// Counters collected while the engine runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelaxationStats {
    /// Edges examined; drives the cycle check cadence
    pub relaxations: usize,
    /// Relaxations that lowered a distance
    pub improvements: usize,
    pub vertices_dequeued: usize,
    /// Searches of the predecessor forest
    pub cycle_checks: usize,
}

/// Single-source shortest paths in a graph that may have negative weights
///
/// The whole computation happens in [`BellmanFordSP::new`]; afterwards the
/// engine only answers queries. The graph is borrowed, so one graph can back
/// any number of engines with different sources.
#[derive(Debug)]
pub struct BellmanFordSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    tree: ShortestPathTree<W>,
    cycle: Option<Vec<EdgeId>>,
    stats: RelaxationStats,
}

impl<'g, W, G> BellmanFordSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Computes shortest paths from `source`, stopping early on a negative cycle
    pub fn new(graph: &'g G, source: usize) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let mut sp = BellmanFordSP {
            graph,
            tree: ShortestPathTree::new(graph.vertex_count(), source),
            cycle: None,
            stats: RelaxationStats::default(),
        };
        sp.run();
        Ok(sp)
    }

    fn run(&mut self) {
        let n = self.graph.vertex_count();
        debug!(
            "bellman-ford from {} over {} vertices, {} edges",
            self.tree.source,
            n,
            self.graph.edge_count()
        );

        let mut queue = VertexQueue::new(n);
        queue.push(self.tree.source);

        while !self.has_negative_cycle() {
            let Some(v) = queue.pop() else {
                break;
            };
            self.stats.vertices_dequeued += 1;
            self.relax(v, &mut queue);
        }

        debug!(
            "bellman-ford from {} finished: negative cycle = {}, {:?}",
            self.tree.source,
            self.has_negative_cycle(),
            self.stats
        );
    }

    // Relaxes the edges leaving `v`, checking for a cycle every `V` relaxations.
    fn relax(&mut self, v: usize, queue: &mut VertexQueue) {
        let graph = self.graph;
        let n = graph.vertex_count();

        for id in graph.outgoing_edges(v) {
            let edge = graph.edge(id);
            if self.tree.relax(id, edge) {
                self.stats.improvements += 1;
                queue.push(edge.to());
            }

            self.stats.relaxations += 1;
            if self.stats.relaxations % n == 0 {
                self.find_negative_cycle();
                if self.has_negative_cycle() {
                    return;
                }
            }
        }
    }

    fn find_negative_cycle(&mut self) {
        let forest = EdgeSubgraph::from_edges(self.graph, self.tree.edge_to.iter().flatten().copied());
        self.stats.cycle_checks += 1;
        trace!(
            "cycle check #{} over {} predecessor edges",
            self.stats.cycle_checks,
            forest.edge_count()
        );

        self.cycle = DirectedCycle::find(&forest);
        if let Some(cycle) = &self.cycle {
            debug!(
                "negative cycle of {} edges found after {} relaxations",
                cycle.len(),
                self.stats.relaxations
            );
        }
    }

    /// Returns true if a negative cycle reachable from the source was found
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Edges of the negative cycle in traversal order, if one was found
    pub fn negative_cycle(&self) -> Option<Vec<DirectedEdge<W>>> {
        self.cycle
            .as_ref()
            .map(|ids| ids.iter().map(|&id| *self.graph.edge(id)).collect())
    }

    /// Handles of the negative cycle's edges in the borrowed graph
    pub fn negative_cycle_ids(&self) -> Option<&[EdgeId]> {
        self.cycle.as_deref()
    }

    pub fn stats(&self) -> &RelaxationStats {
        &self.stats
    }

    /// The graph the paths were computed on
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}

impl<'g, W, G> ShortestPaths<W> for BellmanFordSP<'g, W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn source(&self) -> usize {
        self.tree.source
    }

    fn dist_to(&self, v: usize) -> Result<W> {
        self.tree.check_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycle);
        }
        Ok(self.tree.dist_to[v])
    }

    /// Advisory once a negative cycle was found: relaxation stopped early, so
    /// some reachable vertices may still look unreachable.
    fn has_path_to(&self, v: usize) -> Result<bool> {
        self.tree.check_vertex(v)?;
        Ok(self.tree.dist_to[v] < W::infinity())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.tree.check_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycle);
        }
        self.tree.path_to(self.graph, v)
    }
}
