//! Bellman SSSP - single-source shortest paths with negative edge weights
//!
//! This library implements the queue-based variant of the Bellman-Ford algorithm
//! (often called SPFA). Vertices are relaxed in strict first-in-first-out order,
//! and every `V` edge relaxations the current predecessor forest is searched for a
//! cycle. A cycle in that forest is always a negative cycle, which is reported as a
//! concrete sequence of edges instead of looping forever.
//!
//! ```
//! use bellman_sssp::{BellmanFordSP, EdgeWeightedDigraph, ShortestPaths};
//!
//! let mut graph = EdgeWeightedDigraph::new(3);
//! graph.add(0, 1, 1.0).unwrap();
//! graph.add(1, 2, -0.5).unwrap();
//!
//! let sp = BellmanFordSP::new(&graph, 0).unwrap();
//! assert!(!sp.has_negative_cycle());
//! assert_eq!(sp.dist_to(2).unwrap(), 0.5);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

pub use algorithm::{
    bellman_ford::{BellmanFordSP, RelaxationStats},
    dijkstra::DijkstraSP,
    ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{DirectedCycle, DirectedEdge, EdgeId, EdgeWeightedDigraph, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("vertex {0} is out of range")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("negative cycle exists, shortest paths are undefined")]
    NegativeCycle,

    #[error("Malformed graph input: {0}")]
    MalformedGraph(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to format report: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
