pub mod cycle;
pub mod directed;
pub mod edge;
pub mod generators;
pub mod subgraph;
pub mod traits;

pub use cycle::DirectedCycle;
pub use directed::EdgeWeightedDigraph;
pub use edge::{DirectedEdge, EdgeId};
pub use subgraph::EdgeSubgraph;
pub use traits::Graph;
